//! Application configuration.
//!
//! Centralizes the constants shared by the fetchers, the router and the
//! Leptos front end.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown above the catalog when the host page does not provide one.
pub const DEFAULT_SHOP_TITLE: &str = "Pokemon Shop!";

/// Id of the element the application is mounted into.
pub const APP_ROOT_ID: &str = "app";

/// Attribute on the mount element that overrides the shop title.
pub const SHOP_TITLE_ATTR: &str = "data-shop-title";

// =============================================================================
// Network Configuration
// =============================================================================

/// PokeAPI v2 base URL.
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of pokemon fetched for the catalog (first page only).
pub const CATALOG_LIMIT: u32 = 100;

/// Number of types fetched for the filter panel.
pub const TYPE_LIMIT: u32 = 100;

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// URL Contract
// =============================================================================

/// Query parameter holding the comma-separated active type filters.
pub const TYPES_PARAM: &str = "types";

/// Separator between type names inside [`TYPES_PARAM`].
pub const TYPES_SEPARATOR: char = ',';

/// Pathnames that render the catalog view.
pub const CATALOG_PATHS: &[&str] = &["/", "/index.html"];
