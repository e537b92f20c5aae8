//! Application configuration.
//!
//! Shared constants live in [`pokeshop_core::config`] and are re-exported
//! here; this module adds the settings only the UI cares about.

pub use pokeshop_core::config::*;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Message shown in place of any failed fetch.
pub const ERROR_MESSAGE: &str = "Oops, something went wrong";

/// Message shown while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Message shown when the filtered catalog is empty.
pub const EMPTY_MESSAGE: &str = "No pokemons found";
