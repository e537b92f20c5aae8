//! UI components built with Leptos.
//!
//! - [`router`] - Path routing (main entry point)
//! - [`shop`] - Catalog layout: title, filter panel, pokemon grid
//! - [`filter_panel`] - Type checkboxes bound to the `types` parameter
//! - [`pokemon_list`] - Filtered catalog grid
//! - [`detail`] - Naive per-pokemon view
//! - [`type_color`] - Coloured type badge
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod detail;
pub mod filter_panel;
pub mod icons;
pub mod pokemon_list;
pub mod router;
pub mod shop;
pub mod type_color;

pub use router::AppRouter;
