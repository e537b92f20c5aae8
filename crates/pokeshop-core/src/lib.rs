//! Domain logic for the Pokeshop catalog.
//!
//! - [`history`] - injected navigation source of truth with subscriptions
//! - [`filters`] - `types` query parameter derivation and toggling
//! - [`route`] - pathname to view mapping
//! - [`api`] - catalog and type fetchers over a [`fetch::JsonClient`]
//! - [`state`] - async operation state and request sequencing

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod format;
pub mod history;
pub mod log;
pub mod models;
pub mod route;
pub mod state;

pub use api::{PokeApi, filter_items};
pub use error::{FetchError, NetworkError};
pub use fetch::{BrowserClient, JsonClient};
pub use filters::{apply_toggle, derive_filters, filters_search, toggle_filter};
pub use history::{BrowserHistory, History, Location, MemoryHistory, Subscription};
pub use models::{Category, Item};
pub use route::Route;
pub use state::{AsyncState, RequestSequencer, RequestToken};
