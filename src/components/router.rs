//! Application router component.
//!
//! # Architecture
//!
//! - **URL is the source of truth**: the view is derived from the pathname
//! - **History events drive re-rendering**: back/forward and in-app links
//!   both update [`AppContext::location`]
//! - **Query changes do not remount**: toggling a filter only changes the
//!   search string, so the catalog view stays mounted

use leptos::prelude::*;
use pokeshop_core::Route;

use crate::app::AppContext;
use crate::components::detail::PokemonDetail;
use crate::components::shop::Shop;

/// Main application router.
///
/// - `/` → catalog with filters
/// - `/pokemon/<name>` → detail view
/// - anything else → nothing
#[component]
pub fn AppRouter(shop_title: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let route = Memo::new(move |_| ctx.location.with(|l| Route::from_path(&l.pathname)));

    move || match route.get() {
        Route::Catalog => view! { <Shop title=shop_title.clone() /> }.into_any(),
        Route::Detail { name } => view! { <PokemonDetail name=name /> }.into_any(),
        Route::NotFound => ().into_any(),
    }
}
