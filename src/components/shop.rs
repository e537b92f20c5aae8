//! Catalog layout.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::filter_panel::FilterPanel;
use crate::components::pokemon_list::PokemonList;

stylance::import_crate_style!(css, "src/components/shop.module.css");

/// Title, filter panel and pokemon grid.
///
/// Filters are derived from the URL once here and handed to both children,
/// so the checkboxes and the grid can never disagree.
#[component]
pub fn Shop(title: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let filters = ctx.filters();

    view! {
        <div class=css::wrapper>
            <h1 class=css::title>{title}</h1>
            <div class=css::content>
                <FilterPanel filters=filters />
                <PokemonList filters=filters />
            </div>
        </div>
    }
}
