//! Naive detail view.
//!
//! Shows only the name captured from `/pokemon/<name>`; no data is fetched.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/detail.module.css");

#[component]
pub fn PokemonDetail(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let go_back = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate("/");
    };

    view! {
        <div class=css::wrapper>
            <a class=css::back href="/" on:click=go_back aria-label="Back to catalog">
                <Icon icon=ic::CHEVRON_LEFT />
                "Back"
            </a>
            <h1 class=css::title>{name}</h1>
        </div>
    }
}
