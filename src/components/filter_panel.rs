//! Type filter panel.
//!
//! Lists every pokemon type as a checkbox. Checking or unchecking pushes a
//! new `types` query onto the history; the checked state is read back from
//! the URL rather than kept locally.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use pokeshop_core::format::capitalize_first;
use pokeshop_core::{AsyncState, BrowserClient, Category, PokeApi};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::type_color::TypeColor;
use crate::config::{ERROR_MESSAGE, LOADING_MESSAGE};

stylance::import_crate_style!(css, "src/components/filter_panel.module.css");

/// Type checkboxes.
///
/// Types are fetched once per mount.
#[component]
pub fn FilterPanel(filters: Memo<Vec<String>>) -> impl IntoView {
    let categories = RwSignal::new(AsyncState::<Vec<Category>>::Pending);

    spawn_local(async move {
        let result = PokeApi::new(BrowserClient::new()).fetch_categories().await;
        let _ = categories.try_set(result.into());
    });

    view! {
        {move || match categories.get() {
            AsyncState::Idle | AsyncState::Pending => view! {
                <div class=css::status role="region" aria-live="polite" aria-busy="true">
                    {LOADING_MESSAGE}
                </div>
            }.into_any(),
            AsyncState::Errored(_) => view! {
                <div class=css::error role="alert">
                    <Icon icon=ic::WARNING />
                    {ERROR_MESSAGE}
                </div>
            }.into_any(),
            AsyncState::Complete(list) => view! {
                <div role="region" aria-live="polite">
                    <ul class=css::list>
                        {list
                            .into_iter()
                            .map(|category| view! { <FilterOption name=category.name filters=filters /> })
                            .collect_view()}
                    </ul>
                </div>
            }.into_any(),
        }}
    }
}

#[component]
fn FilterOption(name: String, filters: Memo<Vec<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = format!("checkbox-{}", name);
    let aria_label = format!("Filter by {} type", name);
    let label = capitalize_first(&name);

    let checked = {
        let name = name.clone();
        move || filters.with(|f| f.contains(&name))
    };

    let on_change = {
        let name = name.clone();
        move |ev: ev::Event| {
            let Some(target) = ev.target() else { return };
            let input = target.unchecked_into::<web_sys::HtmlInputElement>();
            ctx.toggle_filter(&name, input.checked());
        }
    };

    view! {
        <li class=css::option>
            <input
                id=id.clone()
                type="checkbox"
                prop:checked=checked
                on:change=on_change
                aria-label=aria_label
            />
            <label for=id>{label}</label>
            <TypeColor name=name decorative=true />
        </li>
    }
}
