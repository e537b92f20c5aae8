//! Filtered catalog grid.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use pokeshop_core::format::capitalize_first;
use pokeshop_core::route::detail_path;
use pokeshop_core::{AsyncState, BrowserClient, Item, PokeApi, RequestSequencer, log};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::type_color::TypeColor;
use crate::config::{EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE};

stylance::import_crate_style!(css, "src/components/pokemon_list.module.css");

/// Grid of pokemon matching every active filter.
///
/// Each filter change starts a new fetch and resets the view to pending.
/// Responses are tagged with a request token; one that arrives after a
/// newer request was started is dropped.
#[component]
pub fn PokemonList(filters: Memo<Vec<String>>) -> impl IntoView {
    let state = RwSignal::new(AsyncState::<Vec<Item>>::Idle);
    let sequencer = RequestSequencer::new();

    Effect::new(move |_| {
        let filters = filters.get();
        let token = sequencer.begin();
        let sequencer = sequencer.clone();
        state.set(AsyncState::Pending);

        spawn_local(async move {
            let result = PokeApi::new(BrowserClient::new())
                .fetch_catalog(&filters)
                .await;

            let applied = sequencer.apply_if_current(token, || {
                let _ = state.try_set(result.into());
            });
            if !applied {
                log::info(&format!("dropping stale catalog response for {:?}", filters));
            }
        });
    });

    view! {
        {move || match state.get() {
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
            AsyncState::Complete(items) if items.is_empty() => view! {
                <div class=css::empty role="region" aria-live="polite">
                    <Icon icon=ic::SEARCH />
                    {EMPTY_MESSAGE}
                </div>
            }.into_any(),
            AsyncState::Complete(items) => view! {
                <div role="region" aria-live="polite">
                    <ul class=css::grid>
                        {items
                            .into_iter()
                            .map(|item| view! { <PokemonCard item=item /> })
                            .collect_view()}
                    </ul>
                </div>
            }.into_any(),
        }}
    }
}

#[component]
fn PokemonCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let Item {
        name,
        image_url,
        categories,
    } = item;

    let href = detail_path(&name);
    let artwork_label = format!("{} official artwork", name);
    let link_label = format!("View details for {}", name);
    let display_name = capitalize_first(&name);
    let image_style =
        (!image_url.is_empty()).then(|| format!("background-image: url({})", image_url));

    let on_click = {
        let href = href.clone();
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(&href);
        }
    };

    view! {
        <li class=css::card>
            <div
                class=css::cardImage
                role="img"
                aria-label=artwork_label
                style=image_style
            ></div>
            <footer class=css::cardFooter>
                <a class=css::cardLink href=href on:click=on_click aria-label=link_label>
                    {display_name}
                </a>
                <div class=css::cardTypes>
                    {categories
                        .into_iter()
                        .map(|name| view! { <TypeColor name=name /> })
                        .collect_view()}
                </div>
            </footer>
        </li>
    }
}
