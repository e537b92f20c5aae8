//! Coloured dot identifying a pokemon type.

use leptos::prelude::*;
use pokeshop_core::format::type_color;

stylance::import_crate_style!(css, "src/components/type_color.module.css");

#[component]
pub fn TypeColor(
    name: String,
    /// Hide from assistive tech when a text label sits next to the dot.
    #[prop(optional)]
    decorative: bool,
) -> impl IntoView {
    let style = format!("background-color: {}", type_color(&name));
    let label = format!("Type: {}", name);

    view! {
        <span
            class=css::dot
            style=style
            role="img"
            title=name
            aria-label=label
            aria-hidden=decorative.then_some("true")
        ></span>
    }
}
