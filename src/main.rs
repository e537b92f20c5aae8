mod app;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let root = utils::dom::mount_element().expect("Failed to find #app element");
    let shop_title = utils::dom::shop_title(&root);

    mount_to(root, move || view! { <App shop_title=shop_title /> }).forget();
}
