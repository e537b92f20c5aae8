//! DOM and Web API utility functions.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::config::{APP_ROOT_ID, DEFAULT_SHOP_TITLE, SHOP_TITLE_ATTR};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The element the application mounts into (`#app`).
pub fn mount_element() -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(APP_ROOT_ID)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Shop title from the mount element's `data-shop-title`, or the default.
pub fn shop_title(root: &HtmlElement) -> String {
    title_or_default(root.get_attribute(SHOP_TITLE_ATTR))
}

fn title_or_default(attr: Option<String>) -> String {
    attr.filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SHOP_TITLE.to_string())
}
