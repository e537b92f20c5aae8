//! Browser console logging.
//!
//! Messages go to `console.*` on wasm32 and are dropped elsewhere so native
//! test runs never touch the JS bindings.

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::info_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_msg: &str) {}
