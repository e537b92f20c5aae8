//! HTTP access for the fetchers.
//!
//! [`JsonClient`] is the seam between the PokeAPI fetchers and the network.
//! [`BrowserClient`] implements it on the Fetch API with a timeout raced via
//! `Promise.race`.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::error::FetchError;

/// Something that can GET a URL and decode the JSON body.
#[allow(async_fn_in_trait)]
pub trait JsonClient {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// The timeout promise resolves to `undefined`, which is how a timeout is
/// told apart from a real result.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// BrowserClient
// =============================================================================

/// Fetch API client used in the browser.
#[derive(Clone, Copy, Debug)]
pub struct BrowserClient {
    timeout_ms: i32,
}

impl BrowserClient {
    pub fn new() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| FetchError::RequestCreationFailed)?;

        match race_with_timeout(window.fetch_with_request(&request), self.timeout_ms).await {
            RaceResult::TimedOut => Err(FetchError::Timeout),
            RaceResult::Error(msg) => Err(FetchError::Network(msg)),
            RaceResult::Completed(result) => {
                let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

                if !resp.ok() {
                    return Err(FetchError::HttpStatus(resp.status()));
                }

                let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                    .await
                    .map_err(|_| FetchError::ResponseReadFailed)?;

                text.as_string().ok_or(FetchError::InvalidContent)
            }
        }
    }
}

impl Default for BrowserClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonClient for BrowserClient {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let text = self.fetch_text(url).await?;
        serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))
    }
}

// =============================================================================
// MockClient
// =============================================================================

/// Canned-response client for tests.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use serde::de::DeserializeOwned;
    use serde_json::Value;

    use super::JsonClient;
    use crate::error::FetchError;

    /// Serves JSON bodies by exact URL; unknown URLs answer 404.
    #[derive(Default)]
    pub struct MockClient {
        routes: HashMap<String, Result<Value, FetchError>>,
        requests: RefCell<Vec<String>>,
    }

    impl MockClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, url: impl Into<String>, body: Value) -> Self {
            self.routes.insert(url.into(), Ok(body));
            self
        }

        pub fn fail(mut self, url: impl Into<String>, error: FetchError) -> Self {
            self.routes.insert(url.into(), Err(error));
            self
        }

        /// URLs requested so far, in call order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl JsonClient for MockClient {
        async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            let body = self
                .routes
                .get(url)
                .cloned()
                .unwrap_or(Err(FetchError::HttpStatus(404)))?;
            serde_json::from_value(body).map_err(|e| FetchError::JsonParse(e.to_string()))
        }
    }
}
