//! Async operation state and stale-response protection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::NetworkError;

/// Lifecycle of one async fetch.
///
/// Every new input restarts at [`AsyncState::Pending`]; nothing is cached
/// across inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AsyncState<T> {
    #[default]
    Idle,
    Pending,
    Complete(T),
    Errored(NetworkError),
}

impl<T> AsyncState<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Complete(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, NetworkError>> for AsyncState<T> {
    fn from(result: Result<T, NetworkError>) -> Self {
        match result {
            Ok(value) => Self::Complete(value),
            Err(err) => Self::Errored(err),
        }
    }
}

/// Token identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues monotonically increasing request tokens.
///
/// Only the most recently issued token is current, so a slow response to a
/// superseded request can be recognised and dropped instead of overwriting
/// a fresher result.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` belongs to the latest request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Run `apply` only if `token` is still current.
    ///
    /// Returns whether it ran, so callers can log dropped responses.
    pub fn apply_if_current(&self, token: RequestToken, apply: impl FnOnce()) -> bool {
        let current = self.is_current(token);
        if current {
            apply();
        }
        current
    }
}
