//! History adapter.
//!
//! The current [`Location`] is the single source of truth for what the shop
//! renders. Consumers receive a [`History`] handle explicitly and register
//! for change notifications with [`History::subscribe`]; the returned
//! [`Subscription`] removes the callback when dropped.
//!
//! - [`BrowserHistory`] - `pushState` plus `popstate`, for the web app
//! - [`MemoryHistory`] - in-memory entry stack, for tests and headless hosts

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::Closure};

use crate::log;

// ============================================================================
// Location
// ============================================================================

/// Current navigation position.
///
/// `search` is stored without the leading `?`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        let search = search.into();
        Self {
            pathname: pathname.into(),
            search: search.strip_prefix('?').unwrap_or(&search).to_string(),
        }
    }

    /// Parse an href such as `/pokemon/pikachu?types=fire`.
    ///
    /// Any `#fragment` is dropped. An empty path becomes `/`.
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        let (pathname, search) = href.split_once('?').unwrap_or((href, ""));
        let pathname = if pathname.is_empty() { "/" } else { pathname };
        Self::new(pathname, search)
    }

    /// Rebuild the href, with `?` only when there is a query.
    pub fn href(&self) -> String {
        if self.search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.search)
        }
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

type Listener = Rc<dyn Fn(&Location)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Subscriber list shared by every history implementation.
#[derive(Clone, Default)]
struct Listeners(Rc<RefCell<Registry>>);

impl Listeners {
    fn add(&self, listener: impl Fn(&Location) + 'static) -> Subscription {
        let mut registry = self.0.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.0),
        }
    }

    fn notify(&self, location: &Location) {
        // Snapshot so listeners can (un)subscribe or navigate re-entrantly.
        let snapshot: Vec<Listener> = self
            .0
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(location);
        }
    }

    fn len(&self) -> usize {
        self.0.borrow().listeners.len()
    }
}

/// Handle to a registered history listener.
///
/// The listener stays registered for as long as this value lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

// ============================================================================
// History
// ============================================================================

/// Navigation source of truth.
pub trait History {
    /// Current location.
    fn location(&self) -> Location;

    /// Push a new entry and notify every subscriber, including the caller.
    fn navigate(&self, href: &str);

    /// Register a listener for location changes.
    fn subscribe(&self, listener: impl Fn(&Location) + 'static) -> Subscription;

    /// Push `pathname` with a new query string.
    fn push_location(&self, location: &Location) {
        self.navigate(&location.href());
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

struct Entries {
    stack: Vec<Location>,
    index: usize,
}

/// In-memory history with back/forward support.
///
/// Cloning yields another handle onto the same stack.
#[derive(Clone)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Entries>>,
    listeners: Listeners,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: Rc::new(RefCell::new(Entries {
                stack: vec![Location::parse(initial)],
                index: 0,
            })),
            listeners: Listeners::default(),
        }
    }

    /// Move one entry back. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Move one entry forward. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    fn go(&self, delta: isize) -> bool {
        let location = {
            let mut entries = self.entries.borrow_mut();
            let Some(target) = entries.index.checked_add_signed(delta) else {
                return false;
            };
            if target >= entries.stack.len() {
                return false;
            }
            entries.index = target;
            entries.stack[target].clone()
        };
        self.listeners.notify(&location);
        true
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        let entries = self.entries.borrow();
        entries.stack[entries.index].clone()
    }

    fn navigate(&self, href: &str) {
        let location = Location::parse(href);
        {
            let mut entries = self.entries.borrow_mut();
            let next = entries.index + 1;
            entries.stack.truncate(next);
            entries.stack.push(location.clone());
            entries.index = next;
        }
        self.listeners.notify(&location);
    }

    fn subscribe(&self, listener: impl Fn(&Location) + 'static) -> Subscription {
        self.listeners.add(listener)
    }
}

// ============================================================================
// BrowserHistory
// ============================================================================

/// `window.history` adapter.
///
/// Pushes entries with `pushState` and forwards `popstate` (back/forward
/// buttons) to subscribers. The `popstate` handler is detached on drop.
pub struct BrowserHistory {
    listeners: Listeners,
    #[cfg(target_arch = "wasm32")]
    popstate: Option<Closure<dyn Fn()>>,
}

impl BrowserHistory {
    pub fn new() -> Self {
        let listeners = Listeners::default();

        #[cfg(target_arch = "wasm32")]
        let popstate = web_sys::window().map(|window| {
            let listeners = listeners.clone();
            let closure = Closure::wrap(Box::new(move || {
                listeners.notify(&current_location());
            }) as Box<dyn Fn()>);
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            closure
        });

        Self {
            listeners,
            #[cfg(target_arch = "wasm32")]
            popstate,
        }
    }
}

impl Default for BrowserHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for BrowserHistory {
    fn drop(&mut self) {
        if let (Some(window), Some(closure)) = (web_sys::window(), self.popstate.take()) {
            let _ = window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_location() -> Location {
    let Some(window) = web_sys::window() else {
        return Location::parse("/");
    };
    let location = window.location();
    Location::new(
        location.pathname().unwrap_or_else(|_| "/".to_string()),
        location.search().unwrap_or_default(),
    )
}

impl History for BrowserHistory {
    #[cfg(target_arch = "wasm32")]
    fn location(&self) -> Location {
        current_location()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn location(&self) -> Location {
        Location::parse("/")
    }

    fn navigate(&self, href: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window()
                && let Ok(history) = window.history()
                && history
                    .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
                    .is_err()
            {
                log::warn(&format!("pushState rejected for {}", href));
                return;
            }
        }

        log::info(&format!("navigate {}", href));
        self.listeners.notify(&self.location());
    }

    fn subscribe(&self, listener: impl Fn(&Location) + 'static) -> Subscription {
        self.listeners.add(listener)
    }
}
