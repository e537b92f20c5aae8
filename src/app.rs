//! Root application module.
//!
//! Contains the main App component and the AppContext that hands the
//! history adapter to every view.

use leptos::prelude::*;
use pokeshop_core::{BrowserHistory, History, Location, apply_toggle, derive_filters};

use crate::components::AppRouter;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide navigation context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. The history adapter is the only writer of
/// [`AppContext::location`]; views change state by navigating, never by
/// setting the signal.
///
/// # Note
///
/// This struct is `Copy`: both fields are arena handles. The history lives
/// in local storage because its `popstate` closure is not `Send`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browser history adapter, dropped (and detached) with the root owner.
    pub history: StoredValue<BrowserHistory, LocalStorage>,
    /// Mirror of the current location, updated on every navigation.
    pub location: RwSignal<Location>,
}

impl AppContext {
    pub fn new() -> Self {
        let history = BrowserHistory::new();
        let location = RwSignal::new(history.location());
        Self {
            history: StoredValue::new_local(history),
            location,
        }
    }

    /// Push `href` onto the browser history.
    pub fn navigate(&self, href: &str) {
        self.history.with_value(|h| h.navigate(href));
    }

    /// Switch a type filter on or off via the URL.
    pub fn toggle_filter(&self, type_name: &str, active: bool) {
        self.history
            .with_value(|h| apply_toggle(h, type_name, active));
    }

    /// Active filters, re-derived whenever the query string changes.
    pub fn filters(&self) -> Memo<Vec<String>> {
        let location = self.location;
        Memo::new(move |_| location.with(|l| derive_filters(&l.search)))
    }

    /// Mirror history changes into [`AppContext::location`] until the
    /// current owner is cleaned up.
    fn sync_location(&self) {
        let location = self.location;
        let subscription = self
            .history
            .with_value(|h| h.subscribe(move |loc| location.set(loc.clone())));

        let subscription = StoredValue::new_local(Some(subscription));
        on_cleanup(move || {
            let _ = subscription.try_update_value(|s| s.take());
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the AppContext
/// - Subscribes the location signal to history changes
/// - Renders the router
#[component]
pub fn App(shop_title: String) -> impl IntoView {
    let ctx = AppContext::new();
    ctx.sync_location();
    provide_context(ctx);

    view! {
        <main>
            <AppRouter shop_title=shop_title />
        </main>
    }
}
