//! Filter state carried in the `types` query parameter.
//!
//! The URL is the only place filter state lives: components derive it from
//! the current [`Location`] and change it by pushing a new history entry.

use url::form_urlencoded;

use crate::config::{TYPES_PARAM, TYPES_SEPARATOR};
use crate::history::{History, Location};

/// Derive the active type filters from a query string.
///
/// A leading `?` is accepted. A missing or empty `types` value yields an
/// empty list; entries are not trimmed.
pub fn derive_filters(search: &str) -> Vec<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TYPES_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(|value| value.split(TYPES_SEPARATOR).map(String::from).collect())
        .unwrap_or_default()
}

/// Add or remove `type_name` from the filter list.
///
/// Activating appends without a duplicate check; deactivating removes
/// every occurrence.
pub fn toggle_filter(current: &[String], type_name: &str, active: bool) -> Vec<String> {
    if active {
        let mut next = current.to_vec();
        next.push(type_name.to_string());
        next
    } else {
        current
            .iter()
            .filter(|t| t.as_str() != type_name)
            .cloned()
            .collect()
    }
}

/// Serialize filters as a query string (without `?`).
///
/// Each entry is form-urlencoded on its own and the entries are joined with
/// a literal separator, so plain type names stay readable (`types=fire,water`)
/// while `+`, `&`, `#` and `%` survive [`derive_filters`].
pub fn filters_search(filters: &[String]) -> String {
    let encoded: Vec<String> = filters
        .iter()
        .map(|f| form_urlencoded::byte_serialize(f.as_bytes()).collect())
        .collect();
    format!(
        "{}={}",
        TYPES_PARAM,
        encoded.join(&TYPES_SEPARATOR.to_string())
    )
}

/// Toggle a filter and push the result, keeping the current pathname.
pub fn apply_toggle(history: &impl History, type_name: &str, active: bool) {
    let location = history.location();
    let current = derive_filters(&location.search);
    let next = toggle_filter(&current, type_name, active);
    history.push_location(&Location::new(location.pathname, filters_search(&next)));
}
