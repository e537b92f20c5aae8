//! Path-based routing.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CATALOG_PATHS;

static DETAIL_PATH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^/pokemon/(.+)$").ok());

/// Views reachable by pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Catalog with filter panel: `/`
    Catalog,
    /// Naive detail view: `/pokemon/<name>`
    Detail { name: String },
    /// Anything else; renders nothing.
    NotFound,
}

impl Route {
    pub fn from_path(pathname: &str) -> Self {
        if CATALOG_PATHS.contains(&pathname) {
            return Self::Catalog;
        }

        DETAIL_PATH
            .as_ref()
            .and_then(|re| re.captures(pathname))
            .and_then(|caps| caps.get(1))
            .map(|name| Self::Detail {
                name: name.as_str().to_string(),
            })
            .unwrap_or(Self::NotFound)
    }
}

/// Pathname of a pokemon's detail view.
pub fn detail_path(name: &str) -> String {
    format!("/pokemon/{}", name)
}
