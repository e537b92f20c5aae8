//! PokeAPI catalog and taxonomy fetchers.
//!
//! PokeAPI cannot intersect types server-side, so the catalog is the first
//! page of pokemon fetched in full and filtered here. Changing that would
//! need a different upstream API; it is a known limitation, not something
//! to optimize around.

use futures::future::try_join_all;

use crate::config::{API_BASE_URL, CATALOG_LIMIT, TYPE_LIMIT};
use crate::error::NetworkError;
use crate::fetch::JsonClient;
use crate::log;
use crate::models::{Category, Item, NamedResourceList, PokemonDetail};

/// Keep items that have every type in `filters`, preserving order.
///
/// An empty filter list keeps everything.
pub fn filter_items(items: Vec<Item>, filters: &[String]) -> Vec<Item> {
    if filters.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| item.has_all(filters)).collect()
}

/// PokeAPI client.
pub struct PokeApi<C> {
    client: C,
    base_url: String,
}

impl<C: JsonClient> PokeApi<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, API_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// URL of the catalog index.
    pub fn catalog_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, CATALOG_LIMIT)
    }

    /// URL of the type list.
    pub fn types_url(&self) -> String {
        format!("{}/type?limit={}", self.base_url, TYPE_LIMIT)
    }

    /// Fetch the catalog and keep items matching every filter.
    ///
    /// Details are requested concurrently; the first failing request fails
    /// the whole batch, partial lists are never returned.
    pub async fn fetch_catalog(&self, filters: &[String]) -> Result<Vec<Item>, NetworkError> {
        let index: NamedResourceList =
            self.client
                .get_json(&self.catalog_url())
                .await
                .inspect_err(|e| log::error(&format!("catalog index: {}", e)))?;

        let details = try_join_all(
            index
                .results
                .iter()
                .map(|entry| self.client.get_json::<PokemonDetail>(&entry.url)),
        )
        .await
        .inspect_err(|e| log::error(&format!("catalog details: {}", e)))?;

        let items = details.into_iter().map(Item::from).collect();
        Ok(filter_items(items, filters))
    }

    /// Fetch the filter options.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, NetworkError> {
        let list: NamedResourceList = self
            .client
            .get_json(&self.types_url())
            .await
            .inspect_err(|e| log::error(&format!("type list: {}", e)))?;

        Ok(list.results.into_iter().map(Category::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::mock::MockClient;
    use serde_json::{Value, json};

    const BASE: &str = "https://api.test/v2";

    fn item(name: &str, categories: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            image_url: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn detail(name: &str, types: &[&str]) -> Value {
        json!({
            "name": name,
            "sprites": { "other": { "official-artwork": {
                "front_default": format!("https://img.test/{}.png", name)
            } } },
            "types": types
                .iter()
                .enumerate()
                .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
                .collect::<Vec<_>>(),
        })
    }

    fn catalog_client() -> MockClient {
        MockClient::new()
            .respond(
                format!("{}/pokemon?limit=100", BASE),
                json!({
                    "count": 3,
                    "next": null,
                    "results": [
                        { "name": "charmander", "url": format!("{}/pokemon/4/", BASE) },
                        { "name": "charizard", "url": format!("{}/pokemon/6/", BASE) },
                        { "name": "squirtle", "url": format!("{}/pokemon/7/", BASE) },
                    ]
                }),
            )
            .respond(format!("{}/pokemon/4/", BASE), detail("charmander", &["fire"]))
            .respond(
                format!("{}/pokemon/6/", BASE),
                detail("charizard", &["fire", "flying"]),
            )
            .respond(format!("{}/pokemon/7/", BASE), detail("squirtle", &["water"]))
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_filter_items_and_semantics() {
        let items = vec![item("a", &["fire"]), item("b", &["fire", "flying"])];
        let kept = filter_items(items, &strings(&["fire", "flying"]));
        assert_eq!(names(&kept), vec!["b"]);
    }

    #[test]
    fn test_filter_items_empty_filters_keep_all() {
        let items = vec![item("b", &["grass"]), item("a", &["fire"]), item("c", &[])];
        let kept = filter_items(items.clone(), &[]);
        assert_eq!(kept, items);
    }

    #[test]
    fn test_filter_items_preserves_order() {
        let items = vec![
            item("z", &["fire"]),
            item("y", &["water"]),
            item("x", &["fire", "ice"]),
        ];
        let kept = filter_items(items, &strings(&["fire"]));
        assert_eq!(names(&kept), vec!["z", "x"]);
    }

    #[test]
    fn test_filter_items_no_match_is_empty() {
        let items = vec![item("a", &["fire"])];
        assert!(filter_items(items, &strings(&["dragon"])).is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = PokeApi::with_base_url(MockClient::new(), "https://api.test/v2/");
        assert_eq!(api.catalog_url(), "https://api.test/v2/pokemon?limit=100");
        assert_eq!(api.types_url(), "https://api.test/v2/type?limit=100");
    }

    #[tokio::test]
    async fn test_fetch_catalog_unfiltered() {
        let api = PokeApi::with_base_url(catalog_client(), BASE);
        let items = api.fetch_catalog(&[]).await.unwrap();

        assert_eq!(names(&items), vec!["charmander", "charizard", "squirtle"]);
        assert_eq!(items[1].categories, vec!["fire", "flying"]);
        assert_eq!(items[2].image_url, "https://img.test/squirtle.png");
    }

    #[tokio::test]
    async fn test_fetch_catalog_filtered() {
        let api = PokeApi::with_base_url(catalog_client(), BASE);

        let fire = api.fetch_catalog(&strings(&["fire"])).await.unwrap();
        assert_eq!(names(&fire), vec!["charmander", "charizard"]);

        let both = api.fetch_catalog(&strings(&["fire", "flying"])).await.unwrap();
        assert_eq!(names(&both), vec!["charizard"]);

        let none = api.fetch_catalog(&strings(&["fire", "water"])).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_catalog_detail_failure_fails_batch() {
        let client =
            catalog_client().fail(format!("{}/pokemon/6/", BASE), FetchError::HttpStatus(500));
        let api = PokeApi::with_base_url(client, BASE);

        let err = api.fetch_catalog(&[]).await.unwrap_err();
        assert_eq!(err.cause(), &FetchError::HttpStatus(500));
    }

    #[tokio::test]
    async fn test_fetch_catalog_index_failure() {
        let client = MockClient::new().fail(
            format!("{}/pokemon?limit=100", BASE),
            FetchError::Network("offline".to_string()),
        );
        let api = PokeApi::with_base_url(client, BASE);

        let err = api.fetch_catalog(&[]).await.unwrap_err();
        assert_eq!(err.cause(), &FetchError::Network("offline".to_string()));
        assert_eq!(api.client().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_catalog_bad_shape() {
        let client = MockClient::new().respond(
            format!("{}/pokemon?limit=100", BASE),
            json!({ "results": "nope" }),
        );
        let api = PokeApi::with_base_url(client, BASE);

        let err = api.fetch_catalog(&[]).await.unwrap_err();
        assert!(matches!(err.cause(), FetchError::JsonParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let client = MockClient::new().respond(
            format!("{}/type?limit=100", BASE),
            json!({
                "count": 3,
                "results": [
                    { "name": "normal", "url": format!("{}/type/1/", BASE) },
                    { "name": "fighting", "url": format!("{}/type/2/", BASE) },
                    { "name": "flying", "url": format!("{}/type/3/", BASE) },
                ]
            }),
        );
        let api = PokeApi::with_base_url(client, BASE);

        let categories = api.fetch_categories().await.unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["normal", "fighting", "flying"]);
    }

    #[tokio::test]
    async fn test_fetch_categories_http_error() {
        let client = MockClient::new().fail(
            format!("{}/type?limit=100", BASE),
            FetchError::HttpStatus(429),
        );
        let api = PokeApi::with_base_url(client, BASE);

        let err = api.fetch_categories().await.unwrap_err();
        assert_eq!(err.cause(), &FetchError::HttpStatus(429));
    }
}
