//! URL-driven filtering from navigation through to the fetched catalog.

use pokeshop_core::fetch::mock::MockClient;
use pokeshop_core::{
    AsyncState, FetchError, History, Item, MemoryHistory, PokeApi, RequestSequencer, apply_toggle,
    derive_filters,
};
use serde_json::{Value, json};

const BASE: &str = "https://api.test/v2";

fn detail(name: &str, types: &[&str]) -> Value {
    json!({
        "name": name,
        "sprites": { "other": { "official-artwork": { "front_default": null } } },
        "types": types.iter().map(|t| json!({ "type": { "name": t } })).collect::<Vec<_>>(),
    })
}

fn client() -> MockClient {
    MockClient::new()
        .respond(
            format!("{}/pokemon?limit=100", BASE),
            json!({ "results": [
                { "name": "pidgey", "url": "https://api.test/v2/pokemon/16/" },
                { "name": "rattata", "url": "https://api.test/v2/pokemon/19/" },
                { "name": "pidgeot", "url": "https://api.test/v2/pokemon/18/" },
            ] }),
        )
        .respond("https://api.test/v2/pokemon/16/", detail("pidgey", &["normal", "flying"]))
        .respond("https://api.test/v2/pokemon/19/", detail("rattata", &["normal"]))
        .respond("https://api.test/v2/pokemon/18/", detail("pidgeot", &["normal", "flying"]))
}

#[tokio::test]
async fn test_filters_from_url_drive_catalog() {
    let history = MemoryHistory::new("/");
    let api = PokeApi::with_base_url(client(), BASE);

    let all = api
        .fetch_catalog(&derive_filters(&history.location().search))
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    apply_toggle(&history, "flying", true);
    let flying = api
        .fetch_catalog(&derive_filters(&history.location().search))
        .await
        .unwrap();
    let names: Vec<_> = flying.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["pidgey", "pidgeot"]);

    apply_toggle(&history, "fire", true);
    let state: AsyncState<_> = api
        .fetch_catalog(&derive_filters(&history.location().search))
        .await
        .into();
    assert_eq!(state, AsyncState::Complete(Vec::new()));
}

#[tokio::test]
async fn test_detail_failure_is_error_state() {
    let api = PokeApi::with_base_url(
        client().fail("https://api.test/v2/pokemon/19/", FetchError::Timeout),
        BASE,
    );
    let state: AsyncState<_> = api.fetch_catalog(&[]).await.into();
    assert!(matches!(state, AsyncState::Errored(_)));
}

#[tokio::test]
async fn test_stale_result_is_discarded() {
    let api = PokeApi::with_base_url(client(), BASE);
    let seq = RequestSequencer::new();

    let slow = seq.begin();
    let fast = seq.begin();
    let fast_result = api.fetch_catalog(&["flying".to_string()]).await;
    let slow_result = api.fetch_catalog(&[]).await;

    let mut shown: AsyncState<Vec<Item>> = AsyncState::Pending;
    assert!(seq.apply_if_current(fast, || shown = fast_result.into()));
    assert!(!seq.apply_if_current(slow, || shown = slow_result.into()));
    assert_eq!(shown.value().map(Vec::len), Some(2));
}
