//! Catalog data types and the PokeAPI wire format they are built from.

use serde::Deserialize;

// ============================================================================
// Domain Types
// ============================================================================

/// One catalog entry, built from a pokemon's detail response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Official artwork URL; empty when the API has none.
    pub image_url: String,
    /// Type names, in slot order.
    pub categories: Vec<String>,
}

impl Item {
    /// True when the item has every type in `filters`.
    pub fn has_all(&self, filters: &[String]) -> bool {
        filters.iter().all(|f| self.categories.contains(f))
    }
}

/// One filter option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

// ============================================================================
// Wire Types
// ============================================================================

/// Paginated list response (`/pokemon`, `/type`).
#[derive(Clone, Debug, Deserialize)]
pub struct NamedResourceList {
    pub results: Vec<NamedResource>,
}

/// `{ name, url }` entry of a list response.
#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Subset of `/pokemon/{id}` used by the catalog.
#[derive(Clone, Debug, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl From<PokemonDetail> for Item {
    fn from(detail: PokemonDetail) -> Self {
        Self {
            name: detail.name,
            image_url: detail
                .sprites
                .other
                .official_artwork
                .front_default
                .unwrap_or_default(),
            categories: detail.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

impl From<NamedResource> for Category {
    fn from(resource: NamedResource) -> Self {
        Self {
            name: resource.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_from_detail() {
        let detail: PokemonDetail = serde_json::from_value(json!({
            "id": 6,
            "name": "charizard",
            "sprites": {
                "front_default": "small.png",
                "other": {
                    "official-artwork": { "front_default": "https://img/6.png" }
                }
            },
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } },
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } }
            ]
        }))
        .unwrap();

        let item = Item::from(detail);
        assert_eq!(item.name, "charizard");
        assert_eq!(item.image_url, "https://img/6.png");
        assert_eq!(item.categories, vec!["fire", "flying"]);
    }

    #[test]
    fn test_missing_artwork_is_empty() {
        let detail: PokemonDetail = serde_json::from_value(json!({
            "name": "missingno",
            "sprites": { "other": { "official-artwork": { "front_default": null } } },
            "types": []
        }))
        .unwrap();

        let item = Item::from(detail);
        assert_eq!(item.image_url, "");
        assert!(item.categories.is_empty());
    }

    #[test]
    fn test_has_all() {
        let item = Item {
            name: "b".to_string(),
            image_url: String::new(),
            categories: vec!["fire".to_string(), "flying".to_string()],
        };
        assert!(item.has_all(&[]));
        assert!(item.has_all(&["flying".to_string(), "fire".to_string()]));
        assert!(!item.has_all(&["fire".to_string(), "water".to_string()]));
    }
}
