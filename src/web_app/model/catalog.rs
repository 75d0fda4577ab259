// web_app/model/catalog.rs - Catalog items and the client-side filter
//
// Items are fetched once; search and category toggles only recompute the
// visible subset from the in-memory list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Category vocabulary offered as filter toggles
pub const CATEGORIES: [&str; 18] = [
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dark", "dragon", "steel", "fairy",
];

/// A fully resolved catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub categories: Vec<String>,
}

impl CatalogItem {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Index response: `GET /pokemon?limit=N`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexPage {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<IndexStub>,
}

/// Reference to an item's detail resource
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStub {
    pub name: String,
    pub url: String,
}

/// Detail response: `GET <stub.url>`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl From<ItemDetail> for CatalogItem {
    fn from(detail: ItemDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            sprite: detail.sprites.front_default,
            categories: detail.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

/// Items whose name contains `term` (case-insensitive) and, when any
/// categories are selected, carry at least one of them. Input order is kept.
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    term: &str,
    categories: &BTreeSet<String>,
) -> Vec<&'a CatalogItem> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&term))
        .filter(|item| categories.is_empty() || categories.iter().any(|c| item.has_category(c)))
        .collect()
}

/// Search term plus selected categories
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    search_term: String,
    selected_categories: BTreeSet<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Flip a category in or out of the selection; returns whether it is now selected
    pub fn toggle_category(&mut self, category: &str) -> bool {
        if self.selected_categories.remove(category) {
            false
        } else {
            self.selected_categories.insert(category.to_string());
            true
        }
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_categories.contains(category)
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_categories.clear();
    }

    pub fn visible<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        filter_items(items, &self.search_term, &self.selected_categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, categories: &[&str]) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            sprite: None,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_detail_conversion() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "sprites": { "front_default": "https://img/25.png", "back_default": null },
            "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://t/13" } } ],
            "height": 4
        }"#;
        let detail: ItemDetail = serde_json::from_str(json).unwrap();
        let item = CatalogItem::from(detail);

        assert_eq!(item.id, 25);
        assert_eq!(item.name, "pikachu");
        assert_eq!(item.sprite.as_deref(), Some("https://img/25.png"));
        assert_eq!(item.categories, vec!["electric".to_string()]);
    }

    #[test]
    fn test_index_page_parsing() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://api/pokemon/1/" },
                { "name": "ivysaur", "url": "https://api/pokemon/2/" }
            ]
        }"#;
        let page: IndexPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, Some(2));
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "ivysaur");
    }

    #[test]
    fn test_toggle_category_twice_restores_selection() {
        let mut filter = CatalogFilter::new();
        assert!(filter.toggle_category("fire"));
        assert!(filter.is_selected("fire"));
        assert!(!filter.toggle_category("fire"));
        assert!(filter.selected_categories().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![item(1, "Charmander", &["fire"]), item(2, "squirtle", &["water"])];
        let mut filter = CatalogFilter::new();
        filter.search("CHAR");

        let visible = filter.visible(&items);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = CatalogFilter::new();
        filter.search("pi");
        filter.toggle_category("electric");
        filter.clear();
        assert_eq!(filter, CatalogFilter::default());
    }

    #[test]
    fn test_categories_constant() {
        assert_eq!(CATEGORIES.len(), 18);
        assert!(CATEGORIES.contains(&"fairy"));
    }
}
