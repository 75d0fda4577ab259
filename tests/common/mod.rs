// common/mod.rs - Shared test utilities
//
// Provides an in-memory catalog API and date helpers so the suites run
// without network access.

#![allow(dead_code)]

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use demo_pages::web_app::api::catalog::{CatalogApi, CatalogError};
use demo_pages::web_app::model::{IndexPage, IndexStub, ItemDetail, NamedResource, Sprites, TypeSlot};

/// Fixed "today" so age arithmetic is reproducible
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Same calendar day `years` years before [`today`]
pub fn years_ago(years: i32) -> NaiveDate {
    let t = today();
    NaiveDate::from_ymd_opt(t.year() - years, t.month(), t.day()).unwrap()
}

pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

/// Catalog API serving canned entries; selected names fail their detail request
#[derive(Default)]
pub struct FakeCatalog {
    pub entries: Vec<(u32, &'static str, Vec<&'static str>)>,
    pub failing_details: HashSet<&'static str>,
    pub index_error: Option<String>,
}

impl FakeCatalog {
    pub fn with_entries(entries: Vec<(u32, &'static str, Vec<&'static str>)>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn failing(mut self, name: &'static str) -> Self {
        self.failing_details.insert(name);
        self
    }
}

impl CatalogApi for FakeCatalog {
    async fn fetch_index(&self, limit: u32) -> Result<IndexPage, CatalogError> {
        if let Some(reason) = &self.index_error {
            return Err(CatalogError::IndexRequest(reason.clone()));
        }
        let results = self
            .entries
            .iter()
            .take(limit as usize)
            .map(|(id, name, _)| IndexStub {
                name: name.to_string(),
                url: format!("https://catalog.test/pokemon/{}/", id),
            })
            .collect::<Vec<_>>();
        Ok(IndexPage {
            count: Some(self.entries.len() as u32),
            results,
        })
    }

    async fn fetch_detail(&self, stub: &IndexStub) -> Result<ItemDetail, CatalogError> {
        if self.failing_details.contains(stub.name.as_str()) {
            return Err(CatalogError::DetailRequest {
                name: stub.name.clone(),
                reason: "503 Service Unavailable".to_string(),
            });
        }
        let (id, name, types) = self
            .entries
            .iter()
            .find(|(_, name, _)| *name == stub.name)
            .ok_or_else(|| CatalogError::DetailRequest {
                name: stub.name.clone(),
                reason: "404 Not Found".to_string(),
            })?;
        Ok(ItemDetail {
            id: *id,
            name: name.to_string(),
            sprites: Sprites {
                front_default: Some(format!("https://sprites.test/{}.png", id)),
            },
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: i as u8 + 1,
                    kind: NamedResource { name: t.to_string() },
                })
                .collect(),
        })
    }
}

/// First few entries of the national index
pub fn starter_entries() -> Vec<(u32, &'static str, Vec<&'static str>)> {
    vec![
        (1, "bulbasaur", vec!["grass", "poison"]),
        (4, "charmander", vec!["fire"]),
        (6, "charizard", vec!["fire", "flying"]),
        (7, "squirtle", vec!["water"]),
        (25, "pikachu", vec!["electric"]),
    ]
}
