// web_app/api/catalog.rs - Two-stage catalog fetch
//
// Stage one fetches the index of item stubs; stage two fetches every stub's
// detail concurrently and joins on all of them. Any failure in either stage
// fails the whole load, so callers never see a partial list.

use futures::future::join_all;
use thiserror::Error;

use crate::web_app::model::{CatalogItem, IndexPage, IndexStub, ItemDetail};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("index request failed: {0}")]
    IndexRequest(String),
    #[error("index response could not be decoded: {0}")]
    IndexDecode(String),
    #[error("detail request for '{name}' failed: {reason}")]
    DetailRequest { name: String, reason: String },
    #[error("detail response for '{name}' could not be decoded: {reason}")]
    DetailDecode { name: String, reason: String },
}

/// Read-only access to the remote catalog
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn fetch_index(&self, limit: u32) -> Result<IndexPage, CatalogError>;

    async fn fetch_detail(&self, stub: &IndexStub) -> Result<ItemDetail, CatalogError>;
}

/// Fetch the index, then every detail concurrently
///
/// Detail requests all run to completion before the result is decided; the
/// first failure in index order is returned. On success items keep index order.
pub async fn fetch_catalog<A: CatalogApi>(api: &A, limit: u32) -> Result<Vec<CatalogItem>, CatalogError> {
    let index = api.fetch_index(limit).await?;
    tracing::debug!(stubs = index.results.len(), "catalog_index_fetched");

    let details = join_all(index.results.iter().map(|stub| api.fetch_detail(stub))).await;

    let failed = details.iter().filter(|d| d.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = details.len(), "catalog_detail_failures");
    }

    details
        .into_iter()
        .map(|detail| detail.map(CatalogItem::from))
        .collect()
}

/// PokeAPI-backed catalog over a shared HTTP client
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "ssr")]
impl PokeApiClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn index_url(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }
}

#[cfg(feature = "ssr")]
impl CatalogApi for PokeApiClient {
    async fn fetch_index(&self, limit: u32) -> Result<IndexPage, CatalogError> {
        let response = self
            .http
            .get(self.index_url(limit))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CatalogError::IndexRequest(e.to_string()))?;

        response
            .json::<IndexPage>()
            .await
            .map_err(|e| CatalogError::IndexDecode(e.to_string()))
    }

    async fn fetch_detail(&self, stub: &IndexStub) -> Result<ItemDetail, CatalogError> {
        let response = self
            .http
            .get(&stub.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CatalogError::DetailRequest {
                name: stub.name.clone(),
                reason: e.to_string(),
            })?;

        response
            .json::<ItemDetail>()
            .await
            .map_err(|e| CatalogError::DetailDecode {
                name: stub.name.clone(),
                reason: e.to_string(),
            })
    }
}
