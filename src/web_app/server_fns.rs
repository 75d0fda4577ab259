// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

/// Load the full catalog: the index, then every item's detail
#[server(LoadCatalog, "/api")]
pub async fn load_catalog() -> Result<Vec<CatalogItem>, ServerFnError> {
    use crate::web_app::api::catalog::{fetch_catalog, PokeApiClient};
    use crate::web_app::api::config;
    use std::time::Instant;

    let config = config::get_config();
    let client = PokeApiClient::new(config::http_client(&config), &config.catalog_api_base);

    tracing::info!("Catalog load: base='{}', limit={}", config.catalog_api_base, config.catalog_limit);
    let started = Instant::now();

    let result = fetch_catalog(&client, config.catalog_limit).await;

    match &result {
        Ok(items) => tracing::info!(
            "Catalog load successful: {} items in {}ms",
            items.len(),
            started.elapsed().as_millis()
        ),
        Err(e) => tracing::error!("Catalog load failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Catalog load failed: {}", e)))
}

/// Report an analytics event; returns before delivery
#[server(TrackEvent, "/api")]
pub async fn track_event(event: AnalyticsEvent) -> Result<(), ServerFnError> {
    use crate::web_app::api::analytics;

    analytics::collector().report(event);
    Ok(())
}

/// Sum `0..bound` on a fresh one-shot background worker
#[server(ComputeSum, "/api")]
pub async fn compute_sum(bound: u32) -> Result<u64, ServerFnError> {
    use crate::web_app::api::config;
    use crate::web_app::api::worker::{SumWorker, WorkerError};

    let timeout = config::get_config().sum_worker_timeout;
    tracing::info!("Sum request: bound={}, timeout={:?}", bound, timeout);

    let worker = SumWorker::spawn().map_err(|e| {
        tracing::error!("Sum worker spawn failed: {}", e);
        ServerFnError::new(format!("Sum failed: {}", e))
    })?;

    let outcome = match tokio::time::timeout(timeout, worker.request(bound)).await {
        Ok(result) => result,
        Err(_) => Err(WorkerError::Timeout(timeout)),
    };

    match &outcome {
        Ok(sum) => tracing::info!("Sum reply: bound={}, sum={}", bound, sum),
        Err(e) => tracing::error!("Sum failed: {}", e),
    }

    outcome.map_err(|e| ServerFnError::new(format!("Sum failed: {}", e)))
}
