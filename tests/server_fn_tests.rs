// tests/server_fn_tests.rs
// Test suite for Leptos server functions, called directly on the server side

use std::time::Duration;

use demo_pages::web_app::api::config::{self, AppConfig};
use demo_pages::web_app::model::*;
use demo_pages::web_app::server_fns::*;

/// Config with no analytics credentials and an unreachable catalog
fn offline_config() -> AppConfig {
    AppConfig {
        catalog_api_base: "http://127.0.0.1:9/api/v2".to_string(),
        catalog_limit: 3,
        catalog_timeout: Duration::from_secs(2),
        analytics: None,
        sum_worker_timeout: Duration::from_secs(30),
    }
}

#[tokio::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    config::set_test_config(offline_config());

    // 1. compute_sum
    println!("Testing compute_sum...");
    let sum = compute_sum(5).await
        .map_err(|e| anyhow::anyhow!("compute_sum failed: {}", e))?;
    assert_eq!(sum, 10);

    // 2. track_event returns before delivery
    println!("Testing track_event...");
    track_event(AnalyticsEvent::button_clicked()).await
        .map_err(|e| anyhow::anyhow!("track_event failed: {}", e))?;

    // 3. load_catalog against an unreachable API fails as a whole
    println!("Testing load_catalog...");
    let result = load_catalog().await;
    let err = result.expect_err("catalog load should fail without a reachable API");
    assert!(err.to_string().contains("Catalog load failed"), "unexpected error: {}", err);

    Ok(())
}

#[tokio::test]
async fn test_compute_sum_larger_bound() -> anyhow::Result<()> {
    config::set_test_config(offline_config());

    let sum = compute_sum(100_000).await
        .map_err(|e| anyhow::anyhow!("compute_sum failed: {}", e))?;

    assert_eq!(sum, 100_000u64 * 99_999 / 2);
    Ok(())
}

#[test]
fn test_config_from_lookup_defaults() {
    let config = AppConfig::from_lookup(|_| None);

    assert_eq!(config.catalog_api_base, config::DEFAULT_CATALOG_API_BASE);
    assert_eq!(config.catalog_limit, 1050);
    assert_eq!(config.sum_worker_timeout, Duration::from_secs(120));
    assert!(config.analytics.is_none());
}

#[test]
fn test_config_from_lookup_overrides() {
    let config = AppConfig::from_lookup(|key| match key {
        "CATALOG_LIMIT" => Some("151".to_string()),
        "SUM_WORKER_TIMEOUT_SECS" => Some("5".to_string()),
        "GA_MEASUREMENT_ID" => Some("G-ABC".to_string()),
        "GA_API_SECRET" => Some("s3cret".to_string()),
        _ => None,
    });

    assert_eq!(config.catalog_limit, 151);
    assert_eq!(config.sum_worker_timeout, Duration::from_secs(5));
    let ga = config.analytics.expect("GA settings");
    assert_eq!(ga.measurement_id, "G-ABC");
    assert_eq!(ga.endpoint, config::DEFAULT_GA_ENDPOINT);
}

#[test]
fn test_invalid_number_falls_back_to_default() {
    let config = AppConfig::from_lookup(|key| match key {
        "CATALOG_LIMIT" => Some("lots".to_string()),
        _ => None,
    });
    assert_eq!(config.catalog_limit, config::DEFAULT_CATALOG_LIMIT);
}
