// web_app/api/config.rs - Server configuration and shared HTTP client
//
// Settings come from environment variables (a `.env` file is loaded by the
// server binary). The config is installed once at start-up and read by the
// server functions.

use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_CATALOG_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_CATALOG_LIMIT: u32 = 1050;
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GA_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";
pub const DEFAULT_SUM_WORKER_TIMEOUT_SECS: u64 = 120;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static TEST_CONFIG_OVERRIDE: Mutex<Option<AppConfig>> = Mutex::new(None);
static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// GA4 Measurement Protocol credentials
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ga4Settings {
    pub endpoint: String,
    pub measurement_id: String,
    pub api_secret: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_api_base: String,
    pub catalog_limit: u32,
    pub catalog_timeout: Duration,
    /// `None` when GA_MEASUREMENT_ID or GA_API_SECRET is missing
    pub analytics: Option<Ga4Settings>,
    pub sum_worker_timeout: Duration,
}

impl AppConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup, applying defaults for missing keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_api_base = lookup("CATALOG_API_BASE")
            .unwrap_or_else(|| DEFAULT_CATALOG_API_BASE.to_string());
        let catalog_limit = parse_or(&lookup, "CATALOG_LIMIT", DEFAULT_CATALOG_LIMIT);
        let catalog_timeout = Duration::from_secs(parse_or(
            &lookup,
            "CATALOG_TIMEOUT_SECS",
            DEFAULT_CATALOG_TIMEOUT_SECS,
        ));
        let sum_worker_timeout = Duration::from_secs(parse_or(
            &lookup,
            "SUM_WORKER_TIMEOUT_SECS",
            DEFAULT_SUM_WORKER_TIMEOUT_SECS,
        ));

        let analytics = match (lookup("GA_MEASUREMENT_ID"), lookup("GA_API_SECRET")) {
            (Some(measurement_id), Some(api_secret)) => Some(Ga4Settings {
                endpoint: lookup("GA_ENDPOINT").unwrap_or_else(|| DEFAULT_GA_ENDPOINT.to_string()),
                measurement_id,
                api_secret,
            }),
            _ => None,
        };

        Self {
            catalog_api_base,
            catalog_limit,
            catalog_timeout,
            analytics,
            sum_worker_timeout,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value '{}' for {}, using default {}", raw, key, default);
            default
        }),
    }
}

/// Install the global configuration
pub fn init_config(config: AppConfig) {
    tracing::info!("Initializing global configuration");
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized");
    }
}

/// Set a configuration override for testing
pub fn set_test_config(config: AppConfig) {
    let mut guard = TEST_CONFIG_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
    *guard = Some(config);
}

/// Get the active configuration, falling back to defaults if none was installed
pub fn get_config() -> AppConfig {
    {
        let guard = TEST_CONFIG_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ref config) = *guard {
            return config.clone();
        }
    }

    match CONFIG.get() {
        Some(config) => config.clone(),
        None => {
            tracing::warn!("Global configuration is empty, using defaults");
            AppConfig::default()
        }
    }
}

/// Shared HTTP client for outbound requests
///
/// Built on first use with the catalog timeout of the config passed in.
pub fn http_client(config: &AppConfig) -> reqwest::Client {
    HTTP_CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .timeout(config.catalog_timeout)
                .build()
                .unwrap_or_else(|e| {
                    tracing::error!("Failed to build HTTP client ({}), using defaults", e);
                    reqwest::Client::new()
                })
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_api_base, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog_limit, 1050);
        assert_eq!(config.catalog_timeout, Duration::from_secs(30));
        assert_eq!(config.sum_worker_timeout, Duration::from_secs(120));
        assert!(config.analytics.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CATALOG_API_BASE", "http://localhost:9000"),
            ("CATALOG_LIMIT", "10"),
            ("SUM_WORKER_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.catalog_api_base, "http://localhost:9000");
        assert_eq!(config.catalog_limit, 10);
        assert_eq!(config.sum_worker_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_number_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("CATALOG_LIMIT", "lots")]));
        assert_eq!(config.catalog_limit, DEFAULT_CATALOG_LIMIT);
    }

    #[test]
    fn test_analytics_requires_both_credentials() {
        let only_id = AppConfig::from_lookup(lookup_from(&[("GA_MEASUREMENT_ID", "G-TEST")]));
        assert!(only_id.analytics.is_none());

        let both = AppConfig::from_lookup(lookup_from(&[
            ("GA_MEASUREMENT_ID", "G-TEST"),
            ("GA_API_SECRET", "secret"),
        ]));
        let ga = both.analytics.unwrap();
        assert_eq!(ga.measurement_id, "G-TEST");
        assert_eq!(ga.endpoint, DEFAULT_GA_ENDPOINT);
    }
}
