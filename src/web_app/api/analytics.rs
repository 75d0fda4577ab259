// web_app/api/analytics.rs - Fire-and-forget analytics delivery
//
// Events are handed to a detached task and the caller returns immediately.
// Delivery failures are logged and otherwise ignored.

use std::sync::OnceLock;

use serde_json::json;
use uuid::Uuid;

use super::config::{self, AppConfig, Ga4Settings};
use crate::web_app::model::AnalyticsEvent;

static COLLECTOR: OnceLock<Collector> = OnceLock::new();

/// GA4 Measurement Protocol sender
#[derive(Clone, Debug)]
pub struct Ga4Collector {
    http: reqwest::Client,
    settings: Ga4Settings,
    client_id: String,
}

impl Ga4Collector {
    pub fn new(http: reqwest::Client, settings: Ga4Settings) -> Self {
        Self {
            http,
            settings,
            client_id: Uuid::new_v4().to_string(),
        }
    }

    /// Request body for one event
    pub fn payload(&self, event: &AnalyticsEvent) -> serde_json::Value {
        json!({
            "client_id": self.client_id,
            "events": [{
                "name": event.name,
                "params": { "value": event.params.value },
            }],
        })
    }

    pub async fn send(&self, event: &AnalyticsEvent) {
        let result = self
            .http
            .post(&self.settings.endpoint)
            .query(&[
                ("measurement_id", self.settings.measurement_id.as_str()),
                ("api_secret", self.settings.api_secret.as_str()),
            ])
            .json(&self.payload(event))
            .send()
            .await;

        match result {
            Ok(response) => tracing::debug!("Analytics event '{}' delivered: {}", event.name, response.status()),
            Err(e) => tracing::warn!("Analytics event '{}' not delivered: {}", event.name, e),
        }
    }
}

/// Where analytics events end up
#[derive(Clone, Debug)]
pub enum Collector {
    Ga4(Ga4Collector),
    /// No credentials configured: events are only logged
    LogOnly,
}

impl Collector {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.analytics {
            Some(settings) => Collector::Ga4(Ga4Collector::new(config::http_client(config), settings.clone())),
            None => Collector::LogOnly,
        }
    }

    /// Report an event without waiting for delivery
    ///
    /// Must be called from within a Tokio runtime.
    pub fn report(&self, event: AnalyticsEvent) {
        tracing::info!("Analytics event '{}' value='{}'", event.name, event.params.value);
        match self {
            Collector::LogOnly => {}
            Collector::Ga4(ga4) => {
                let ga4 = ga4.clone();
                tokio::spawn(async move {
                    ga4.send(&event).await;
                });
            }
        }
    }
}

/// Process-wide collector, built from the active configuration on first use
pub fn collector() -> &'static Collector {
    COLLECTOR.get_or_init(|| Collector::from_config(&config::get_config()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Ga4Settings {
        Ga4Settings {
            endpoint: "http://127.0.0.1:9/mp/collect".to_string(),
            measurement_id: "G-TEST".to_string(),
            api_secret: "secret".to_string(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let collector = Ga4Collector::new(reqwest::Client::new(), settings());
        let payload = collector.payload(&AnalyticsEvent::button_clicked());

        assert!(payload["client_id"].as_str().is_some());
        assert_eq!(payload["events"][0]["name"], "buttonClicked");
        assert_eq!(payload["events"][0]["params"]["value"], "F28R319MYW");
    }

    #[test]
    fn test_collector_without_credentials_logs_only() {
        let collector = Collector::from_config(&AppConfig::default());
        assert!(matches!(collector, Collector::LogOnly));

        // No runtime needed on the log-only path
        collector.report(AnalyticsEvent::button_clicked());
    }

    #[tokio::test]
    async fn test_report_returns_without_waiting() {
        let collector = Collector::Ga4(Ga4Collector::new(reqwest::Client::new(), settings()));
        collector.report(AnalyticsEvent::button_clicked());
    }
}
