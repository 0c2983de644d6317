//! HTTP control channel to the remote collector.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::CollectorConfig;
use crate::domain::ports::{ControlChannel, TelemCategory};

/// Wire format for a telemetry record posted to the collector.
#[derive(Serialize)]
struct TelemetryEnvelope<'a> {
    telem_category: TelemCategory,
    data: &'a serde_json::Value,
}

/// Reqwest-backed implementation of the `ControlChannel` port.
///
/// Delivery failures are not retried here. A failed send is reported to
/// the caller; resolution of what to do with an undeliverable record
/// belongs to the caller, not the transport.
pub struct HttpControlClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl HttpControlClient {
    pub fn new(config: &CollectorConfig) -> anyhow::Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ControlChannel for HttpControlClient {
    async fn send_telemetry(
        &self,
        category: TelemCategory,
        data: &serde_json::Value,
    ) -> DomainResult<()> {
        let url = format!("{}/api/telemetry", self.base_url);
        let envelope = TelemetryEnvelope {
            telem_category: category,
            data,
        };

        let response = self
            .http_client
            .post(&url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| DomainError::TelemetryDelivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::TelemetryDelivery(format!(
                "collector returned {status} for {category} telemetry"
            )));
        }

        debug!(%category, "telemetry delivered");
        Ok(())
    }
}
