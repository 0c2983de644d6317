//! Telemetry dispatch to the remote collector.

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::ports::{ControlChannel, Telemetry};

/// Serializes telemetry records and forwards them over a control channel.
///
/// The sender is generic over the channel so tests can substitute a
/// recording double for the HTTP client.
pub struct TelemetrySender<C: ControlChannel> {
    channel: C,
}

impl<C: ControlChannel> TelemetrySender<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Send one telemetry record to the collector.
    ///
    /// `display_data` controls only the debug log line: when false the
    /// payload is logged as `redacted`. The channel always receives the
    /// full record.
    pub async fn send(&self, telem: &dyn Telemetry, display_data: bool) -> DomainResult<()> {
        let category = telem.telem_category();
        let data = telem.get_data()?;

        let data_to_display = if display_data {
            serde_json::to_string(&data)?
        } else {
            "redacted".to_string()
        };
        debug!(%category, data = %data_to_display, "sending telemetry");

        self.channel.send_telemetry(category, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::TelemCategory;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    struct StateTelem;

    impl Telemetry for StateTelem {
        fn telem_category(&self) -> TelemCategory {
            TelemCategory::State
        }

        fn get_data(&self) -> DomainResult<serde_json::Value> {
            Ok(json!({"done": false}))
        }
    }

    #[derive(Default)]
    struct RecordingChannel {
        sent: Mutex<Vec<(TelemCategory, serde_json::Value)>>,
    }

    #[async_trait]
    impl ControlChannel for RecordingChannel {
        async fn send_telemetry(
            &self,
            category: TelemCategory,
            data: &serde_json::Value,
        ) -> DomainResult<()> {
            self.sent.lock().await.push((category, data.clone()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn forwards_category_and_data() {
        let sender = TelemetrySender::new(RecordingChannel::default());

        sender.send(&StateTelem, true).await.unwrap();

        let sent = sender.channel.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, TelemCategory::State);
        assert_eq!(sent[0].1, json!({"done": false}));
    }

    #[tokio::test]
    async fn redaction_does_not_touch_the_payload() {
        let sender = TelemetrySender::new(RecordingChannel::default());

        sender.send(&StateTelem, false).await.unwrap();

        let sent = sender.channel.sent.lock().await;
        assert_eq!(sent[0].1, json!({"done": false}));
    }
}
