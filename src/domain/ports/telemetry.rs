//! Telemetry ports: record producers and the delivery channel.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;

/// Category tag attached to every telemetry record, used by the collector
/// to route the payload to the right handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemCategory {
    /// Agent lifecycle state (started, stopped).
    State,
    /// Host inventory data (machine facts, interfaces).
    Inventory,
    /// One-off operational events.
    Event,
}

impl fmt::Display for TelemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => write!(f, "state"),
            Self::Inventory => write!(f, "inventory"),
            Self::Event => write!(f, "event"),
        }
    }
}

impl FromStr for TelemCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "state" => Ok(Self::State),
            "inventory" => Ok(Self::Inventory),
            "event" => Ok(Self::Event),
            _ => Err(anyhow::anyhow!("Invalid telemetry category: {s}")),
        }
    }
}

/// Capability interface for anything that can be reported as telemetry.
///
/// Two required capabilities: a category tag and a structured data record.
/// Sending is handled by [`TelemetrySender`](crate::services::TelemetrySender),
/// not by implementors.
pub trait Telemetry: Send + Sync {
    /// Category the collector routes this record by.
    fn telem_category(&self) -> TelemCategory;

    /// Produce the structured data record for this telemetry.
    fn get_data(&self) -> DomainResult<serde_json::Value>;
}

/// Delivery channel to the remote collector.
///
/// The channel is opaque to callers: transport, serialization framing and
/// endpoint layout live entirely in the adapter.
#[async_trait]
pub trait ControlChannel: Send + Sync {
    /// Forward a telemetry record to the collector.
    async fn send_telemetry(
        &self,
        category: TelemCategory,
        data: &serde_json::Value,
    ) -> DomainResult<()>;
}
