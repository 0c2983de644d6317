//! Domain errors for the Rookery inventory system.

use thiserror::Error;

use crate::domain::models::{AgentId, MachineId};

/// Domain-level errors that can occur in the Rookery system.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    #[error("Machine not found: {0}")]
    MachineNotFound(MachineId),

    #[error(
        "Machine id mismatch for agent {agent_id}: agent resolves to machine {expected}, \
         update carries machine {got}"
    )]
    MachineIdMismatch {
        agent_id: AgentId,
        expected: MachineId,
        got: MachineId,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Telemetry delivery failed: {0}")]
    TelemetryDelivery(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
