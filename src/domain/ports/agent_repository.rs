//! Agent repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Agent, AgentId};

/// Repository interface for Agent persistence.
///
/// Implementations are backend-specific (in-memory, `SQLite`); the domain
/// only depends on this contract.
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// Insert a new agent or fully replace the existing record with the
    /// same identifier.
    async fn upsert_agent(&self, agent: &Agent) -> DomainResult<()>;

    /// Get an agent by its identifier.
    ///
    /// Fails with `DomainError::AgentNotFound` when no record exists.
    async fn get_agent_by_id(&self, agent_id: AgentId) -> DomainResult<Agent>;

    /// Discard all agent records. Seeding and test utility; production
    /// callers have no use for it.
    async fn reset(&self) -> DomainResult<()>;
}
