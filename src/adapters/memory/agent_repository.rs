//! In-memory implementation of the `AgentRepository`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Agent, AgentId};
use crate::domain::ports::AgentRepository;

/// Map-backed agent store for tests and seeding.
#[derive(Debug, Default)]
pub struct InMemoryAgentRepository {
    agents: RwLock<HashMap<AgentId, Agent>>,
}

impl InMemoryAgentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentRepository for InMemoryAgentRepository {
    async fn upsert_agent(&self, agent: &Agent) -> DomainResult<()> {
        self.agents.write().await.insert(agent.id, agent.clone());
        Ok(())
    }

    async fn get_agent_by_id(&self, agent_id: AgentId) -> DomainResult<Agent> {
        self.agents
            .read()
            .await
            .get(&agent_id)
            .cloned()
            .ok_or(DomainError::AgentNotFound(agent_id))
    }

    async fn reset(&self) -> DomainResult<()> {
        self.agents.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MachineId;
    use uuid::Uuid;

    fn test_agent(machine_id: MachineId) -> Agent {
        Agent::new(Uuid::new_v4(), machine_id, "10.10.10.10:5000".parse().unwrap())
    }

    #[tokio::test]
    async fn upsert_then_get() {
        let repo = InMemoryAgentRepository::new();
        let agent = test_agent(MachineId(1));

        repo.upsert_agent(&agent).await.unwrap();
        let retrieved = repo.get_agent_by_id(agent.id).await.unwrap();
        assert_eq!(retrieved, agent);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_record() {
        let repo = InMemoryAgentRepository::new();
        let mut agent = test_agent(MachineId(1));
        repo.upsert_agent(&agent).await.unwrap();

        agent.machine_id = MachineId(2);
        repo.upsert_agent(&agent).await.unwrap();

        let retrieved = repo.get_agent_by_id(agent.id).await.unwrap();
        assert_eq!(retrieved.machine_id, MachineId(2));
    }

    #[tokio::test]
    async fn missing_agent_is_not_found() {
        let repo = InMemoryAgentRepository::new();
        let result = repo.get_agent_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::AgentNotFound(_))));
    }

    #[tokio::test]
    async fn reset_discards_all_records() {
        let repo = InMemoryAgentRepository::new();
        let agent = test_agent(MachineId(1));
        repo.upsert_agent(&agent).await.unwrap();

        repo.reset().await.unwrap();

        let result = repo.get_agent_by_id(agent.id).await;
        assert!(matches!(result, Err(DomainError::AgentNotFound(_))));
    }
}
