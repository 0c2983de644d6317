//! Facade joining the agent and machine repositories.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{AgentId, Machine, MachineId};
use crate::domain::ports::{AgentRepository, MachineRepository};
use crate::services::resolution_cache::ResolutionCache;

/// Single point of truth for agent→machine resolution and for machine
/// updates reached via an agent identifier.
///
/// The facade owns a [`ResolutionCache`] memoizing the agent→machine
/// association; the repositories are shared collaborators it only
/// references. The cache has no subscription to repository mutations:
/// whoever rewrites an agent's machine association out-of-band must call
/// [`reset_cache`](AgentMachineFacade::reset_cache) afterwards, or stale
/// resolutions will be served.
pub struct AgentMachineFacade {
    agent_repository: Arc<dyn AgentRepository>,
    machine_repository: Arc<dyn MachineRepository>,
    cache: ResolutionCache,
}

impl AgentMachineFacade {
    pub fn new(
        agent_repository: Arc<dyn AgentRepository>,
        machine_repository: Arc<dyn MachineRepository>,
    ) -> Self {
        Self {
            agent_repository,
            machine_repository,
            cache: ResolutionCache::new(),
        }
    }

    /// Resolve the identifier of the machine `agent_id` runs on.
    ///
    /// Served from the cache when possible; on a miss the agent repository
    /// is queried and the result memoized. Fails with
    /// `DomainError::AgentNotFound` when the agent is absent, in which
    /// case nothing is cached.
    pub async fn get_machine_id_from_agent_id(
        &self,
        agent_id: AgentId,
    ) -> DomainResult<MachineId> {
        self.cache
            .get_or_compute(agent_id, |id| {
                let repository = Arc::clone(&self.agent_repository);
                async move {
                    debug!(agent_id = %id, "resolving machine id from agent repository");
                    let agent = repository.get_agent_by_id(id).await?;
                    Ok(agent.machine_id)
                }
            })
            .await
    }

    /// Fetch the full machine record for the machine `agent_id` runs on.
    ///
    /// Fails with `DomainError::AgentNotFound` or
    /// `DomainError::MachineNotFound` when either side of the association
    /// is absent from its store.
    pub async fn get_agent_machine(&self, agent_id: AgentId) -> DomainResult<Machine> {
        let machine_id = self.get_machine_id_from_agent_id(agent_id).await?;
        self.machine_repository.get_machine_by_id(machine_id).await
    }

    /// Replace the machine record associated with `agent_id`.
    ///
    /// The update must carry the machine identifier `agent_id` currently
    /// resolves to; a differing identifier fails with
    /// `DomainError::MachineIdMismatch` before any write happens.
    /// Silently honoring a different identifier would detach the agent
    /// record from the machine it still references.
    ///
    /// The cache entry for `agent_id` is left untouched: the identifiers
    /// matched, so the cached association is still correct.
    pub async fn update_agent_machine(
        &self,
        agent_id: AgentId,
        machine: &Machine,
    ) -> DomainResult<()> {
        let machine_id = self.get_machine_id_from_agent_id(agent_id).await?;
        if machine.id != machine_id {
            warn!(
                agent_id = %agent_id,
                expected = %machine_id,
                got = %machine.id,
                "rejecting machine update that would reassign the agent"
            );
            return Err(DomainError::MachineIdMismatch {
                agent_id,
                expected: machine_id,
                got: machine.id,
            });
        }

        self.machine_repository.upsert_machine(machine).await
    }

    /// Discard all cached agent→machine associations.
    ///
    /// Must be called after any out-of-band change to the agent
    /// repository's associations; the facade cannot detect those itself.
    pub async fn reset_cache(&self) {
        debug!("resetting agent-machine resolution cache");
        self.cache.reset().await;
    }
}
