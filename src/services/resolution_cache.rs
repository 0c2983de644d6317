//! Memoization cache for agent-to-machine resolution.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use crate::domain::errors::DomainResult;
use crate::domain::models::{AgentId, MachineId};

/// Lazily-populated mapping from agent identifier to machine identifier.
///
/// This is a cold-start memoization layer, not a bounded cache: entries are
/// never individually evicted and carry no TTL. The only invalidation is a
/// whole-cache [`reset`](ResolutionCache::reset), which the owner must call
/// after any out-of-band change to agent→machine associations in the
/// underlying repository. The source data rarely changes, so a full reset
/// is cheap and keeps the invalidation protocol trivial.
///
/// Reads and writes go through an `RwLock` that is never held across an
/// await, so `reset` acts as a barrier: no resolution observed after a
/// reset completes came from a pre-reset snapshot of the map.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<AgentId, MachineId>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached machine identifier for `agent_id`, computing and
    /// storing it on a miss.
    ///
    /// `compute` runs with no lock held. A compute failure propagates to
    /// the caller and leaves the cache unpopulated for `agent_id`.
    pub async fn get_or_compute<F, Fut>(
        &self,
        agent_id: AgentId,
        compute: F,
    ) -> DomainResult<MachineId>
    where
        F: FnOnce(AgentId) -> Fut,
        Fut: Future<Output = DomainResult<MachineId>>,
    {
        if let Some(&machine_id) = self.entries.read().await.get(&agent_id) {
            return Ok(machine_id);
        }

        let machine_id = compute(agent_id).await?;
        self.entries.write().await.insert(agent_id, machine_id);
        Ok(machine_id)
    }

    /// Unconditionally discard all entries.
    pub async fn reset(&self) {
        self.entries.write().await.clear();
    }

    /// Number of cached associations.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
