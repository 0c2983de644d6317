//! In-memory implementation of the `MachineRepository`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Machine, MachineId};
use crate::domain::ports::MachineRepository;

/// Map-backed machine store for tests and seeding.
///
/// Identifier allocation starts at the construction seed: the first
/// `get_new_id` call returns `seed + 1`.
#[derive(Debug)]
pub struct InMemoryMachineRepository {
    machines: RwLock<HashMap<MachineId, Machine>>,
    next_id: AtomicU64,
}

impl InMemoryMachineRepository {
    pub fn new(seed_id: u64) -> Self {
        Self {
            machines: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(seed_id),
        }
    }
}

#[async_trait]
impl MachineRepository for InMemoryMachineRepository {
    async fn upsert_machine(&self, machine: &Machine) -> DomainResult<()> {
        self.machines
            .write()
            .await
            .insert(machine.id, machine.clone());
        Ok(())
    }

    async fn get_machine_by_id(&self, machine_id: MachineId) -> DomainResult<Machine> {
        self.machines
            .read()
            .await
            .get(&machine_id)
            .cloned()
            .ok_or(DomainError::MachineNotFound(machine_id))
    }

    async fn get_new_id(&self) -> DomainResult<MachineId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MachineId(id))
    }
}
