//! Machine repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Machine, MachineId};

/// Repository interface for Machine persistence.
///
/// Machine identifiers are immutable once assigned. Implementations take
/// an allocation seed at construction and hand out fresh identifiers
/// strictly above it via [`get_new_id`](MachineRepository::get_new_id).
#[async_trait]
pub trait MachineRepository: Send + Sync {
    /// Insert a new machine or fully replace the existing record with the
    /// same identifier.
    async fn upsert_machine(&self, machine: &Machine) -> DomainResult<()>;

    /// Get a machine by its identifier.
    ///
    /// Fails with `DomainError::MachineNotFound` when no record exists.
    async fn get_machine_by_id(&self, machine_id: MachineId) -> DomainResult<Machine>;

    /// Allocate the next unused machine identifier.
    async fn get_new_id(&self) -> DomainResult<MachineId>;
}
