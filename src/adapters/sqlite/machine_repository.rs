//! SQLite implementation of the `MachineRepository`.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Machine, MachineId, NetworkInterface};
use crate::domain::ports::MachineRepository;

pub struct SqliteMachineRepository {
    pool: SqlitePool,
    /// Allocation counter; the floor is the construction seed and gets
    /// raised to the highest stored id before each allocation, so the
    /// sequence survives process restarts.
    next_id: AtomicU64,
}

impl SqliteMachineRepository {
    pub fn new(pool: SqlitePool, seed_id: u64) -> Self {
        Self {
            pool,
            next_id: AtomicU64::new(seed_id),
        }
    }
}

#[async_trait]
impl MachineRepository for SqliteMachineRepository {
    async fn upsert_machine(&self, machine: &Machine) -> DomainResult<()> {
        let interfaces_json = serde_json::to_string(&machine.network_interfaces)?;

        sqlx::query(
            r#"INSERT INTO machines (id, hardware_id, network_interfaces)
               VALUES (?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   hardware_id = excluded.hardware_id,
                   network_interfaces = excluded.network_interfaces"#,
        )
        .bind(machine.id.0 as i64)
        .bind(machine.hardware_id.map(|id| id as i64))
        .bind(&interfaces_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_machine_by_id(&self, machine_id: MachineId) -> DomainResult<Machine> {
        let row: Option<MachineRow> = sqlx::query_as("SELECT * FROM machines WHERE id = ?")
            .bind(machine_id.0 as i64)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Machine::try_from)
            .transpose()?
            .ok_or(DomainError::MachineNotFound(machine_id))
    }

    async fn get_new_id(&self) -> DomainResult<MachineId> {
        let (max_id,): (i64,) = sqlx::query_as("SELECT COALESCE(MAX(id), 0) FROM machines")
            .fetch_one(&self.pool)
            .await?;

        self.next_id
            .fetch_max(u64::try_from(max_id).unwrap_or(0), Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(MachineId(id))
    }
}

#[derive(sqlx::FromRow)]
struct MachineRow {
    id: i64,
    hardware_id: Option<i64>,
    network_interfaces: String,
}

impl TryFrom<MachineRow> for Machine {
    type Error = DomainError;

    fn try_from(row: MachineRow) -> Result<Self, Self::Error> {
        let network_interfaces: Vec<NetworkInterface> =
            serde_json::from_str(&row.network_interfaces)?;

        Ok(Machine {
            id: MachineId(u64::try_from(row.id).map_err(|e| {
                DomainError::Serialization(format!("negative machine id {}: {e}", row.id))
            })?),
            hardware_id: row.hardware_id.map(|id| id as u64),
            network_interfaces,
        })
    }
}
