//! SQLite implementation of the `AgentRepository`.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{parse_datetime, parse_optional_datetime, parse_optional_uuid, parse_socket_addr, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Agent, AgentId, MachineId};
use crate::domain::ports::AgentRepository;

#[derive(Clone)]
pub struct SqliteAgentRepository {
    pool: SqlitePool,
}

impl SqliteAgentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgentRepository for SqliteAgentRepository {
    async fn upsert_agent(&self, agent: &Agent) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO agents (id, machine_id, start_time, stop_time, parent_id, cc_server)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   machine_id = excluded.machine_id,
                   start_time = excluded.start_time,
                   stop_time = excluded.stop_time,
                   parent_id = excluded.parent_id,
                   cc_server = excluded.cc_server"#,
        )
        .bind(agent.id.to_string())
        .bind(agent.machine_id.0 as i64)
        .bind(agent.start_time.to_rfc3339())
        .bind(agent.stop_time.map(|t| t.to_rfc3339()))
        .bind(agent.parent_id.map(|id| id.to_string()))
        .bind(agent.cc_server.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_agent_by_id(&self, agent_id: AgentId) -> DomainResult<Agent> {
        let row: Option<AgentRow> = sqlx::query_as("SELECT * FROM agents WHERE id = ?")
            .bind(agent_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Agent::try_from)
            .transpose()?
            .ok_or(DomainError::AgentNotFound(agent_id))
    }

    async fn reset(&self) -> DomainResult<()> {
        sqlx::query("DELETE FROM agents").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct AgentRow {
    id: String,
    machine_id: i64,
    start_time: String,
    stop_time: Option<String>,
    parent_id: Option<String>,
    cc_server: String,
}

impl TryFrom<AgentRow> for Agent {
    type Error = DomainError;

    fn try_from(row: AgentRow) -> Result<Self, Self::Error> {
        Ok(Agent {
            id: parse_uuid(&row.id)?,
            machine_id: MachineId(u64::try_from(row.machine_id).map_err(|e| {
                DomainError::Serialization(format!("negative machine id {}: {e}", row.machine_id))
            })?),
            start_time: parse_datetime(&row.start_time)?,
            stop_time: parse_optional_datetime(row.stop_time)?,
            parent_id: parse_optional_uuid(row.parent_id)?,
            cc_server: parse_socket_addr(&row.cc_server)?,
        })
    }
}
