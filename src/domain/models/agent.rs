use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::machine::MachineId;

/// Unique, immutable identifier of a running agent instance.
pub type AgentId = Uuid;

/// Agent entity representing a tracked running instance.
///
/// The `machine_id` field references the host the agent executes on and is
/// mutable over the agent's lifetime: re-upserting the record reassigns the
/// association. Resolution through the facade requires the referenced
/// machine to exist in the machine repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent identifier.
    pub id: AgentId,

    /// Identifier of the machine this agent runs on.
    pub machine_id: MachineId,

    /// When the agent process started.
    pub start_time: DateTime<Utc>,

    /// When the agent process stopped, if it has.
    #[serde(default)]
    pub stop_time: Option<DateTime<Utc>>,

    /// Identifier of the agent that spawned this one. Non-owning
    /// back-reference; the spawn tree carries no lifecycle coupling.
    #[serde(default)]
    pub parent_id: Option<AgentId>,

    /// Address of the collector controlling this agent.
    pub cc_server: SocketAddr,
}

impl Agent {
    /// Create a running agent record starting now.
    pub fn new(id: AgentId, machine_id: MachineId, cc_server: SocketAddr) -> Self {
        Self {
            id,
            machine_id,
            start_time: Utc::now(),
            stop_time: None,
            parent_id: None,
            cc_server,
        }
    }

    /// Whether the agent is still running.
    pub fn is_running(&self) -> bool {
        self.stop_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_agent_is_running() {
        let agent = Agent::new(
            Uuid::new_v4(),
            MachineId(1),
            "10.10.10.10:5000".parse().unwrap(),
        );
        assert!(agent.is_running());
        assert!(agent.parent_id.is_none());
    }

    #[test]
    fn stopped_agent_is_not_running() {
        let mut agent = Agent::new(
            Uuid::new_v4(),
            MachineId(1),
            "10.10.10.10:5000".parse().unwrap(),
        );
        agent.stop_time = Some(Utc::now());
        assert!(!agent.is_running());
    }
}
