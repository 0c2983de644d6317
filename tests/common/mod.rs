//! Common test utilities for integration tests
//!
//! Provides shared fixtures and instrumented repository doubles used
//! across multiple integration test files.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use rookery::adapters::memory::InMemoryAgentRepository;
use rookery::domain::errors::DomainResult;
use rookery::{Agent, AgentId, AgentRepository, Machine, MachineId, NetworkInterface};

pub const SEED_ID: u64 = 99;
pub const SOURCE_MACHINE_ID: MachineId = MachineId(1);

pub fn agent_id() -> AgentId {
    Uuid::parse_str("655fd01c-5eec-4e42-b6e3-1fb738c2978d").unwrap()
}

pub fn cc_server() -> SocketAddr {
    "10.10.10.10:5000".parse().unwrap()
}

pub fn source_interface() -> NetworkInterface {
    "10.10.10.99/32".parse().unwrap()
}

pub fn source_machine() -> Machine {
    Machine {
        id: SOURCE_MACHINE_ID,
        hardware_id: Some(5),
        network_interfaces: vec![source_interface()],
    }
}

pub fn source_agent() -> Agent {
    agent_on_machine(SOURCE_MACHINE_ID)
}

pub fn agent_on_machine(machine_id: MachineId) -> Agent {
    Agent {
        id: agent_id(),
        machine_id,
        start_time: Utc.timestamp_opt(0, 0).unwrap(),
        stop_time: None,
        parent_id: None,
        cc_server: cc_server(),
    }
}

/// Agent repository double that counts `get_agent_by_id` calls, so tests
/// can observe whether the facade served a resolution from its cache.
pub struct CountingAgentRepository {
    inner: Arc<InMemoryAgentRepository>,
    get_calls: AtomicUsize,
}

impl CountingAgentRepository {
    pub fn new(inner: Arc<InMemoryAgentRepository>) -> Self {
        Self {
            inner,
            get_calls: AtomicUsize::new(0),
        }
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentRepository for CountingAgentRepository {
    async fn upsert_agent(&self, agent: &Agent) -> DomainResult<()> {
        self.inner.upsert_agent(agent).await
    }

    async fn get_agent_by_id(&self, agent_id: AgentId) -> DomainResult<Agent> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_agent_by_id(agent_id).await
    }

    async fn reset(&self) -> DomainResult<()> {
        self.inner.reset().await
    }
}
