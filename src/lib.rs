//! Rookery - Agent and Machine Inventory
//!
//! Rookery is the data layer of a fleet-monitoring collector. It tracks
//! agents (running monitored process instances) and the machines they run
//! on, resolves and memoizes the agent→machine association, validates
//! machine updates reached through an agent, and reports telemetry records
//! to a remote collector.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors, and port traits
//! - **Service Layer** (`services`): The agent-machine facade, resolution
//!   cache, and telemetry sender
//! - **Adapters** (`adapters`): In-memory, SQLite, and HTTP backends for
//!   the ports
//! - **Infrastructure** (`infrastructure`): Configuration and logging
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rookery::adapters::memory::{InMemoryAgentRepository, InMemoryMachineRepository};
//! use rookery::services::AgentMachineFacade;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let agents = Arc::new(InMemoryAgentRepository::new());
//!     let machines = Arc::new(InMemoryMachineRepository::new(0));
//!     let facade = AgentMachineFacade::new(agents, machines);
//!     // facade.get_agent_machine(agent_id).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Agent, AgentId, CollectorConfig, Config, DatabaseConfig, LoggingConfig, Machine, MachineId,
    NetworkInterface,
};
pub use domain::ports::{
    AgentRepository, ControlChannel, MachineRepository, TelemCategory, Telemetry,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AgentMachineFacade, ResolutionCache, TelemetrySender};
