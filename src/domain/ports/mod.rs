//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces that adapters must implement:
//! - `AgentRepository`: persistence for agent records
//! - `MachineRepository`: persistence for machine records
//! - `Telemetry` / `ControlChannel`: telemetry production and delivery
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations.

pub mod agent_repository;
pub mod machine_repository;
pub mod telemetry;

pub use agent_repository::AgentRepository;
pub use machine_repository::MachineRepository;
pub use telemetry::{ControlChannel, TelemCategory, Telemetry};
