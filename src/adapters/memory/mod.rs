//! In-memory repository adapters.
//!
//! Backend used by tests and seeding; the durable backend lives in
//! [`adapters::sqlite`](crate::adapters::sqlite).

pub mod agent_repository;
pub mod machine_repository;

pub use agent_repository::InMemoryAgentRepository;
pub use machine_repository::InMemoryMachineRepository;
