pub mod agent;
pub mod config;
pub mod machine;

pub use agent::{Agent, AgentId};
pub use config::{CollectorConfig, Config, DatabaseConfig, LoggingConfig};
pub use machine::{Machine, MachineId, NetworkInterface};
