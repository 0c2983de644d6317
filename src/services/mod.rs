pub mod agent_machine_facade;
pub mod resolution_cache;
pub mod telemetry_sender;

pub use agent_machine_facade::AgentMachineFacade;
pub use resolution_cache::ResolutionCache;
pub use telemetry_sender::TelemetrySender;
