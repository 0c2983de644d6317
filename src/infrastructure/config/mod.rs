//! Configuration loading (figment-based hierarchical merge).

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
