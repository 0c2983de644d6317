//! Infrastructure adapters for external systems.

pub mod control;
pub mod memory;
pub mod sqlite;
