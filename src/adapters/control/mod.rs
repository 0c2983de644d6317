//! Control channel adapters for telemetry delivery.

pub mod client;

pub use client::HttpControlClient;
