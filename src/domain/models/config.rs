use serde::{Deserialize, Serialize};

/// Main configuration structure for Rookery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote collector endpoint configuration.
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Seed for machine identifier allocation. Repositories hand out
    /// identifiers strictly above this value.
    #[serde(default = "default_machine_id_seed")]
    pub machine_id_seed: u64,
}

const fn default_machine_id_seed() -> u64 {
    0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            collector: CollectorConfig::default(),
            machine_id_seed: default_machine_id_seed(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file.
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".rookery/rookery.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files. Stderr only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

/// Remote collector endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectorConfig {
    /// Base URL of the collector, e.g. `https://10.10.10.10:5000`.
    #[serde(default = "default_collector_url")]
    pub base_url: String,

    /// Request timeout in seconds for telemetry delivery.
    #[serde(default = "default_collector_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_collector_url() -> String {
    "https://127.0.0.1:5000".to_string()
}

const fn default_collector_timeout_secs() -> u64 {
    30
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: default_collector_url(),
            timeout_secs: default_collector_timeout_secs(),
        }
    }
}
