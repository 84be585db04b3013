//! # Runtime Configuration
//!
//! Defaults overridable from the environment, so deployments configure the
//! runtime without a config file.

use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory for persisted state (the preference file).
    pub data_dir: PathBuf,
    /// Application package name used for secure-element registration.
    pub package_name: String,
    /// Log level for the subscriber (`error`..`trace`).
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./tza-data"),
            package_name: "io.tzattest.demo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("TZA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(name) = std::env::var("TZA_PACKAGE_NAME") {
            if !name.is_empty() {
                config.package_name = name;
            }
        }
        if let Ok(level) = std::env::var("TZA_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}
