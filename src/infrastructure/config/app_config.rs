use serde::{Deserialize, Serialize};
use super::paths;
use std::path::PathBuf;

/// Path value that selects a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub sqlite: SqliteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SqliteConfig {
    /// Leave empty to use platform default path, `:memory:` for a throwaway database
    #[serde(default)]
    pub path: String,
}

impl SqliteConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_PATH
    }

    pub fn effective_path(&self) -> PathBuf {
        if self.path.is_empty() {
            paths::default_sqlite_path()
        } else {
            PathBuf::from(&self.path)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enables the rolling log file next to the config directory
    pub production: bool,
    /// `EnvFilter` directive for the console, e.g. `debug` or `foyer_lib=trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            production: false,
            level: "debug".to_string(),
        }
    }
}
