use std::path::PathBuf;

/// Get platform-specific configuration directory
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Library/Application Support/foyer")
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("foyer")
    }
}

pub fn default_sqlite_path() -> PathBuf {
    config_dir().join("foyer.db")
}

pub fn log_dir() -> PathBuf {
    config_dir().join("logs")
}
