pub mod adapter;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

use adapter::state::{AppState, StorageBackend};
use infrastructure::config;
use infrastructure::logging;
use infrastructure::persistence;

/// Load configuration, start logging and open the configured storage.
pub fn bootstrap() -> anyhow::Result<AppState> {
    let app_config = config::app();

    // Logging settings come from the config, so it is loaded first
    logging::setup(&app_config.logging);
    tracing::info!("Configuration initialized");

    tracing::info!("Using SQLite storage backend");
    let db = persistence::sqlite::init_database(&app_config.storage.sqlite)?;

    Ok(AppState::new(StorageBackend::sqlite(db)))
}
