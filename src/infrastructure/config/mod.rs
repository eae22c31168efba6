mod app_config;
pub mod loader;
pub mod paths;

pub use app_config::*;

use std::sync::OnceLock;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get application configuration, loading it on first access
pub fn app() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| loader::load_config("app"))
}
