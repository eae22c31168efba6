use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;
use std::path::Path;

use super::paths::config_dir;

// Embed the entire configs directory at compile time
static CONFIGS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources/configs");

/// Load a YAML configuration file from disk
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Parse YAML from string
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> anyhow::Result<T> {
    let config: T = serde_yaml::from_str(content)?;
    Ok(config)
}

/// Load embedded configuration by name from the configs directory
pub fn load_embedded_config<T: DeserializeOwned + Default>(name: &str) -> T {
    let file_name = format!("{}.yaml", name);

    let Some(file) = CONFIGS_DIR.get_file(&file_name) else {
        tracing::warn!("Embedded config {} not found, using defaults", name);
        return T::default();
    };

    let Some(content) = file.contents_utf8() else {
        tracing::error!("Embedded config {} is not valid UTF-8", name);
        return T::default();
    };

    match parse_yaml::<T>(content) {
        Ok(config) => {
            tracing::debug!("Loaded embedded config: {}", name);
            config
        }
        Err(e) => {
            tracing::error!("Failed to parse embedded config {}: {}", name, e);
            T::default()
        }
    }
}

/// Load `<name>.yaml` from the user config directory, falling back to the
/// embedded copy when the file is missing or invalid
pub fn load_config<T: DeserializeOwned + Default>(name: &str) -> T {
    let user_path = config_dir().join(format!("{}.yaml", name));
    load_config_from(&user_path).unwrap_or_else(|| load_embedded_config(name))
}

fn load_config_from<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        tracing::debug!("No user config at {:?}", path);
        return None;
    }

    match load_yaml::<T>(path) {
        Ok(config) => {
            tracing::info!("Loaded user config from {:?}", path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}, using embedded defaults", path, e);
            None
        }
    }
}
