//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::TetraConfig;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "tetra.toml";

/// Loads and validates `<project_dir>/tetra.toml`.
pub fn load_config(project_dir: &Path) -> Result<TetraConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads an explicit configuration file if one is given. Otherwise loads
/// `<project_dir>/tetra.toml` when present, falling back to defaults.
pub fn load_config_or_default(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> Result<TetraConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    let path = project_dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_config_file(&path)
    } else {
        Ok(TetraConfig::default())
    }
}

/// Parses and validates a `tetra.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<TetraConfig, ConfigError> {
    let config: TetraConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<TetraConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

fn validate_config(config: &TetraConfig) -> Result<(), ConfigError> {
    if config.display.group == Some(0) {
        return Err(ConfigError::ValidationError(
            "display.group must be at least 1".to_string(),
        ));
    }
    Ok(())
}
