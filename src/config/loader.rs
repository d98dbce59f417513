use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::core::MigrateConfig;
use crate::errors::{MigrateError, Result};

/// Name of the config file looked up in the scan root.
pub const CONFIG_FILE_NAME: &str = ".opacity-migrate.toml";

/// Parse config from TOML contents.
pub fn parse_config(contents: &str) -> std::result::Result<MigrateConfig, String> {
    toml::from_str::<MigrateConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

/// Load an explicitly named config file. Missing files are an error.
pub fn load_config_file(path: &Path) -> Result<MigrateConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| MigrateError::config_with_path(format!("cannot read config: {e}"), path))?;
    let config =
        parse_config(&contents).map_err(|message| MigrateError::config_with_path(message, path))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Load `.opacity-migrate.toml` from `root`, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<MigrateConfig> {
    let path = root.join(CONFIG_FILE_NAME);
    match fs::read_to_string(&path) {
        Ok(contents) => {
            let config = parse_config(&contents)
                .map_err(|message| MigrateError::config_with_path(message, &path))?;
            tracing::debug!(path = %path.display(), "Loaded config");
            Ok(config)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(root = %root.display(), "No config file, using defaults");
            Ok(MigrateConfig::default())
        }
        Err(e) => Err(MigrateError::config_with_path(
            format!("cannot read config: {e}"),
            &path,
        )),
    }
}
