use super::DEFAULT_EXTENSION;
use crate::errors::{MigrateError, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure for a migration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrateConfig {
    /// Extension of files to rewrite, with or without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Glob patterns, relative to the scan root, of files to leave alone
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude: Vec::new(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl MigrateConfig {
    /// Extension without a leading dot.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Apply command-line overrides. Excludes add to the configured ones.
    pub fn with_overrides(mut self, extension: Option<String>, exclude: Vec<String>) -> Self {
        if let Some(extension) = extension {
            self.extension = extension;
        }
        self.exclude.extend(exclude);
        self
    }

    /// Compile exclude globs.
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>> {
        self.exclude
            .iter()
            .map(|raw| {
                glob::Pattern::new(raw).map_err(|e| {
                    MigrateError::config(format!("invalid exclude pattern '{raw}': {e}"))
                })
            })
            .collect()
    }

    /// Reject settings that would make the scan meaningless.
    pub fn validate(&self) -> Result<()> {
        let extension = self.normalized_extension();
        if extension.is_empty() {
            return Err(MigrateError::config("extension must not be empty"));
        }
        if extension.contains(&['/', '\\', '.'][..]) {
            return Err(MigrateError::config(format!(
                "extension '{}' must be a single file extension",
                self.extension
            )));
        }
        self.exclude_patterns().map(|_| ())
    }
}
