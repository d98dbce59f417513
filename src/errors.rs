//! Error types for migration runs.
//!
//! Only failures that abort a run live here. Recoverable conditions are
//! handled where they occur and never surface as errors:
//!
//! - a matched literal that fails to parse is left untouched by the rewriter
//! - an opacity outside `[0, 1]` is clamped by the converter

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a migration run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// File system failure while reading, writing, or walking.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source file is not valid UTF-8.
    #[error("{} is not valid UTF-8", .path.display())]
    Decode { path: PathBuf },

    /// Configuration file or override is unusable.
    #[error("Configuration error: {message}{}", location_suffix(.path.as_deref()))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Report could not be written to the console.
    #[error("Failed to write report")]
    Report(#[source] io::Error),

    /// Scan root is missing or not a directory.
    #[error("Scan root {} does not exist or is not a directory", .path.display())]
    RootNotFound { path: PathBuf },
}

impl MigrateError {
    /// Create an I/O error tied to a path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error without a file location.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error pointing at the offending file.
    pub fn config_with_path(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Decode { path } | Self::RootNotFound { path } => {
                Some(path)
            }
            Self::Config { path, .. } => path.as_deref(),
            Self::Report(_) => None,
        }
    }
}

fn location_suffix(path: Option<&Path>) -> String {
    path.map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, MigrateError>;
