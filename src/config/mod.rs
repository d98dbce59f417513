//! Run configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults ([`MigrateConfig::default`])
//! 2. `.opacity-migrate.toml` in the scan root, or a file named explicitly
//! 3. command-line overrides applied by the caller
//!
//! ```toml
//! # .opacity-migrate.toml
//! extension = "dart"
//! exclude = ["build/**", "**/*.g.dart"]
//! ```

mod core;
mod loader;

pub use self::core::MigrateConfig;
pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};

/// Source file extension scanned when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = "dart";
