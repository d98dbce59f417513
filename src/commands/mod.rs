//! Command implementations.
//!
//! - **migrate**: resolve configuration, scan, rewrite and report

pub mod migrate;

pub use migrate::{handle_migrate, MigrateCommand};
