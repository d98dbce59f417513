// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod errors;
pub mod io;
pub mod observability;
pub mod report;
pub mod rewrite;
pub mod scanner;

// Re-export commonly used types
pub use crate::config::MigrateConfig;
pub use crate::convert::opacity_to_alpha;
pub use crate::errors::MigrateError;
pub use crate::report::{ConsoleReporter, FileChange, Reporter, RunSummary};
pub use crate::rewrite::{rewrite_source, Replacement, Rewrite};
pub use crate::scanner::{process_file, scan_directory, ScanOptions};
