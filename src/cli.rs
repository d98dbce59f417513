use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "opacity-migrate")]
#[command(
    about = "Rewrite deprecated .withOpacity(x) calls to .withAlpha(n)",
    long_about = "Scans a source tree and replaces every `.withOpacity(<number>)` call with \
                  `.withAlpha(<0-255>)`, computing alpha as round(opacity * 255) with the \
                  opacity clamped to [0, 1]."
)]
#[command(version)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Report what would change without modifying any file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Config file to use instead of <PATH>/.opacity-migrate.toml
    #[arg(long, env = "OPACITY_MIGRATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// File extension to scan (default: dart)
    #[arg(long)]
    pub extension: Option<String>,

    /// Glob, relative to PATH, of files to skip (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
