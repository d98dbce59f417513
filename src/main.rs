use anyhow::{Context, Result};
use clap::Parser;
use opacity_migrate::cli::Cli;
use opacity_migrate::commands::{handle_migrate, MigrateCommand};
use opacity_migrate::observability::{init_tracing, install_panic_hook};
use opacity_migrate::report::ConsoleReporter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);
    install_panic_hook();

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let command = MigrateCommand::from_cli(cli, &cwd);
    let mut reporter = ConsoleReporter::stdout(command.dry_run);

    handle_migrate(&command, &mut reporter)?;
    Ok(())
}
