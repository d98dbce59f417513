use crate::cli::Cli;
use crate::config::{self, MigrateConfig};
use crate::errors::{MigrateError, Result};
use crate::observability::{set_phase, ScanPhase};
use crate::report::{Reporter, RunSummary};
use crate::scanner::{scan_directory, ScanOptions};
use std::path::{Path, PathBuf};

/// Everything the migrate command needs, independent of clap.
#[derive(Debug, Clone, Default)]
pub struct MigrateCommand {
    pub root: PathBuf,
    pub dry_run: bool,
    pub config_file: Option<PathBuf>,
    pub extension: Option<String>,
    pub exclude: Vec<String>,
}

impl MigrateCommand {
    /// Build from parsed arguments. A missing path means `cwd`.
    pub fn from_cli(cli: Cli, cwd: &Path) -> Self {
        Self {
            root: cli.path.unwrap_or_else(|| cwd.to_path_buf()),
            dry_run: cli.dry_run,
            config_file: cli.config,
            extension: cli.extension,
            exclude: cli.exclude,
        }
    }

    /// Layer defaults, the config file and command-line overrides.
    pub fn resolve_config(&self) -> Result<MigrateConfig> {
        let _phase = set_phase(ScanPhase::Configuration);
        if !self.root.is_dir() {
            return Err(MigrateError::RootNotFound {
                path: self.root.clone(),
            });
        }
        let base = match &self.config_file {
            Some(path) => config::load_config_file(path)?,
            None => config::load_config(&self.root)?,
        };
        let config = base.with_overrides(self.extension.clone(), self.exclude.clone());
        config.validate()?;
        Ok(config)
    }

    pub fn scan_options(&self, config: &MigrateConfig) -> Result<ScanOptions> {
        Ok(ScanOptions::new(self.root.clone())
            .dry_run(self.dry_run)
            .with_extension(config.normalized_extension())
            .with_exclude(config.exclude_patterns()?))
    }
}

/// Run a migration, reporting through `reporter`.
pub fn handle_migrate(command: &MigrateCommand, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    let config = command.resolve_config()?;
    let options = command.scan_options(&config)?;
    scan_directory(&options, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ConsoleReporter;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_cli_defaults_root_to_cwd() {
        let cli = Cli::try_parse_from(["opacity-migrate", "--dry-run"]).unwrap();
        let command = MigrateCommand::from_cli(cli, Path::new("/work"));
        assert_eq!(command.root, PathBuf::from("/work"));
        assert!(command.dry_run);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(config::CONFIG_FILE_NAME),
            "extension = \"kt\"\nexclude = [\"a/**\"]\n",
        )
        .unwrap();

        let command = MigrateCommand {
            root: dir.path().to_path_buf(),
            extension: Some(".dart".into()),
            exclude: vec!["b/**".into()],
            ..Default::default()
        };
        let config = command.resolve_config().unwrap();

        assert_eq!(config.normalized_extension(), "dart");
        assert_eq!(config.exclude, vec!["a/**", "b/**"]);
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let command = MigrateCommand {
            root: dir.path().to_path_buf(),
            config_file: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(matches!(
            command.resolve_config().unwrap_err(),
            MigrateError::Config { .. }
        ));
    }

    #[test]
    fn test_invalid_exclude_aborts_before_scanning() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.dart");
        fs::write(&file, "c.withOpacity(1)").unwrap();

        let command = MigrateCommand {
            root: dir.path().to_path_buf(),
            exclude: vec!["[".into()],
            ..Default::default()
        };
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        assert!(handle_migrate(&command, &mut reporter).is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), "c.withOpacity(1)");
    }

    #[test]
    fn test_handle_migrate_honours_excludes() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("gen")).unwrap();
        fs::write(dir.path().join("gen/a.dart"), "c.withOpacity(1)").unwrap();
        fs::write(dir.path().join("b.dart"), "c.withOpacity(1)").unwrap();

        let command = MigrateCommand {
            root: dir.path().to_path_buf(),
            exclude: vec!["gen/**".into()],
            ..Default::default()
        };
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        let summary = handle_migrate(&command, &mut reporter).unwrap();

        assert_eq!(summary.files_changed, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("gen/a.dart")).unwrap(),
            "c.withOpacity(1)"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("b.dart")).unwrap(),
            "c.withAlpha(255)"
        );
    }
}
