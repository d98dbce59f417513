//! Directory scan: find candidate files, rewrite them, report totals.
//!
//! Files are processed one at a time. Each is read fully, rewritten in
//! memory and, only when something changed and the run is not a dry run,
//! written back atomically before the next file is opened. The first
//! read, decode or write failure aborts the run.

use crate::errors::{MigrateError, Result};
use crate::io::{self, FileWalker};
use crate::observability::{set_current_file, set_phase, ScanPhase};
use crate::report::{FileChange, Reporter, RunSummary};
use crate::rewrite::rewrite_source;
use std::path::{Path, PathBuf};

/// Settings for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub extension: String,
    pub exclude: Vec<glob::Pattern>,
    pub dry_run: bool,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: crate::config::DEFAULT_EXTENSION.to_string(),
            exclude: Vec::new(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<glob::Pattern>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Rewrite one file and return its replacement count.
///
/// The file is written only when the count is non-zero and `dry_run` is
/// false. Unchanged files are never written.
pub fn process_file(path: &Path, dry_run: bool) -> Result<usize> {
    let _file = set_current_file(path);
    let source = io::read_source(path)?;
    let rewrite = rewrite_source(&source);

    for replacement in rewrite.replacements() {
        tracing::debug!(
            path = %path.display(),
            line = replacement.line,
            literal = %replacement.literal,
            alpha = replacement.alpha,
            "withOpacity -> withAlpha"
        );
    }

    let changes = rewrite.count();
    if changes > 0 && !dry_run {
        io::write_atomic(path, rewrite.content())?;
    }
    Ok(changes)
}

/// Scan `options.root` and rewrite every candidate file.
///
/// Each changed file is passed to `reporter` as soon as it is processed;
/// the summary is reported once the walk completes.
pub fn scan_directory(options: &ScanOptions, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    if !options.root.is_dir() {
        return Err(MigrateError::RootNotFound {
            path: options.root.clone(),
        });
    }

    let files = {
        let _phase = set_phase(ScanPhase::FileDiscovery);
        FileWalker::new(options.root.clone())
            .with_extension(options.extension.clone())
            .with_exclude_patterns(options.exclude.clone())
            .walk()?
    };
    tracing::info!(
        root = %options.root.display(),
        candidates = files.len(),
        dry_run = options.dry_run,
        "Scanning"
    );

    let mut summary = RunSummary::default();
    {
        let _phase = set_phase(ScanPhase::Rewriting);
        for path in files {
            let changes = process_file(&path, options.dry_run)?;
            summary.record(changes);
            if changes > 0 {
                tracing::info!(path = %path.display(), changes, "Rewrote file");
                reporter
                    .file_changed(&FileChange { path, changes })
                    .map_err(MigrateError::Report)?;
            }
        }
    }

    let _phase = set_phase(ScanPhase::Reporting);
    reporter.finished(&summary).map_err(MigrateError::Report)?;
    tracing::info!(
        scanned = summary.files_scanned,
        changed = summary.files_changed,
        replacements = summary.total_replacements,
        "Scan complete"
    );
    Ok(summary)
}
