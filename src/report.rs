//! Console output for migration runs.
//!
//! The exact wording here is relied on by scripts wrapping the tool, so it
//! must not change:
//!
//! ```text
//! [DRY RUN] Updated lib/main.dart (2 changes)
//!
//! Summary: 1 files changed, 2 replacements.
//! Dry run mode: No files were actually modified.
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DRY_RUN_PREFIX: &str = "[DRY RUN] ";
const DRY_RUN_NOTICE: &str = "Dry run mode: No files were actually modified.";

/// A file that had at least one replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub changes: usize,
}

/// Totals for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub total_replacements: usize,
}

impl RunSummary {
    /// Record a scanned file and the number of replacements it produced.
    pub fn record(&mut self, changes: usize) {
        self.files_scanned += 1;
        if changes > 0 {
            self.files_changed += 1;
            self.total_replacements += changes;
        }
    }
}

/// Receives progress from the scanner.
pub trait Reporter {
    fn file_changed(&mut self, change: &FileChange) -> io::Result<()>;
    fn finished(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Writes the plain-text report to any writer, normally stdout.
pub struct ConsoleReporter<W: Write> {
    out: W,
    dry_run: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(dry_run: bool) -> Self {
        Self::new(io::stdout(), dry_run)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn file_changed(&mut self, change: &FileChange) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format_file_line(&change.path, change.changes, self.dry_run)
        )
    }

    fn finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_summary(summary))?;
        if self.dry_run {
            writeln!(self.out, "{DRY_RUN_NOTICE}")?;
        }
        self.out.flush()
    }
}

pub fn format_file_line(path: &Path, changes: usize, dry_run: bool) -> String {
    let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };
    format!("{prefix}Updated {} ({changes} changes)", path.display())
}

pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Summary: {} files changed, {} replacements.",
        summary.files_changed, summary.total_replacements
    )
}
