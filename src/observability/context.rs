//! Thread-local context tracking for crash reports.
//!
//! Guards restore the previous context on drop, so a file context nested in
//! a phase context unwinds cleanly.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

thread_local! {
    static CURRENT_CONTEXT: RefCell<ScanContext> = const { RefCell::new(ScanContext::new()) };
}

/// What the scanner was doing at a given moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanContext {
    pub phase: Option<ScanPhase>,
    pub current_file: Option<PathBuf>,
}

impl ScanContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

/// Stages of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Loading and validating configuration
    Configuration,
    /// Walking the tree for candidate files
    FileDiscovery,
    /// Reading, rewriting and persisting files
    Rewriting,
    /// Printing the summary
    Reporting,
}

impl std::fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::FileDiscovery => write!(f, "file_discovery"),
            Self::Rewriting => write!(f, "rewriting"),
            Self::Reporting => write!(f, "reporting"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: ScanContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut ScanContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: ScanPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_file(path: &Path) -> ContextGuard {
    update(|ctx| ctx.current_file = Some(path.to_path_buf()))
}

pub fn get_current_context() -> ScanContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
