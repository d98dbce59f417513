//! Custom panic hook for structured crash reports.
//!
//! A crash in the middle of a run should say which file was being
//! rewritten, because that file may need checking by hand.

use super::context::{get_current_context, ScanContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str =
    "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    eprintln!("{RULE}");
    eprintln!("OPACITY-MIGRATE CRASH REPORT");
    eprintln!("  Version:  {VERSION}");
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    eprintln!("{RULE}");
    eprintln!("  PANIC: {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    for line in context_lines(&context) {
        eprintln!("  {line}");
    }
    eprintln!("{RULE}");
    if std::env::var_os("RUST_BACKTRACE").is_some() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

fn context_lines(context: &ScanContext) -> Vec<String> {
    let mut lines = vec![match &context.phase {
        Some(phase) => format!("Phase: {phase}"),
        None => "Phase: (not set - crash occurred before scanning started)".to_string(),
    }];
    if let Some(file) = &context.current_file {
        lines.push(format!("File: {}", file.display()));
        lines.push("This file may have been left unmodified; verify it before rerunning.".into());
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
