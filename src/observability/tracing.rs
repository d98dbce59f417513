//! Subscriber setup.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Map `-v` occurrences to a log level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Calling this twice
/// is harmless; the second call is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "opacity_migrate={}",
            level_for_verbosity(verbosity).as_str().to_lowercase()
        ))
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
