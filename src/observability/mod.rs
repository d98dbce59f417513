//! Logging and crash reporting.
//!
//! - **Tracing**: `tracing` events go to stderr so stdout stays reserved for
//!   the run report
//! - **Context Tracking**: thread-local scan phase and current file
//! - **Panic Hook**: crash report naming the file being rewritten
//!
//! ```ignore
//! use opacity_migrate::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     init_tracing(1);
//!     install_panic_hook();
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, set_current_file, set_phase, ContextGuard, ScanContext, ScanPhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, level_for_verbosity};
