//! Crash-report infrastructure.
//!
//! - **Panic hook**: prints a structured crash report
//! - **Context tracking**: thread-local phase and file
//! - **Progress tracking**: atomic counters for files processed
//!
//! ```ignore
//! use covermap::observability::{install_panic_hook, set_phase, AnalysisPhase};
//!
//! install_panic_hook();
//! let _phase = set_phase(AnalysisPhase::FileDiscovery);
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_current_file,
    set_phase, set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
