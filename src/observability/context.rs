//! Thread-local context tracking for crash reports.
//!
//! Records which phase of a run is active and which file is being processed,
//! plus global progress counters, so the panic hook can say where a crash
//! happened.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static FILES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    pub current_file: Option<PathBuf>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
        }
    }
}

/// Major stages of both pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Reading a component and detecting its features
    FeatureDetection,
    /// Building the test document
    ScaffoldSynthesis,
    /// Enumerating source and test files
    FileDiscovery,
    /// Typing files and matching them to tests
    Classification,
    /// Reading files for complexity scoring
    ComplexityScoring,
    /// Loading the coverage summary
    CoverageLoading,
    /// Running the priority decision table
    Prioritization,
    /// Rendering or writing results
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FeatureDetection => write!(f, "feature_detection"),
            Self::ScaffoldSynthesis => write!(f, "scaffold_synthesis"),
            Self::FileDiscovery => write!(f, "file_discovery"),
            Self::Classification => write!(f, "classification"),
            Self::ComplexityScoring => write!(f, "complexity_scoring"),
            Self::CoverageLoading => write!(f, "coverage_loading"),
            Self::Prioritization => write!(f, "prioritization"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current phase until the returned guard drops.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Set the current file until the returned guard drops.
#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_file = Some(path.into());
        ContextGuard { previous }
    })
}

pub fn set_progress(processed: usize, total: usize) {
    FILES_PROCESSED.store(processed, Ordering::Relaxed);
    FILES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_processed() {
    FILES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// (processed, total)
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        FILES_PROCESSED.load(Ordering::Relaxed),
        FILES_TOTAL.load(Ordering::Relaxed),
    )
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _outer = set_phase(AnalysisPhase::FileDiscovery);
        {
            let _inner = set_phase(AnalysisPhase::ComplexityScoring);
            assert_eq!(
                get_current_context().phase,
                Some(AnalysisPhase::ComplexityScoring)
            );
        }
        assert_eq!(
            get_current_context().phase,
            Some(AnalysisPhase::FileDiscovery)
        );
    }

    #[test]
    fn test_file_guard_nests_inside_phase() {
        reset_context();

        let _phase = set_phase(AnalysisPhase::ComplexityScoring);
        {
            let _file = set_current_file("/app/src/App.tsx");
            let ctx = get_current_context();
            assert_eq!(ctx.phase, Some(AnalysisPhase::ComplexityScoring));
            assert_eq!(ctx.current_file, Some(PathBuf::from("/app/src/App.tsx")));
        }
        assert!(get_current_context().current_file.is_none());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(AnalysisPhase::FileDiscovery.to_string(), "file_discovery");
        assert_eq!(
            AnalysisPhase::ScaffoldSynthesis.to_string(),
            "scaffold_synthesis"
        );
        assert_eq!(AnalysisPhase::CoverageLoading.to_string(), "coverage_loading");
    }

    #[test]
    fn test_empty_context_by_default() {
        reset_context();
        let ctx = get_current_context();
        assert!(ctx.phase.is_none());
        assert!(ctx.current_file.is_none());
    }
}
