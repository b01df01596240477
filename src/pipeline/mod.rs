//! Coverage pipeline.
//!
//! ```text
//! inventory -> classify + match tests -> focus filter -> complexity
//!           -> coverage join -> priority -> report
//! ```
//!
//! Records are threaded through the stages by value; no stage keeps state
//! between runs.

pub mod stages;

use crate::core::report::CoverageInput;
use crate::core::{CoverageReport, FileType};
use crate::inventory::Inventory;
use crate::observability::{set_phase, set_progress, AnalysisPhase};
use crate::risk::CoverageMap;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PipelineOptions<'a> {
    pub threshold: f64,
    pub focus: Option<FileType>,
    pub coverage: Option<&'a CoverageMap>,
    pub ignore_patterns: &'a [String],
}

/// Run the whole coverage pipeline over a project root.
pub fn analyze_project(
    root: &Path,
    project: &str,
    options: &PipelineOptions<'_>,
) -> Result<CoverageReport> {
    let inventory = {
        let _phase = set_phase(AnalysisPhase::FileDiscovery);
        Inventory::collect(root, options.ignore_patterns)?
    };

    let records = {
        let _phase = set_phase(AnalysisPhase::Classification);
        stages::filter_by_type(inventory.records(), options.focus)
    };
    if let Some(focus) = options.focus {
        log::info!("Focusing on {} ({} files)", focus, records.len());
    }
    set_progress(0, records.len());

    let records = {
        let _phase = set_phase(AnalysisPhase::ComplexityScoring);
        stages::score_complexity(records)
    };

    let records = stages::join_coverage(records, options.coverage);

    let records = {
        let _phase = set_phase(AnalysisPhase::Prioritization);
        stages::prioritize(records, options.threshold)
    };

    Ok(CoverageReport::build(
        project,
        records,
        CoverageInput::from_map(options.coverage),
        options.threshold,
    ))
}
