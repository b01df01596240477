//! Heuristic file complexity.
//!
//! A cheap structural-risk proxy for ranking untested files, not a real
//! complexity metric. The score is additive:
//!
//! | signal | points |
//! |--------|--------|
//! | lines > 50 / > 100 / > 200 | 1 / 2 / 3 |
//! | branch tokens > 2 / > 5 / > 10 | 1 / 2 / 3 |
//! | any async or promise usage | 2 |
//! | state-hook calls | 1 each, max 3 |
//! | effect / memo / callback hook calls | 1 each, max 2 |
//!
//! Buckets: score >= 8 is high, >= 4 is medium, anything lower is low.

use crate::analyzers::patterns::{ASYNC_USAGE, BRANCH_TOKEN, EFFECT_HOOK_CALL, STATE_HOOK_CALL};
use crate::core::ComplexityLevel;
use crate::errors::CovermapError;
use serde::Serialize;
use std::path::Path;

pub const HIGH_SCORE: u32 = 8;
pub const MEDIUM_SCORE: u32 = 4;

const MAX_STATE_POINTS: u32 = 3;
const MAX_EFFECT_POINTS: u32 = 2;
const ASYNC_POINTS: u32 = 2;

/// Individual contributions to a complexity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplexityBreakdown {
    pub lines: u32,
    pub branching: u32,
    pub async_usage: u32,
    pub state_hooks: u32,
    pub effect_hooks: u32,
}

impl ComplexityBreakdown {
    pub fn total(&self) -> u32 {
        self.lines + self.branching + self.async_usage + self.state_hooks + self.effect_hooks
    }

    pub fn level(&self) -> ComplexityLevel {
        level_for_score(self.total())
    }
}

pub fn line_points(line_count: usize) -> u32 {
    match line_count {
        n if n > 200 => 3,
        n if n > 100 => 2,
        n if n > 50 => 1,
        _ => 0,
    }
}

pub fn branch_points(branch_count: usize) -> u32 {
    match branch_count {
        n if n > 10 => 3,
        n if n > 5 => 2,
        n if n > 2 => 1,
        _ => 0,
    }
}

pub fn level_for_score(score: u32) -> ComplexityLevel {
    match score {
        s if s >= HIGH_SCORE => ComplexityLevel::High,
        s if s >= MEDIUM_SCORE => ComplexityLevel::Medium,
        _ => ComplexityLevel::Low,
    }
}

/// Score source text.
pub fn score_source(source: &str) -> ComplexityBreakdown {
    let state_calls = STATE_HOOK_CALL.find_iter(source).count() as u32;
    let effect_calls = EFFECT_HOOK_CALL.find_iter(source).count() as u32;

    ComplexityBreakdown {
        lines: line_points(source.lines().count()),
        branching: branch_points(BRANCH_TOKEN.find_iter(source).count()),
        async_usage: if ASYNC_USAGE.is_match(source) {
            ASYNC_POINTS
        } else {
            0
        },
        state_hooks: state_calls.min(MAX_STATE_POINTS),
        effect_hooks: effect_calls.min(MAX_EFFECT_POINTS),
    }
}

/// Bucket for source text that was read successfully.
pub fn classify_source(source: &str) -> ComplexityLevel {
    score_source(source).level()
}

/// Read and bucket a file.
///
/// Read failures are not fatal: they are logged and reported as
/// [`ComplexityLevel::Unknown`] so one bad file never aborts a pass.
pub fn classify_file(path: &Path) -> ComplexityLevel {
    match read_source(path) {
        Ok(source) => classify_source(&source),
        Err(e) => {
            log::warn!("{e}; complexity set to unknown");
            ComplexityLevel::Unknown
        }
    }
}

fn read_source(path: &Path) -> Result<String, CovermapError> {
    std::fs::read_to_string(path).map_err(|e| CovermapError::read(path, e))
}
