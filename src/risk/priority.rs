//! Testing priority decision table.
//!
//! Rules are evaluated top to bottom and the first one that holds decides:
//!
//! 1. no test and high complexity: critical
//! 2. no test and a screen or hook: high
//! 3. line coverage below 50%: high
//! 4. no test: medium
//! 5. line coverage below the configured threshold: medium
//! 6. otherwise: low

use crate::core::{ComplexityLevel, FileRecord, FileType, Priority};

/// Line coverage under which a file is high priority regardless of threshold.
pub const LOW_COVERAGE_FLOOR: f64 = 50.0;

type PriorityRule = fn(&FileRecord, f64) -> Option<Priority>;

const RULES: [PriorityRule; 5] = [
    untested_complex,
    untested_screen_or_hook,
    below_floor,
    untested,
    below_threshold,
];

fn untested_complex(record: &FileRecord, _threshold: f64) -> Option<Priority> {
    (!record.has_test && record.complexity == ComplexityLevel::High).then_some(Priority::Critical)
}

fn untested_screen_or_hook(record: &FileRecord, _threshold: f64) -> Option<Priority> {
    let critical_type = matches!(record.file_type, FileType::Screens | FileType::Hooks);
    (!record.has_test && critical_type).then_some(Priority::High)
}

fn below_floor(record: &FileRecord, _threshold: f64) -> Option<Priority> {
    record
        .line_coverage()
        .filter(|lines| *lines < LOW_COVERAGE_FLOOR)
        .map(|_| Priority::High)
}

fn untested(record: &FileRecord, _threshold: f64) -> Option<Priority> {
    (!record.has_test).then_some(Priority::Medium)
}

fn below_threshold(record: &FileRecord, threshold: f64) -> Option<Priority> {
    record
        .line_coverage()
        .filter(|lines| *lines < threshold)
        .map(|_| Priority::Medium)
}

/// Priority for a record's current signals.
pub fn classify_priority(record: &FileRecord, threshold: f64) -> Priority {
    RULES
        .iter()
        .find_map(|rule| rule(record, threshold))
        .unwrap_or(Priority::Low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoverageMetrics;
    use std::path::PathBuf;

    fn record(file_type: FileType, tested: bool, complexity: ComplexityLevel) -> FileRecord {
        FileRecord::new("src/x.tsx", PathBuf::from("/p/src/x.tsx"), file_type)
            .with_test_file(tested.then(|| "src/x.test.tsx".to_string()))
            .with_complexity(complexity)
    }

    fn lines(pct: f64) -> Option<CoverageMetrics> {
        Some(CoverageMetrics {
            lines: pct,
            ..Default::default()
        })
    }

    #[test]
    fn test_untested_high_complexity_is_critical() {
        let r = record(FileType::Screens, false, ComplexityLevel::High).with_coverage(lines(99.0));
        assert_eq!(classify_priority(&r, 70.0), Priority::Critical);
    }

    #[test]
    fn test_untested_screen_or_hook_is_high() {
        let screen = record(FileType::Screens, false, ComplexityLevel::Low);
        let hook = record(FileType::Hooks, false, ComplexityLevel::Unknown);
        assert_eq!(classify_priority(&screen, 70.0), Priority::High);
        assert_eq!(classify_priority(&hook, 70.0), Priority::High);
    }

    #[test]
    fn test_coverage_below_floor_is_high_even_when_tested() {
        let r = record(FileType::Utils, true, ComplexityLevel::Low).with_coverage(lines(49.9));
        assert_eq!(classify_priority(&r, 70.0), Priority::High);
    }

    #[test]
    fn test_untested_other_is_medium() {
        let r = record(FileType::Components, false, ComplexityLevel::Medium);
        assert_eq!(classify_priority(&r, 70.0), Priority::Medium);
    }

    #[test]
    fn test_coverage_below_threshold_is_medium() {
        let r = record(FileType::Utils, true, ComplexityLevel::Low).with_coverage(lines(60.0));
        assert_eq!(classify_priority(&r, 70.0), Priority::Medium);
        assert_eq!(classify_priority(&r, 55.0), Priority::Low);
    }

    #[test]
    fn test_missing_coverage_is_not_zero() {
        let r = record(FileType::Utils, true, ComplexityLevel::High);
        assert_eq!(classify_priority(&r, 70.0), Priority::Low);
    }

    #[test]
    fn test_tested_high_complexity_is_not_critical() {
        let r = record(FileType::Components, true, ComplexityLevel::High).with_coverage(lines(80.0));
        assert_eq!(classify_priority(&r, 70.0), Priority::Low);
    }
}
