//! Aggregated action items derived from prioritized records.
//!
//! Recommendations are emitted in a fixed order: missing tests on complex
//! files, untested screens, untested hooks, low coverage, overall coverage,
//! and finally the scaffold suggestion.

use crate::core::{FileRecord, FileType, Priority, ReportSummary};
use serde::{Deserialize, Serialize};

/// Upper bound on the files carried by one recommendation.
pub const MAX_RECOMMENDATION_FILES: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub message: String,
    /// First [`MAX_RECOMMENDATION_FILES`] affected paths
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Number of affected files before capping
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_count: usize,
    pub action: String,
}

fn is_zero(count: &usize) -> bool {
    *count == 0
}

impl Recommendation {
    fn new(
        priority: Priority,
        category: &str,
        message: String,
        records: &[&FileRecord],
        action: &str,
    ) -> Self {
        Self {
            priority,
            category: category.to_string(),
            message,
            files: records
                .iter()
                .take(MAX_RECOMMENDATION_FILES)
                .map(|r| r.path.clone())
                .collect(),
            file_count: records.len(),
            action: action.to_string(),
        }
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn missing_tests(records: &[FileRecord]) -> Option<Recommendation> {
    let critical: Vec<&FileRecord> = records
        .iter()
        .filter(|r| r.priority() == Priority::Critical)
        .collect();
    if critical.is_empty() {
        return None;
    }

    Some(Recommendation::new(
        Priority::Critical,
        "Missing Tests",
        format!(
            "{} with high complexity and no tests",
            plural(critical.len(), "file", "files")
        ),
        &critical,
        "Write tests for these files first",
    ))
}

fn untested_of_type(records: &[FileRecord], file_type: FileType) -> Option<Recommendation> {
    let untested: Vec<&FileRecord> = records
        .iter()
        .filter(|r| r.file_type == file_type && !r.has_test)
        .collect();
    if untested.is_empty() {
        return None;
    }

    let (category, noun, action) = match file_type {
        FileType::Screens => (
            "Untested Screens",
            ("screen", "screens"),
            "Add integration tests that render each screen with mocked navigation",
        ),
        _ => (
            "Untested Hooks",
            ("hook", "hooks"),
            "Test each hook with renderHook and assert its state transitions",
        ),
    };

    Some(Recommendation::new(
        Priority::High,
        category,
        format!("{} without tests", plural(untested.len(), noun.0, noun.1)),
        &untested,
        action,
    ))
}

fn low_coverage(records: &[FileRecord], threshold: f64) -> Option<Recommendation> {
    let low: Vec<&FileRecord> = records
        .iter()
        .filter(|r| {
            r.line_coverage()
                .is_some_and(|lines| lines > 0.0 && lines < threshold)
        })
        .collect();
    if low.is_empty() {
        return None;
    }

    Some(Recommendation::new(
        Priority::Medium,
        "Low Coverage",
        format!(
            "{} below {}% line coverage",
            plural(low.len(), "file", "files"),
            threshold
        ),
        &low,
        "Cover the untested branches and error paths of these files",
    ))
}

fn overall_coverage(summary: &ReportSummary) -> Option<Recommendation> {
    if summary.total_files == 0 || summary.meeting_threshold {
        return None;
    }

    Some(Recommendation::new(
        Priority::High,
        "Overall Coverage",
        format!(
            "Project coverage is {:.1}%, below the {}% threshold",
            summary.coverage_percentage, summary.threshold
        ),
        &[],
        "Start with the critical and high priority files to raise overall coverage",
    ))
}

fn scaffold_suggestion(records: &[FileRecord]) -> Option<Recommendation> {
    let untested: Vec<&FileRecord> = records.iter().filter(|r| !r.has_test).collect();
    if untested.is_empty() {
        return None;
    }

    Some(Recommendation::new(
        Priority::Low,
        "Scaffold Generation",
        format!(
            "{} could start from a generated test scaffold",
            plural(untested.len(), "untested file", "untested files")
        ),
        &untested,
        "Run `covermap scaffold <file>` to generate a test skeleton",
    ))
}

/// Build the recommendation list for prioritized records.
pub fn generate_recommendations(
    records: &[FileRecord],
    summary: &ReportSummary,
) -> Vec<Recommendation> {
    [
        missing_tests(records),
        untested_of_type(records, FileType::Screens),
        untested_of_type(records, FileType::Hooks),
        low_coverage(records, summary.threshold),
        overall_coverage(summary),
        scaffold_suggestion(records),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::CoverageInput;
    use crate::core::{ComplexityLevel, CoverageMetrics};
    use std::path::PathBuf;

    fn record(
        path: &str,
        file_type: FileType,
        tested: bool,
        complexity: ComplexityLevel,
        lines: Option<f64>,
    ) -> FileRecord {
        FileRecord::new(path, PathBuf::from(path), file_type)
            .with_test_file(tested.then(|| format!("{path}.test")))
            .with_complexity(complexity)
            .with_coverage(lines.map(|lines| CoverageMetrics {
                lines,
                ..Default::default()
            }))
            .prioritized(70.0)
    }

    fn categories(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.category.as_str()).collect()
    }

    #[test]
    fn test_fixed_order() {
        let records = vec![
            record("src/screens/Home.tsx", FileType::Screens, false, ComplexityLevel::High, None),
            record("src/hooks/useA.ts", FileType::Hooks, false, ComplexityLevel::Low, None),
            record("src/utils/b.ts", FileType::Utils, true, ComplexityLevel::Low, Some(40.0)),
        ];
        let summary = ReportSummary::from_records(&records, CoverageInput::default(), 70.0);
        let recs = generate_recommendations(&records, &summary);
        assert_eq!(
            categories(&recs),
            vec![
                "Missing Tests",
                "Untested Screens",
                "Untested Hooks",
                "Low Coverage",
                "Overall Coverage",
                "Scaffold Generation",
            ]
        );
        assert_eq!(recs[0].priority, Priority::Critical);
        assert_eq!(recs[0].message, "1 file with high complexity and no tests");
        assert_eq!(recs[5].priority, Priority::Low);
    }

    #[test]
    fn test_zero_coverage_is_not_low_coverage() {
        let records = vec![record(
            "src/utils/a.ts",
            FileType::Utils,
            true,
            ComplexityLevel::Low,
            Some(0.0),
        )];
        let summary = ReportSummary::from_records(&records, CoverageInput::reported(90.0), 70.0);
        assert!(generate_recommendations(&records, &summary).is_empty());
    }

    #[test]
    fn test_file_lists_are_capped() {
        let records: Vec<FileRecord> = (0..25)
            .map(|i| {
                record(
                    &format!("src/components/C{i:02}.tsx"),
                    FileType::Components,
                    false,
                    ComplexityLevel::High,
                    None,
                )
            })
            .collect();
        let summary = ReportSummary::from_records(&records, CoverageInput::default(), 70.0);
        let recs = generate_recommendations(&records, &summary);
        assert_eq!(recs[0].files.len(), MAX_RECOMMENDATION_FILES);
        assert_eq!(recs[0].file_count, 25);
        assert_eq!(recs[0].message, "25 files with high complexity and no tests");
    }

    #[test]
    fn test_meeting_threshold_skips_overall() {
        let records = vec![record(
            "src/App.tsx",
            FileType::Other,
            true,
            ComplexityLevel::Low,
            None,
        )];
        let summary = ReportSummary::from_records(&records, CoverageInput::default(), 70.0);
        assert!(summary.meeting_threshold);
        assert!(generate_recommendations(&records, &summary).is_empty());
    }
}
