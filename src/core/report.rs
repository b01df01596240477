//! Coverage analysis report assembled at the end of the coverage pipeline.

use super::{FileRecord, FileType, Priority};
use crate::risk::recommendations::{generate_recommendations, Recommendation};
use crate::risk::CoverageMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where the aggregate coverage figure came from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
#[serde(rename_all = "camelCase")]
pub enum CoverageSource {
    /// `total.lines.pct` of the supplied coverage summary
    CoverageReport,
    /// Share of source files with a matching test file
    TestedRatio,
}

/// What the coverage summary contributed to a run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoverageInput {
    /// A summary was loaded, whether or not it had a `total` entry
    pub loaded: bool,
    /// `total.lines.pct` of the summary
    pub reported_total: Option<f64>,
}

impl CoverageInput {
    pub fn from_map(map: Option<&CoverageMap>) -> Self {
        Self {
            loaded: map.is_some(),
            reported_total: map.and_then(CoverageMap::total_lines),
        }
    }

    /// A loaded summary with an aggregate line percentage.
    pub fn reported(total: f64) -> Self {
        Self {
            loaded: true,
            reported_total: Some(total),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TypeCounts {
    pub total: usize,
    pub tested: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    fn add(&mut self, priority: Priority) {
        match priority {
            Priority::Critical => self.critical += 1,
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_files: usize,
    pub tested_files: usize,
    pub untested_files: usize,
    pub coverage_percentage: f64,
    pub coverage_source: CoverageSource,
    pub threshold: f64,
    pub meeting_threshold: bool,
    pub has_coverage_data: bool,
    pub by_type: BTreeMap<FileType, TypeCounts>,
    pub by_priority: PriorityCounts,
}

impl ReportSummary {
    /// Summarise prioritized records.
    ///
    /// Without a reported aggregate line percentage the tested/total file
    /// ratio stands in for it.
    pub fn from_records(records: &[FileRecord], coverage: CoverageInput, threshold: f64) -> Self {
        let total_files = records.len();
        let tested_files = records.iter().filter(|r| r.has_test).count();

        let (coverage_percentage, coverage_source) = match coverage.reported_total {
            Some(total) => (total, CoverageSource::CoverageReport),
            None => (
                tested_ratio_percentage(tested_files, total_files),
                CoverageSource::TestedRatio,
            ),
        };

        let mut by_type: BTreeMap<FileType, TypeCounts> = BTreeMap::new();
        let mut by_priority = PriorityCounts::default();
        for record in records {
            let counts = by_type.entry(record.file_type).or_default();
            counts.total += 1;
            if record.has_test {
                counts.tested += 1;
            }
            by_priority.add(record.priority());
        }

        Self {
            total_files,
            tested_files,
            untested_files: total_files - tested_files,
            coverage_percentage,
            coverage_source,
            threshold,
            meeting_threshold: coverage_percentage >= threshold,
            has_coverage_data: coverage.loaded,
            by_type,
            by_priority,
        }
    }
}

/// Percentage of tested files, rounded to one decimal place.
pub fn tested_ratio_percentage(tested: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = tested as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// The full result of a coverage analysis run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub generated_at: DateTime<Utc>,
    pub project: String,
    pub summary: ReportSummary,
    pub files: Vec<FileRecord>,
    pub recommendations: Vec<Recommendation>,
    pub untested: Vec<String>,
}

impl CoverageReport {
    /// Assemble the report from prioritized records.
    ///
    /// Files are ordered most urgent first, then by path, so the output does
    /// not depend on traversal order.
    pub fn build(
        project: impl Into<String>,
        mut records: Vec<FileRecord>,
        coverage: CoverageInput,
        threshold: f64,
    ) -> Self {
        records.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.path.cmp(&b.path))
        });

        let summary = ReportSummary::from_records(&records, coverage, threshold);
        let recommendations = generate_recommendations(&records, &summary);
        let untested = records
            .iter()
            .filter(|r| !r.has_test)
            .map(|r| r.path.clone())
            .collect();

        Self {
            generated_at: Utc::now(),
            project: project.into(),
            summary,
            files: records,
            recommendations,
            untested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComplexityLevel;
    use std::path::PathBuf;

    fn record(path: &str, file_type: FileType, tested: bool) -> FileRecord {
        FileRecord::new(path, PathBuf::from(path), file_type)
            .with_test_file(tested.then(|| format!("{path}.test")))
            .with_complexity(ComplexityLevel::Low)
            .prioritized(70.0)
    }

    #[test]
    fn test_tested_ratio_rounding() {
        assert_eq!(tested_ratio_percentage(3, 10), 30.0);
        assert_eq!(tested_ratio_percentage(1, 3), 33.3);
        assert_eq!(tested_ratio_percentage(2, 3), 66.7);
        assert_eq!(tested_ratio_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_reported_total_overrides_ratio() {
        let records = vec![record("a.ts", FileType::Utils, false)];
        let summary = ReportSummary::from_records(&records, CoverageInput::reported(82.0), 70.0);
        assert_eq!(summary.coverage_percentage, 82.0);
        assert_eq!(summary.coverage_source, CoverageSource::CoverageReport);
        assert!(summary.meeting_threshold);
        assert!(summary.has_coverage_data);
    }

    #[test]
    fn test_loaded_summary_without_total_still_has_data() {
        let records = vec![record("a.ts", FileType::Utils, true)];
        let coverage = CoverageInput {
            loaded: true,
            reported_total: None,
        };
        let summary = ReportSummary::from_records(&records, coverage, 70.0);
        assert!(summary.has_coverage_data);
        assert_eq!(summary.coverage_source, CoverageSource::TestedRatio);
        assert_eq!(summary.coverage_percentage, 100.0);

        let none = ReportSummary::from_records(&records, CoverageInput::default(), 70.0);
        assert!(!none.has_coverage_data);
    }

    #[test]
    fn test_counts_by_type_and_priority() {
        let records = vec![
            record("src/hooks/useA.ts", FileType::Hooks, false),
            record("src/hooks/useB.ts", FileType::Hooks, true),
            record("src/utils/c.ts", FileType::Utils, false),
        ];
        let summary = ReportSummary::from_records(&records, CoverageInput::default(), 70.0);
        assert_eq!(summary.by_type[&FileType::Hooks], TypeCounts { total: 2, tested: 1 });
        assert_eq!(summary.by_priority.high, 1);
        assert_eq!(summary.by_priority.medium, 1);
        assert_eq!(summary.by_priority.low, 1);
        assert_eq!(summary.untested_files, 2);
    }

    #[test]
    fn test_build_orders_by_priority_then_path() {
        let records = vec![
            record("src/utils/z.ts", FileType::Utils, true),
            record("src/utils/b.ts", FileType::Utils, false),
            record("src/hooks/useA.ts", FileType::Hooks, false),
        ];
        let report = CoverageReport::build("app", records, CoverageInput::default(), 70.0);
        let paths: Vec<_> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/hooks/useA.ts", "src/utils/b.ts", "src/utils/z.ts"]);
        assert_eq!(report.untested, vec!["src/hooks/useA.ts", "src/utils/b.ts"]);
    }
}
