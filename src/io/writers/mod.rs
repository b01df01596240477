mod json;
mod markdown;
mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::core::report::CoverageSource;
use crate::core::{CoverageReport, FileRecord};

/// Entries shown per list in human-readable output.
pub const DISPLAY_LIMIT: usize = 5;

/// "... and N more" suffix for a list of `total` items, if it overflows.
pub(crate) fn overflow_line(total: usize) -> Option<String> {
    (total > DISPLAY_LIMIT).then(|| format!("... and {} more", total - DISPLAY_LIMIT))
}

/// Untested records in report order (most urgent first).
pub(crate) fn untested_records(report: &CoverageReport) -> Vec<&FileRecord> {
    report.files.iter().filter(|r| !r.has_test).collect()
}

pub(crate) fn coverage_source_label(source: CoverageSource) -> &'static str {
    match source {
        CoverageSource::CoverageReport => "from coverage report",
        CoverageSource::TestedRatio => "tested file ratio",
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{ComplexityLevel, CoverageMetrics, CoverageReport, FileRecord, FileType};
    use std::path::PathBuf;

    pub fn record(
        path: &str,
        file_type: FileType,
        tested: bool,
        complexity: ComplexityLevel,
        lines: Option<f64>,
    ) -> FileRecord {
        FileRecord::new(path, PathBuf::from(path), file_type)
            .with_test_file(tested.then(|| path.replace(".tsx", ".test.tsx")))
            .with_complexity(complexity)
            .with_coverage(lines.map(|lines| CoverageMetrics {
                lines,
                ..Default::default()
            }))
            .prioritized(70.0)
    }

    /// Eight untested components, one tested screen.
    pub fn sample_report() -> CoverageReport {
        let mut records: Vec<FileRecord> = (0..8)
            .map(|i| {
                record(
                    &format!("src/components/Widget{i}.tsx"),
                    FileType::Components,
                    false,
                    if i == 0 {
                        ComplexityLevel::High
                    } else {
                        ComplexityLevel::Low
                    },
                    None,
                )
            })
            .collect();
        records.push(record(
            "src/screens/Home.tsx",
            FileType::Screens,
            true,
            ComplexityLevel::Medium,
            None,
        ));
        CoverageReport::build("demo-app", records, Default::default(), 70.0)
    }
}
