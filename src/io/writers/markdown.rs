use super::{coverage_source_label, overflow_line, untested_records, DISPLAY_LIMIT};
use crate::core::{CoverageReport, ReportSummary};
use crate::io::output::OutputWriter;
use crate::risk::Recommendation;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(&report.summary)?;
        self.write_untested(report)?;
        self.write_recommendations(&report.recommendations)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Coverage Analysis: {}", report.project)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &ReportSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Files Analyzed", &summary.total_files.to_string())?;
        self.write_row("Tested Files", &summary.tested_files.to_string())?;
        self.write_row("Untested Files", &summary.untested_files.to_string())?;
        self.write_row(
            "Coverage",
            &format!(
                "{:.1}% ({})",
                summary.coverage_percentage,
                coverage_source_label(summary.coverage_source)
            ),
        )?;
        self.write_row(
            "Threshold",
            &format!(
                "{}% ({})",
                summary.threshold,
                if summary.meeting_threshold {
                    "met"
                } else {
                    "not met"
                }
            ),
        )?;
        let p = &summary.by_priority;
        self.write_row(
            "Priorities",
            &format!(
                "{} critical, {} high, {} medium, {} low",
                p.critical, p.high, p.medium, p.low
            ),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_untested(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        let untested = untested_records(report);
        writeln!(self.writer, "## Untested Files")?;
        writeln!(self.writer)?;

        if untested.is_empty() {
            writeln!(self.writer, "Every source file has a test.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Priority | File | Type | Complexity |")?;
        writeln!(self.writer, "|----------|------|------|------------|")?;
        for record in untested.iter().take(DISPLAY_LIMIT) {
            writeln!(
                self.writer,
                "| {} | `{}` | {} | {} |",
                record.priority(),
                record.path,
                record.file_type,
                record.complexity
            )?;
        }
        if let Some(more) = overflow_line(untested.len()) {
            writeln!(self.writer)?;
            writeln!(self.writer, "_{more}_")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, recommendations: &[Recommendation]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;

        for (i, rec) in recommendations.iter().enumerate() {
            writeln!(
                self.writer,
                "### {}. {} ({})",
                i + 1,
                rec.category,
                rec.priority
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", rec.message)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**Action:** {}", rec.action)?;
            if !rec.files.is_empty() {
                writeln!(self.writer)?;
                for file in rec.files.iter().take(DISPLAY_LIMIT) {
                    writeln!(self.writer, "- `{file}`")?;
                }
                if let Some(more) = overflow_line(rec.file_count) {
                    writeln!(self.writer, "- _{more}_")?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
