use super::{coverage_source_label, overflow_line, untested_records, DISPLAY_LIMIT};
use crate::core::{ComplexityLevel, CoverageReport, Priority, ReportSummary};
use crate::io::output::OutputWriter;
use crate::risk::Recommendation;
use colored::*;
use std::io::Write;

const RULE: &str = "───────────────────────────────────────────";
const BANNER: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            plain: false,
        }
    }

    /// Drop emoji from section headings.
    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    fn heading(&self, emoji: &str, title: &str) -> String {
        if self.plain {
            title.bold().to_string()
        } else {
            format!("{} {}", emoji, title.bold())
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(&report.summary)?;
        self.write_untested(report)?;
        self.write_recommendations(&report.recommendations)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", BANNER.cyan())?;
        writeln!(
            self.writer,
            "  {} {}",
            "COVERAGE ANALYSIS".bold().cyan(),
            report.project.bold()
        )?;
        writeln!(self.writer, "{}", BANNER.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &ReportSummary) -> anyhow::Result<()> {
        let heading = self.heading("📊", "Summary");
        writeln!(self.writer, "{heading}")?;
        writeln!(self.writer, "{RULE}")?;
        writeln!(self.writer, "Files analyzed:  {}", summary.total_files)?;
        writeln!(self.writer, "Tested files:    {}", summary.tested_files)?;
        writeln!(self.writer, "Untested files:  {}", summary.untested_files)?;

        let pct = format!("{:.1}%", summary.coverage_percentage);
        let pct = if summary.meeting_threshold {
            pct.green()
        } else {
            pct.red()
        };
        let status = if summary.meeting_threshold {
            "meets".green()
        } else {
            "below".red()
        };
        writeln!(
            self.writer,
            "Coverage:        {} ({}), {} the {}% threshold",
            pct,
            source_label(summary),
            status,
            summary.threshold
        )?;

        let p = &summary.by_priority;
        writeln!(
            self.writer,
            "By priority:     {} critical, {} high, {} medium, {} low",
            p.critical.to_string().red(),
            p.high.to_string().yellow(),
            p.medium,
            p.low
        )?;

        if !summary.by_type.is_empty() {
            writeln!(self.writer, "By type:")?;
            for (file_type, counts) in &summary.by_type {
                writeln!(
                    self.writer,
                    "  {:<12} {}/{} tested",
                    file_type.as_str(),
                    counts.tested,
                    counts.total
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_untested(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        let untested = untested_records(report);
        let heading = self.heading("🚫", "Untested Files");
        writeln!(self.writer, "{} ({})", heading, untested.len())?;
        writeln!(self.writer, "{RULE}")?;

        if untested.is_empty() {
            writeln!(self.writer, "  {}", "Every source file has a test".green())?;
        }
        for record in untested.iter().take(DISPLAY_LIMIT) {
            writeln!(
                self.writer,
                "  {} {} ({}, complexity {})",
                priority_tag(record.priority()),
                record.path,
                record.file_type,
                complexity_label(record.complexity)
            )?;
        }
        if let Some(more) = overflow_line(untested.len()) {
            writeln!(self.writer, "  {}", more.dimmed())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, recommendations: &[Recommendation]) -> anyhow::Result<()> {
        let heading = self.heading("💡", "Recommendations");
        writeln!(self.writer, "{heading}")?;
        writeln!(self.writer, "{RULE}")?;

        if recommendations.is_empty() {
            writeln!(self.writer, "  {}", "Nothing to do".green())?;
        }
        for (i, rec) in recommendations.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {} {}: {}",
                i + 1,
                priority_tag(rec.priority),
                rec.category.bold(),
                rec.message
            )?;
            writeln!(self.writer, "   → {}", rec.action)?;
            for file in rec.files.iter().take(DISPLAY_LIMIT) {
                writeln!(self.writer, "     - {file}")?;
            }
            if let Some(more) = overflow_line(rec.file_count) {
                writeln!(self.writer, "     {}", more.dimmed())?;
            }
        }
        Ok(())
    }
}

fn source_label(summary: &ReportSummary) -> &'static str {
    coverage_source_label(summary.coverage_source)
}

fn priority_tag(priority: Priority) -> ColoredString {
    let tag = format!("[{}]", priority.to_string().to_uppercase());
    match priority {
        Priority::Critical => tag.red().bold(),
        Priority::High => tag.yellow(),
        Priority::Medium => tag.blue(),
        Priority::Low => tag.normal(),
    }
}

fn complexity_label(level: ComplexityLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        ComplexityLevel::High => label.red(),
        ComplexityLevel::Medium => label.yellow(),
        _ => label.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComplexityLevel, CoverageReport, FileType};
    use crate::io::writers::test_support::{record, sample_report};

    fn render_with(plain: bool) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .with_plain(plain)
            .write_report(&sample_report())
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn render() -> String {
        render_with(false)
    }

    #[test]
    fn test_section_order() {
        let text = render();
        let summary = text.find("Summary").unwrap();
        let untested = text.find("Untested Files").unwrap();
        let recs = text.find("Recommendations").unwrap();
        assert!(summary < untested && untested < recs);
    }

    #[test]
    fn test_untested_list_is_capped() {
        let text = render();
        assert!(text.contains("Untested Files (8)"));
        assert!(text.contains("[CRITICAL] src/components/Widget0.tsx"));
        assert!(text.contains("... and 3 more"));
        assert!(!text.contains("Widget7.tsx (components"));
    }

    #[test]
    fn test_plain_output_has_no_emoji() {
        let decorated = render();
        assert!(decorated.contains("📊 Summary"));
        assert!(decorated.contains("💡 Recommendations"));

        let plain = render_with(true);
        assert!(plain.contains("Summary"));
        assert!(plain.contains("Untested Files (8)"));
        for emoji in ["📊", "🚫", "💡"] {
            assert!(!plain.contains(emoji));
        }
    }

    #[test]
    fn test_recommendation_overflow_counts_every_file() {
        let records = (0..25)
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
        let report = CoverageReport::build("big-app", records, Default::default(), 70.0);

        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("25 files with high complexity and no tests"));
        // untested list, "Missing Tests" and "Scaffold Generation"
        assert_eq!(text.matches("... and 20 more").count(), 3);
        assert!(!text.contains("... and 5 more"));
    }

    #[test]
    fn test_summary_line() {
        let text = render();
        assert!(text.contains("Coverage:        11.1% (tested file ratio), below the 70% threshold"));
    }
}
