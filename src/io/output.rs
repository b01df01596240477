use crate::core::CoverageReport;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CoverageReport) -> anyhow::Result<()>;
}

/// Box a writer for `format` around any byte sink.
///
/// `plain` only affects terminal output, where it drops emoji headings.
pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    plain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer).with_plain(plain)),
    }
}

/// Decide whether ANSI colours are emitted for the rest of the run.
pub fn configure_colors(plain: bool, to_file: bool) {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if plain || to_file || no_color_env {
        colored::control::set_override(false);
    }
}
