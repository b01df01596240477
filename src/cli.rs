use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "covermap")]
#[command(
    about = "Test scaffolding and coverage-gap analysis for React and React Native projects",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a test file skeleton for a component
    Scaffold {
        /// Component source file (.js, .jsx, .ts, .tsx)
        component: PathBuf,

        /// Output file (defaults to <component dir>/__tests__/<Name>.test.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the generated test instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// Overwrite an existing test file
        #[arg(short, long)]
        force: bool,

        /// Import MSW handlers for async components
        #[arg(long = "with-msw")]
        with_msw: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Rank untested and under-tested files by risk
    Analyze {
        /// Project root containing package.json
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Line coverage percentage the project should meet
        #[arg(long)]
        threshold: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only analyze one file type (components, hooks, screens, utils, services, contexts, other)
        #[arg(long)]
        focus: Option<String>,

        /// Istanbul coverage-summary.json
        #[arg(long = "coverage-file")]
        coverage_file: Option<PathBuf>,

        /// Disable colors and emoji decoration
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Scaffold { verbosity, .. } | Commands::Analyze { verbosity, .. } => {
                *verbosity
            }
            Commands::Init { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

/// Log filter for a `-v` count.
pub fn log_level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["covermap", "analyze"]);
        match cli.command {
            Commands::Analyze {
                path,
                threshold,
                format,
                json,
                ..
            } => {
                assert_eq!(path, PathBuf::from("."));
                assert_eq!(threshold, None);
                assert_eq!(format, OutputFormat::Terminal);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_scaffold_flags() {
        let cli = Cli::parse_from([
            "covermap",
            "scaffold",
            "src/Button.tsx",
            "--dry-run",
            "-f",
            "--with-msw",
            "-vv",
        ]);
        assert_eq!(cli.command.verbosity(), 2);
        match cli.command {
            Commands::Scaffold {
                component,
                dry_run,
                force,
                with_msw,
                output,
                ..
            } => {
                assert_eq!(component, PathBuf::from("src/Button.tsx"));
                assert!(dry_run && force && with_msw);
                assert!(output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level_for(0), log::LevelFilter::Error);
        assert_eq!(log_level_for(1), log::LevelFilter::Info);
        assert_eq!(log_level_for(2), log::LevelFilter::Debug);
        assert_eq!(log_level_for(7), log::LevelFilter::Trace);
    }
}
