use anyhow::Result;
use clap::Parser;
use covermap::cli::{log_level_for, Cli, Commands};
use covermap::commands::{self, AnalyzeConfig, ScaffoldCommandConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level_for(cli.command.verbosity()))
        .parse_default_env()
        .init();
    covermap::observability::install_panic_hook();

    match cli.command {
        Commands::Scaffold {
            component,
            output,
            dry_run,
            force,
            with_msw,
            verbosity: _,
        } => commands::handle_scaffold(ScaffoldCommandConfig {
            component,
            output,
            dry_run,
            force,
            with_msw,
        }),
        Commands::Analyze {
            path,
            threshold,
            format,
            json,
            output,
            focus,
            coverage_file,
            plain,
            verbosity: _,
        } => commands::handle_analyze(AnalyzeConfig {
            path,
            format: format.into(),
            json,
            output,
            threshold,
            focus,
            coverage_file,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
