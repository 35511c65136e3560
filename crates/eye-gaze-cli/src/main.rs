//! Eye Gaze CLI - Gaze-direction classification for recorded face tracking.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{classify::ClassifyArgs, stream::StreamArgs, Cli, Commands, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let result = match cli.command {
        Some(Commands::Classify(args)) => {
            commands::classify::run(&ClassifyArgs::with_config(args, &config))
        }
        Some(Commands::Stream(args)) => {
            commands::stream::run(&StreamArgs::with_config(args, &config))
        }
        None => {
            // Default behavior: run classify with flattened args
            if cli.classify.paths.is_empty() {
                eprintln!("error: No paths specified. Use --help for usage information.");
                return ExitCode::Error.into();
            }
            commands::classify::run(&ClassifyArgs::with_config(cli.classify, &config))
        }
    };

    let exit_code = result.unwrap_or_else(|e| {
        eprintln!("error: {e:#}");
        ExitCode::Error
    });

    exit_code.into()
}
