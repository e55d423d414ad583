mod app;
mod changeset;
mod cli;
mod config;
mod console;
mod model;
mod rewriter;
mod standards;
mod storage;

use app::RunOptions;
use clap::Parser;
use cli::Cli;
use config::{load_config, AppConfig};
use console::RunOutcome;
use std::process::ExitCode;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(Level::INFO);
            error!("Config load error ({}): {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(log_level(&config, cli.verbose));

    match app::run(&config, RunOptions::from(&cli)).await {
        Ok(RunOutcome::Updated(count)) => {
            info!("Done: {} titles updated, database consistent.", count);
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            info!("Done without changes ({:?}).", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run aborted, no data modified: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_level(config: &AppConfig, verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        config.level().unwrap_or(Level::INFO)
    }
}

/// Logs go to stderr so the preview on stdout stays readable.
fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
