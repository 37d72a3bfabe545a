//! Titlefix CLI Binary
//!
//! Normalizes title quotes under a documentation root and prints one line
//! per fixed file and one per failure.

use anyhow::Context;
use clap::Parser;
use std::process;
use titlefix::cli::Cli;
use titlefix::config::{ConfigLoader, FixerConfig};
use titlefix::logging::init_logging;
use titlefix::{LocalStore, Reporter, RunSummary};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Titlefix starting");

    match execute(&config) {
        Ok(summary) => {
            info!(fixed = summary.fixed, failed = summary.failed, "Completed");
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Build configuration from config file, environment, and CLI args.
/// Precedence: CLI flags override environment override config file override defaults.
fn build_config(cli: &Cli) -> anyhow::Result<FixerConfig> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("failed to resolve working directory")?;
            ConfigLoader::load(&cwd).context("failed to load configuration")?
        }
    };
    cli.apply_to(&mut config);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn execute(config: &FixerConfig) -> anyhow::Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    titlefix::run(config, &LocalStore, &mut reporter)
        .with_context(|| format!("cannot process {}", config.root.display()))
}
