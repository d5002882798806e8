// casemap - Point-in-time snapshots over epidemiological case records
// Copyright (c) 2025 Casemap Contributors
// Licensed under the MIT License

use casemap::cli::{Cli, Commands};
use casemap::config::{load_config_or_default, CaseMapConfig};
use casemap::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config file when it is usable; the
    // commands report config problems themselves
    let config = load_config_or_default(&cli.config).unwrap_or_else(|_| CaseMapConfig::default());
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(config.application.log_level.as_str());

    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "casemap - Point-in-time case snapshots"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let data = cli.data.as_deref();
    match &cli.command {
        Commands::Bounds(args) => args.execute(&cli.config, data).await,
        Commands::Snapshot(args) => args.execute(&cli.config, data).await,
        Commands::Points(args) => args.execute(&cli.config, data).await,
        Commands::Replay(args) => args.execute(&cli.config, data).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
