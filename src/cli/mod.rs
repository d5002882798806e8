//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for casemap using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// casemap - Point-in-time case snapshots
#[derive(Parser, Debug)]
#[command(name = "casemap")]
#[command(version, about, long_about = None)]
#[command(author = "Casemap Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "casemap.toml", env = "CASEMAP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CASEMAP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Case data file, overriding `dataset.path`
    #[arg(short, long, env = "CASEMAP_DATA")]
    pub data: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the first and last confirmed dates of the dataset
    Bounds(commands::bounds::BoundsArgs),

    /// Show aggregates for the cases confirmed up to a cutoff
    Snapshot(commands::snapshot::SnapshotArgs),

    /// List map points for the cases confirmed up to a cutoff
    Points(commands::points::PointsArgs),

    /// Step the cutoff through the whole dataset
    Replay(commands::replay::ReplayArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
