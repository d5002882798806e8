//! Bounds command implementation
//!
//! Prints the temporal range a cutoff selector would span.

use super::common::load_dataset;
use clap::Args;

/// Arguments for the bounds command
#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl BoundsArgs {
    /// Execute the bounds command
    pub async fn execute(&self, config_path: &str, data: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Computing dataset bounds");

        let loaded = match load_dataset(config_path, data).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };
        let bounds = loaded.dataset.bounds();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&bounds)?);
            return Ok(0);
        }

        println!("📅 Dataset Bounds");
        println!();
        match (bounds.first_date, bounds.last_date) {
            (Some(first), Some(last)) => {
                println!("  Cases: {}", loaded.dataset.len());
                println!("  First confirmed: {first}");
                println!("  Last confirmed: {last}");
                println!("  Span: {} day(s)", bounds.day_span);
            }
            _ => {
                println!("No cases loaded from {}.", loaded.config.dataset.path);
            }
        }
        println!();
        Ok(0)
    }
}
