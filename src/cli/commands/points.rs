//! Points command implementation
//!
//! Lists where each visible case would be drawn on the map.

use super::common::{cutoff_or_latest, load_dataset};
use crate::core::geo::{CoordinateSource, PlotPosition};
use chrono::NaiveDate;
use clap::Args;

/// Arguments for the points command
#[derive(Args, Debug)]
pub struct PointsArgs {
    /// Cutoff date (YYYY-MM-DD); defaults to the last confirmed date
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl PointsArgs {
    /// Execute the points command
    pub async fn execute(&self, config_path: &str, data: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(as_of = ?self.as_of, "Resolving map points");

        let loaded = match load_dataset(config_path, data).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };
        let dataset = &loaded.dataset;

        let Some(cutoff) = cutoff_or_latest(dataset, self.as_of) else {
            println!("No cases loaded from {}.", loaded.config.dataset.path);
            return Ok(0);
        };
        let resolved = dataset.resolve_points(&dataset.snapshot(cutoff));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
            return Ok(0);
        }

        println!("📍 Map points as of {cutoff}");
        println!();
        println!(
            "{:<8} {:<14} {:<7} {:>4}  {:<24} {:<8} {}",
            "Case", "Status", "Gender", "Age", "Place of stay", "From", "Location"
        );
        println!("{}", "-".repeat(100));
        for point in &resolved.points {
            let (from, location) = match point.position {
                PlotPosition::Plotted {
                    coordinate,
                    source: CoordinateSource::Case,
                } => ("case", coordinate.to_string()),
                PlotPosition::Plotted {
                    coordinate,
                    source: CoordinateSource::Cluster,
                } => ("cluster", coordinate.to_string()),
                PlotPosition::Unplottable => ("-", "unplottable".to_string()),
            };
            println!(
                "{:<8} {:<14} {:<7} {:>4}  {:<24} {:<8} {}",
                point.case_number,
                point.status.to_string(),
                point.gender.to_string(),
                point.age,
                point.place_of_stay,
                from,
                location
            );
        }
        println!();
        println!(
            "{} point(s), {} without a location",
            resolved.points.len(),
            resolved.unplottable
        );
        Ok(0)
    }
}
