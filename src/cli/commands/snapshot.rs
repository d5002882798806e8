//! Snapshot command implementation
//!
//! Prints every aggregate for the cases confirmed on or before a cutoff.

use super::common::{bar, cutoff_or_latest, load_dataset};
use crate::core::aggregate::Aggregates;
use chrono::NaiveDate;
use clap::Args;

const BAR_WIDTH: usize = 30;

/// Arguments for the snapshot command
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Cutoff date (YYYY-MM-DD); defaults to the last confirmed date
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl SnapshotArgs {
    /// Execute the snapshot command
    pub async fn execute(&self, config_path: &str, data: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(as_of = ?self.as_of, "Deriving snapshot");

        let loaded = match load_dataset(config_path, data).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };
        let dataset = &loaded.dataset;

        let Some(cutoff) = cutoff_or_latest(dataset, self.as_of) else {
            println!("No cases loaded from {}.", loaded.config.dataset.path);
            return Ok(0);
        };
        let snapshot = dataset.snapshot(cutoff);
        let aggregates = dataset.aggregates(&snapshot);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&aggregates)?);
        } else {
            print_aggregates(cutoff, &aggregates);
        }
        Ok(0)
    }
}

fn print_aggregates(cutoff: NaiveDate, aggregates: &Aggregates) {
    let summary = &aggregates.summary;

    println!("📊 Snapshot as of {cutoff}");
    println!();
    println!("  Cases: {}", summary.cases);
    println!("  In treatment: {}", summary.in_treatment);
    println!("  Discharged: {}", summary.discharged);
    println!("  Deceased: {}", summary.deceased);
    println!("  Imported: {}", summary.imported);
    println!("  Untraced: {}", summary.untraced);
    println!();

    println!("Nationalities:");
    println!("{:<28} {:<6} {:>6}", "Nationality", "Code", "Cases");
    println!("{}", "-".repeat(42));
    for row in &aggregates.nationalities {
        let code = if row.code_is_fallback {
            format!("{}*", row.country_code)
        } else {
            row.country_code.clone()
        };
        println!("{:<28} {:<6} {:>6}", row.nationality, code, row.count);
    }
    if aggregates.nationalities.iter().any(|row| row.code_is_fallback) {
        println!("  * no country mapping, default code used");
    }
    println!();

    println!("Age groups:");
    for bucket in &aggregates.age.buckets {
        println!(
            "  {:<8} {:>5}  {:<width$}  F {} / M {}  discharged {} / treatment {} / deceased {}",
            bucket.bracket.label,
            bucket.count,
            bar(aggregates.age.width_ratio(bucket), BAR_WIDTH),
            bucket.gender_split.female,
            bucket.gender_split.male,
            bucket.treatment_split.discharged,
            bucket.treatment_split.treatment,
            bucket.treatment_split.deceased,
            width = BAR_WIDTH,
        );
    }
    println!();

    if aggregates.clusters.is_empty() {
        println!("No clusters.");
    } else {
        println!("Clusters:");
        println!("{:<8} {:<36} {:>6}  {}", "ID", "Name", "Cases", "Location");
        println!("{}", "-".repeat(80));
        for cluster in &aggregates.clusters {
            let location = match cluster.position() {
                Some(coordinate) if cluster.coordinate_conflict => format!("{coordinate} (conflicting)"),
                Some(coordinate) => coordinate.to_string(),
                None => "unknown".to_string(),
            };
            println!(
                "{:<8} {:<36} {:>6}  {}",
                cluster.id,
                cluster.name.as_deref().unwrap_or("-"),
                cluster.case_count,
                location
            );
        }
    }
    println!();
}
