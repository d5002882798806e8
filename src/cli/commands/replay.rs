//! Replay command implementation
//!
//! Drives the snapshot feed the way a dragged cutoff slider would, stepping
//! from the first confirmed date to the last and printing the headline
//! counts for each derived view.

use super::common::{load_dataset, EXIT_DATA};
use crate::core::feed::SnapshotFeed;
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the replay command
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Days between successive cutoffs
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub step_days: u32,
}

impl ReplayArgs {
    /// Execute the replay command
    pub async fn execute(&self, config_path: &str, data: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(step_days = self.step_days, "Replaying case timeline");

        let loaded = match load_dataset(config_path, data).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };
        let dates = loaded.dataset.bounds().dates(self.step_days);
        if dates.is_empty() {
            println!("No cases loaded from {}.", loaded.config.dataset.path);
            return Ok(0);
        }

        let (cutoff_tx, cutoff_rx) = watch::channel(None);
        let feed = SnapshotFeed::new(Arc::clone(&loaded.dataset), &loaded.config.feed);
        let (mut views, handle) = feed.spawn(cutoff_rx);

        println!("▶️  Replaying {} cutoff(s)", dates.len());
        println!();
        println!(
            "{:<12} {:>7} {:>13} {:>11} {:>9} {:>9}",
            "Cutoff", "Cases", "In treatment", "Discharged", "Deceased", "Clusters"
        );
        println!("{}", "-".repeat(66));

        for cutoff in dates {
            if cutoff_tx.send(Some(cutoff)).is_err() {
                break;
            }
            let view = loop {
                if views.changed().await.is_err() {
                    tracing::error!("Snapshot feed stopped unexpectedly");
                    eprintln!("❌ Snapshot feed stopped unexpectedly");
                    return Ok(EXIT_DATA);
                }
                let current = views.borrow_and_update().clone();
                if let Some(view) = current.filter(|view| view.cutoff == cutoff) {
                    break view;
                }
            };

            let summary = &view.aggregates.summary;
            println!(
                "{:<12} {:>7} {:>13} {:>11} {:>9} {:>9}",
                cutoff.to_string(),
                summary.cases,
                summary.in_treatment,
                summary.discharged,
                summary.deceased,
                view.aggregates.clusters.len()
            );
        }

        drop(cutoff_tx);
        handle.await?;
        println!();
        Ok(0)
    }
}
