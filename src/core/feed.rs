//! Snapshot feed for interactive cutoff selection
//!
//! A cutoff selector writes into a `watch` channel as the user drags it. The
//! feed task derives a [`SnapshotView`] for the newest cutoff only, so
//! intermediate positions that were superseded before the task got to them
//! are never computed. Derivations are spaced at least
//! `min_refresh_interval_ms` apart.

use crate::config::FeedConfig;
use crate::core::dataset::{CaseDataset, SnapshotView};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Latest derived view; `None` until the first cutoff arrives
pub type ViewReceiver = watch::Receiver<Option<Arc<SnapshotView>>>;

/// Derives snapshot views from a stream of cutoffs
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    dataset: Arc<CaseDataset>,
    min_interval: Duration,
}

impl SnapshotFeed {
    pub fn new(dataset: Arc<CaseDataset>, config: &FeedConfig) -> Self {
        Self {
            dataset,
            min_interval: Duration::from_millis(config.min_refresh_interval_ms),
        }
    }

    /// Spawns the feed task
    ///
    /// The task runs until `cutoffs` is closed or every view receiver has
    /// been dropped.
    pub fn spawn(
        self,
        cutoffs: watch::Receiver<Option<NaiveDate>>,
    ) -> (ViewReceiver, JoinHandle<()>) {
        let (views_tx, views_rx) = watch::channel(None);
        let handle = tokio::spawn(self.run(cutoffs, views_tx));
        (views_rx, handle)
    }

    async fn run(
        self,
        mut cutoffs: watch::Receiver<Option<NaiveDate>>,
        views: watch::Sender<Option<Arc<SnapshotView>>>,
    ) {
        let mut last_derived: Option<Instant> = None;
        let mut derived = 0u64;
        let mut pending = *cutoffs.borrow_and_update();

        loop {
            if let Some(cutoff) = pending.take() {
                if let Some(at) = last_derived {
                    let elapsed = at.elapsed();
                    if elapsed < self.min_interval {
                        tokio::time::sleep(self.min_interval - elapsed).await;
                    }
                }

                // Pick up anything that arrived while waiting
                let cutoff = if cutoffs.has_changed().unwrap_or(false) {
                    (*cutoffs.borrow_and_update()).unwrap_or(cutoff)
                } else {
                    cutoff
                };

                let view = self.dataset.view(cutoff);
                last_derived = Some(Instant::now());
                derived += 1;

                if views.send(Some(Arc::new(view))).is_err() {
                    tracing::debug!("All view receivers dropped, stopping feed");
                    break;
                }
            }

            tokio::select! {
                changed = cutoffs.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    pending = *cutoffs.borrow_and_update();
                }
                _ = views.closed() => {
                    tracing::debug!("All view receivers dropped, stopping feed");
                    break;
                }
            }
        }

        tracing::debug!(derived, "Snapshot feed stopped");
    }
}
