//! Cluster locations
//!
//! Groups visible cases by cluster id. Cases without a cluster are dropped.
//! A cluster takes the first complete coordinate any member reports; members
//! with a missing or partial coordinate never override or contradict it.

use crate::core::snapshot::Snapshot;
use crate::domain::{ClusterId, Coordinate, PartialCoordinate};
use serde::Serialize;
use std::collections::HashMap;

/// One cluster with its visible member count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterLocation {
    pub id: ClusterId,
    /// First non-empty name among members
    pub name: Option<String>,
    pub case_count: usize,
    /// First complete coordinate among members, else the first member's
    pub coordinate: PartialCoordinate,
    /// Two members reported different complete coordinates
    pub coordinate_conflict: bool,
}

impl ClusterLocation {
    /// Complete coordinate, when any member reported both components
    pub fn position(&self) -> Option<Coordinate> {
        self.coordinate.complete()
    }
}

/// Groups the snapshot by cluster, in order of first appearance
pub fn locate_clusters(snapshot: &Snapshot<'_>) -> Vec<ClusterLocation> {
    let mut index: HashMap<&ClusterId, usize> = HashMap::new();
    let mut clusters: Vec<ClusterLocation> = Vec::new();

    for cluster in snapshot.iter().filter_map(|record| record.cluster.as_ref()) {
        let name = cluster.name.as_deref().filter(|name| !name.is_empty());

        match index.get(&cluster.id) {
            Some(&position) => {
                let location = &mut clusters[position];
                location.case_count += 1;
                if location.name.is_none() {
                    location.name = name.map(str::to_string);
                }
                match (location.coordinate.complete(), cluster.coordinate.complete()) {
                    (None, Some(_)) => location.coordinate = cluster.coordinate,
                    (Some(kept), Some(reported))
                        if kept != reported && !location.coordinate_conflict =>
                    {
                        location.coordinate_conflict = true;
                        tracing::warn!(
                            cluster_id = %cluster.id,
                            kept = %kept,
                            conflicting = %reported,
                            "Cluster members disagree on coordinate, keeping the first"
                        );
                    }
                    _ => {}
                }
            }
            None => {
                index.insert(&cluster.id, clusters.len());
                clusters.push(ClusterLocation {
                    id: cluster.id.clone(),
                    name: name.map(str::to_string),
                    case_count: 1,
                    coordinate: cluster.coordinate,
                    coordinate_conflict: false,
                });
            }
        }
    }

    clusters
}
