//! Map point resolution
//!
//! Each visible case is placed at its own position when both components are
//! known, otherwise at its cluster's location. Cases with neither are kept
//! as [`PlotPosition::Unplottable`] and counted; they are never placed at a
//! made-up coordinate.

use crate::core::snapshot::Snapshot;
use crate::core::status::{status, CaseStatus};
use crate::domain::{CaseNumber, CaseRecord, Coordinate, Gender};
use serde::Serialize;

/// Where a plotted coordinate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    Case,
    Cluster,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlotPosition {
    Plotted {
        coordinate: Coordinate,
        source: CoordinateSource,
    },
    Unplottable,
}

impl PlotPosition {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            PlotPosition::Plotted { coordinate, .. } => Some(*coordinate),
            PlotPosition::Unplottable => None,
        }
    }

    pub fn is_plotted(&self) -> bool {
        matches!(self, PlotPosition::Plotted { .. })
    }
}

/// One case as drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub case_number: CaseNumber,
    pub gender: Gender,
    pub age: u32,
    pub nationality: String,
    pub place_of_stay: String,
    pub cluster_name: Option<String>,
    pub status: CaseStatus,
    pub position: PlotPosition,
}

/// Points for a snapshot in case order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedPoints {
    pub points: Vec<PlotPoint>,
    pub unplottable: usize,
}

impl ResolvedPoints {
    pub fn plotted(&self) -> impl Iterator<Item = &PlotPoint> {
        self.points.iter().filter(|point| point.position.is_plotted())
    }
}

/// Resolves the position of one record
pub fn resolve_position(record: &CaseRecord) -> PlotPosition {
    if let Some(coordinate) = record.position.complete() {
        return PlotPosition::Plotted {
            coordinate,
            source: CoordinateSource::Case,
        };
    }
    match record
        .cluster
        .as_ref()
        .and_then(|cluster| cluster.coordinate.complete())
    {
        Some(coordinate) => PlotPosition::Plotted {
            coordinate,
            source: CoordinateSource::Cluster,
        },
        None => PlotPosition::Unplottable,
    }
}

/// Resolves every visible case, with statuses at the snapshot's `as_of`
pub fn resolve_points(snapshot: &Snapshot<'_>) -> ResolvedPoints {
    let Some(as_of) = snapshot.as_of() else {
        return ResolvedPoints::default();
    };

    let mut resolved = ResolvedPoints {
        points: Vec::with_capacity(snapshot.len()),
        unplottable: 0,
    };
    for record in snapshot {
        let position = resolve_position(record);
        if !position.is_plotted() {
            resolved.unplottable += 1;
        }
        resolved.points.push(PlotPoint {
            case_number: record.case_number,
            gender: record.gender,
            age: record.age,
            nationality: record.nationality.clone(),
            place_of_stay: record.place_of_stay.clone(),
            cluster_name: record.cluster_name().map(str::to_string),
            status: status(record, as_of),
            position,
        });
    }

    if resolved.unplottable > 0 {
        tracing::debug!(
            unplottable = resolved.unplottable,
            cutoff = %snapshot.cutoff(),
            "Cases without a resolvable coordinate"
        );
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClusterId, ClusterRef, PartialCoordinate};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, d).unwrap()
    }

    fn case(n: u32, position: PartialCoordinate, cluster: Option<PartialCoordinate>) -> CaseRecord {
        CaseRecord::builder()
            .case_number(n)
            .confirmed_date(day(n))
            .age(60)
            .position(position)
            .cluster(cluster.map(|coordinate| ClusterRef {
                id: ClusterId::new("4").unwrap(),
                name: Some("Tour Group".to_string()),
                coordinate,
            }))
            .build()
            .unwrap()
    }

    #[test]
    fn test_own_position_preferred() {
        let own = Coordinate::new(1.3, 103.8);
        let record = case(1, own.into(), Some(Coordinate::new(1.4, 103.9).into()));
        assert_eq!(
            resolve_position(&record),
            PlotPosition::Plotted {
                coordinate: own,
                source: CoordinateSource::Case
            }
        );
    }

    #[test]
    fn test_partial_own_position_falls_back_to_cluster() {
        let cluster = Coordinate::new(1.4, 103.9);
        let record = case(1, PartialCoordinate::new(Some(1.3), None), Some(cluster.into()));
        assert_eq!(
            resolve_position(&record),
            PlotPosition::Plotted {
                coordinate: cluster,
                source: CoordinateSource::Cluster
            }
        );
    }

    #[test]
    fn test_unresolvable_is_unplottable() {
        let record = case(
            1,
            PartialCoordinate::unknown(),
            Some(PartialCoordinate::new(None, Some(103.0))),
        );
        assert_eq!(resolve_position(&record), PlotPosition::Unplottable);

        let bare = case(2, PartialCoordinate::unknown(), None);
        assert_eq!(resolve_position(&bare), PlotPosition::Unplottable);
    }

    #[test]
    fn test_resolve_points_counts_unplottable() {
        let records = vec![
            case(1, Coordinate::new(1.3, 103.8).into(), None),
            case(2, PartialCoordinate::unknown(), None),
            case(3, PartialCoordinate::unknown(), Some(Coordinate::new(1.4, 103.9).into())),
        ];
        let resolved = resolve_points(&Snapshot::take(&records, day(28)));

        assert_eq!(resolved.points.len(), 3);
        assert_eq!(resolved.unplottable, 1);
        assert_eq!(resolved.plotted().count(), 2);
        assert_eq!(resolved.points[2].cluster_name.as_deref(), Some("Tour Group"));
        assert_eq!(resolved.points[0].status, CaseStatus::Treated);
        assert!(resolved
            .plotted()
            .filter_map(|point| point.position.coordinate())
            .all(|c| c != Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn test_empty_snapshot_has_no_points() {
        assert_eq!(resolve_points(&Snapshot::take(&[], day(1))), ResolvedPoints::default());
    }
}
