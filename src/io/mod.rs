//! Exchange shapes for the persistence layer and annotation consumers
//!
//! The core does not read or write files itself; it only defines the data
//! shapes the surrounding application serializes, plus the nearest-point
//! lookup used to attach waypoint flags and markers to generated points.

use crate::common::{PathConfig, Point, Waypoint};
use crate::gen::GeneratedPoint;
use serde::{Deserialize, Serialize};

/// Format version written into saved documents. Loaders compare it to warn
/// on cross-version loads; the core takes no action on a mismatch.
pub const FORMAT_VERSION: &str = "1.0.0";

/// A complete saved path: authored waypoints, the configuration they were
/// generated with, and the generated sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathDocument {
    pub version: String,
    pub waypoints: Vec<Waypoint>,
    pub config: PathConfig,
    pub generated: Vec<GeneratedPoint>,
}

impl PathDocument {
    /// Assemble a document stamped with the current format version
    pub fn new(
        waypoints: Vec<Waypoint>,
        config: PathConfig,
        generated: Vec<GeneratedPoint>,
    ) -> Self {
        PathDocument {
            version: FORMAT_VERSION.to_string(),
            waypoints,
            config,
            generated,
        }
    }

    /// Whether this document was written by the current format version
    pub fn version_matches(&self) -> bool {
        self.version == FORMAT_VERSION
    }
}

/// Index of the generated point nearest to `target` by Euclidean distance.
/// Returns `None` for an empty sequence.
pub fn nearest_generated_index(target: Point, generated: &[GeneratedPoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in generated.iter().enumerate() {
        let distance = target.distance(point.position);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
