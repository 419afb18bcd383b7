//! Catmull-Rom spline generator
//!
//! Interpolates through the waypoint anchors directly; tangent handles are
//! not used by this family. Open chain ends get mirrored phantom control
//! points so the curve runs naturally through the first and last anchor.

use super::curve::{mirror_phantom, CatmullRom, Line};
use super::profile::{self, CurvatureSource};
use super::sampler;
use super::segment;
use super::stitch;
use super::{GeneratedPoint, PathGenerator};
use crate::common::{PathConfig, Point, Waypoint};

/// Generates trajectories over uniform Catmull-Rom segments through the
/// waypoint anchors. Angular velocity uses the discrete chordal curvature
/// estimate with smoothing.
#[derive(Debug, Default)]
pub struct CatmullRomGenerator;

impl PathGenerator for CatmullRomGenerator {
    fn generate(&self, waypoints: &[Waypoint], config: &PathConfig) -> Vec<GeneratedPoint> {
        if waypoints.len() < 2 {
            return Vec::new();
        }

        let profiles = segment::split_at_reversals(waypoints)
            .iter()
            .map(|sub_path| generate_sub_path(sub_path, config))
            .collect();

        stitch::stitch(profiles, waypoints[0].reverse)
    }

    fn name(&self) -> &str {
        "catmull_rom"
    }
}

fn generate_sub_path(sub_path: &[Waypoint], config: &PathConfig) -> Vec<GeneratedPoint> {
    if sub_path.len() < 2 {
        return Vec::new();
    }
    let anchors: Vec<Point> = sub_path.iter().map(|wp| wp.position).collect();

    let mut samples = Vec::new();
    if anchors.len() == 2 {
        // Two anchors: no interior tangents to honor, fall back to a line
        let curve = Line::new(anchors[0], anchors[1]);
        samples = sampler::sample_segment(
            &curve,
            config.spacing,
            config.cornering_k,
            config.max_velocity,
        );
    } else {
        let n = anchors.len();
        for seg in 0..n - 1 {
            let p0 = if seg == 0 {
                mirror_phantom(anchors[0], anchors[1])
            } else {
                anchors[seg - 1]
            };
            let p3 = if seg + 2 < n {
                anchors[seg + 2]
            } else {
                mirror_phantom(anchors[n - 1], anchors[n - 2])
            };
            let curve = CatmullRom::new([p0, anchors[seg], anchors[seg + 1], p3]);
            samples.extend(sampler::sample_segment(
                &curve,
                config.spacing,
                config.cornering_k,
                config.max_velocity,
            ));
        }
    }

    profile::profile(samples, config.max_acceleration, CurvatureSource::Chordal)
}
