//! Cubic Bezier spline generator, the default algorithm family

use super::curve::CubicBezier;
use super::profile::{self, CurvatureSource};
use super::sampler;
use super::segment;
use super::stitch;
use super::{GeneratedPoint, PathGenerator};
use crate::common::{PathConfig, Waypoint};

/// Generates trajectories over piecewise cubic Bezier arcs shaped by the
/// waypoints' tangent handles. Angular velocity uses the analytic
/// (parametric) curvature of each sample.
#[derive(Debug, Default)]
pub struct CubicSplineGenerator;

impl PathGenerator for CubicSplineGenerator {
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
        "cubic_spline"
    }
}

fn generate_sub_path(sub_path: &[Waypoint], config: &PathConfig) -> Vec<GeneratedPoint> {
    let controls = segment::control_points(sub_path);
    if controls.len() < 4 {
        log::debug!(
            "cubic_spline: sub-path with {} control point(s) contributes nothing",
            controls.len()
        );
        return Vec::new();
    }

    let mut samples = Vec::new();
    for group in segment::section(&controls) {
        let curve = CubicBezier::new(group);
        samples.extend(sampler::sample_segment(
            &curve,
            config.spacing,
            config.cornering_k,
            config.max_velocity,
        ));
    }

    profile::profile(samples, config.max_acceleration, CurvatureSource::Parametric)
}
