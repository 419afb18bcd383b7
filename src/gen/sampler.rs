//! Arc-length resampling of curve segments
//!
//! Samples are placed at (approximately) uniform spatial spacing rather
//! than uniform parameter spacing, which would over- or under-sample
//! depending on the local parametric speed of the curve.

use super::curve::{Curve, DEFAULT_SIMPSON_STEPS};
use super::lut::CumulativeDistanceLut;
use super::GeneratedPoint;

/// Dense sample count injected per segment when building the LUT
pub const LUT_SAMPLES_PER_SEGMENT: usize = 50;

/// Curvature-limited provisional speed: min(max_velocity, |k / curvature|).
/// Zero curvature leaves the speed unclamped.
pub fn provisional_speed(curvature: f64, cornering_k: f64, max_velocity: f64) -> f64 {
    if curvature == 0.0 {
        max_velocity
    } else {
        max_velocity.min((cornering_k / curvature).abs())
    }
}

/// Sample one segment at ~`spacing` arc-length intervals.
///
/// The segment length comes from Simpson integration; the sample count is
/// ceil(length / spacing). Target distances are inverted to parameters
/// through a cumulative-distance LUT. The t = 1 endpoint is never emitted:
/// it is the next segment's t = 0 sample.
pub fn sample_segment(
    curve: &dyn Curve,
    spacing: f64,
    cornering_k: f64,
    max_velocity: f64,
) -> Vec<GeneratedPoint> {
    if spacing <= 0.0 {
        return Vec::new();
    }

    let length = curve.arc_length(DEFAULT_SIMPSON_STEPS);
    if length <= 0.0 {
        return Vec::new();
    }

    // Small tolerance so lengths that are an exact multiple of the spacing
    // do not round up on floating-point noise
    let count = ((length / spacing) - 1e-9).ceil().max(1.0) as usize;
    let lut = CumulativeDistanceLut::from_curve(curve, LUT_SAMPLES_PER_SEGMENT);
    // Step on the LUT's own distance scale so samples span the whole segment
    let step = lut.total_distance() / count as f64;

    let mut samples = Vec::with_capacity(count);
    for j in 0..count {
        let t = lut.param_at_distance(j as f64 * step);
        let position = curve.position(t);
        let curvature = curve.curvature(t);
        let speed = provisional_speed(curvature, cornering_k, max_velocity);
        samples.push(GeneratedPoint::new(position, speed, curvature));
    }

    samples
}
