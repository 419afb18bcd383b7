//! Kinematic velocity profiling
//!
//! Four stages over one sub-path's sample sequence, applied strictly in
//! order: deceleration clamp, acceleration clamp, time integration, angular
//! velocity. The forward pass further tightens speeds the backward pass
//! already limited, so the final speed at each sample satisfies both
//! constraints; time integration then consumes the settled speeds.

use super::GeneratedPoint;
use nalgebra::Vector2;

/// Where the angular-velocity stage takes its curvature from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvatureSource {
    /// Each sample's stored curvature from the analytic evaluator
    Parametric,
    /// Discrete chord-geometry estimate with smoothing; used for families
    /// without closed-form derivatives at the samples
    Chordal,
}

/// Backward pass: clamp each speed so the robot can still decelerate to
/// rest by the end of the sub-path. The last sample is forced to 0.
pub fn apply_deceleration_limit(
    mut points: Vec<GeneratedPoint>,
    max_acceleration: f64,
) -> Vec<GeneratedPoint> {
    let n = points.len();
    if n == 0 {
        return points;
    }

    points[n - 1].speed = 0.0;
    for i in (0..n - 1).rev() {
        let distance = points[i].distance(&points[i + 1]);
        let reachable = (2.0 * max_acceleration * distance + points[i + 1].speed.powi(2)).sqrt();
        points[i].speed = points[i].speed.min(reachable);
    }
    points
}

/// Forward pass: clamp each speed to what is reachable accelerating from
/// rest at the sub-path start. The first sample is forced to 0. Must run
/// after [`apply_deceleration_limit`].
pub fn apply_acceleration_limit(
    mut points: Vec<GeneratedPoint>,
    max_acceleration: f64,
) -> Vec<GeneratedPoint> {
    let n = points.len();
    if n == 0 {
        return points;
    }

    points[0].speed = 0.0;
    for i in 1..n {
        let distance = points[i].distance(&points[i - 1]);
        let reachable = (2.0 * max_acceleration * distance + points[i - 1].speed.powi(2)).sqrt();
        points[i].speed = points[i].speed.min(reachable);
    }
    points
}

/// Cumulative time of arrival: t_i = t_{i-1} + d / v_{i-1}. When the
/// previous speed is exactly 0 the raw distance is used as the increment,
/// keeping time finite at rest points.
pub fn integrate_time(mut points: Vec<GeneratedPoint>) -> Vec<GeneratedPoint> {
    let mut running = 0.0;
    for i in 1..points.len() {
        let distance = points[i].distance(&points[i - 1]);
        let previous_speed = points[i - 1].speed;
        let dt = if previous_speed == 0.0 {
            distance
        } else {
            distance / previous_speed
        };
        running += dt;
        points[i].time = running;
    }
    points
}

/// Angular velocity = curvature x speed, with curvature taken from the
/// selected source. The chordal source overwrites each sample's stored
/// curvature with the smoothed estimate.
pub fn apply_angular_velocity(
    mut points: Vec<GeneratedPoint>,
    source: CurvatureSource,
) -> Vec<GeneratedPoint> {
    match source {
        CurvatureSource::Parametric => {
            for point in &mut points {
                point.angular_velocity = point.curvature * point.speed;
            }
        }
        CurvatureSource::Chordal => {
            let curvatures = chordal_curvature(&points);
            for (point, kappa) in points.iter_mut().zip(curvatures) {
                point.curvature = kappa;
                point.angular_velocity = kappa * point.speed;
            }
        }
    }
    points
}

/// Discrete curvature from consecutive chords.
///
/// For each interior sample, the signed turning angle between the two unit
/// chords comes from atan2(cross, dot); dividing by the mean chord length
/// gives kappa ~ d_theta / d_s. Endpoints copy their nearest interior
/// neighbor, then a single 3-point moving-average pass smooths the column.
fn chordal_curvature(points: &[GeneratedPoint]) -> Vec<f64> {
    let n = points.len();
    if n < 3 {
        return vec![0.0; n];
    }

    let mut kappa = vec![0.0; n];
    for i in 1..n - 1 {
        let a: Vector2<f64> = points[i]
            .position
            .sub(points[i - 1].position)
            .to_vector();
        let b: Vector2<f64> = points[i + 1].position.sub(points[i].position).to_vector();
        let (la, lb) = (a.norm(), b.norm());
        if la == 0.0 || lb == 0.0 {
            continue;
        }
        let (ua, ub) = (a / la, b / lb);
        let cross = ua.x * ub.y - ua.y * ub.x;
        let dot = ua.dot(&ub);
        let turning = cross.atan2(dot);
        let mean_chord = 0.5 * (la + lb);
        kappa[i] = turning / mean_chord;
    }
    kappa[0] = kappa[1];
    kappa[n - 1] = kappa[n - 2];

    let mut smoothed = kappa.clone();
    for i in 1..n - 1 {
        smoothed[i] = (kappa[i - 1] + kappa[i] + kappa[i + 1]) / 3.0;
    }
    smoothed
}

/// Run all four profiling stages over one sub-path, in order
pub fn profile(
    points: Vec<GeneratedPoint>,
    max_acceleration: f64,
    source: CurvatureSource,
) -> Vec<GeneratedPoint> {
    let points = apply_deceleration_limit(points, max_acceleration);
    let points = apply_acceleration_limit(points, max_acceleration);
    let points = integrate_time(points);
    apply_angular_velocity(points, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point;
    use approx::assert_relative_eq;

    fn straight_samples(count: usize, spacing: f64, speed: f64) -> Vec<GeneratedPoint> {
        (0..count)
            .map(|i| GeneratedPoint::new(Point::new(i as f64 * spacing, 0.0), speed, 0.0))
            .collect()
    }

    #[test]
    fn boundary_speeds_are_zero() {
        let points = profile(straight_samples(20, 0.5, 24.0), 12.0, CurvatureSource::Parametric);
        assert_eq!(points[0].speed, 0.0);
        assert_eq!(points[points.len() - 1].speed, 0.0);
    }

    #[test]
    fn speeds_ramp_up_then_down() {
        let points = profile(straight_samples(20, 0.5, 24.0), 12.0, CurvatureSource::Parametric);
        // Second sample accelerates from rest: v = sqrt(2 a d)
        assert_relative_eq!(points[1].speed, (2.0f64 * 12.0 * 0.5).sqrt(), epsilon = 1e-9);
        let peak = points
            .iter()
            .map(|p| p.speed)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(peak > points[1].speed);
        assert!(peak <= 24.0);
        // Symmetric ramp on a uniform straight run
        assert_relative_eq!(
            points[1].speed,
            points[points.len() - 2].speed,
            epsilon = 1e-9
        );
    }

    #[test]
    fn forward_pass_runs_after_backward_pass() {
        // Backward alone leaves the first sample fast; forward must tighten it
        let backward = apply_deceleration_limit(straight_samples(20, 0.5, 24.0), 12.0);
        assert!(backward[0].speed > 0.0);
        let both = apply_acceleration_limit(backward, 12.0);
        assert_eq!(both[0].speed, 0.0);
        for (i, point) in both.iter().enumerate().skip(1).take(both.len() - 2) {
            let d_prev = point.distance(&both[i - 1]);
            let d_next = point.distance(&both[i + 1]);
            // Each settled speed satisfies both kinematic constraints
            assert!(
                point.speed <= (2.0 * 12.0 * d_prev + both[i - 1].speed.powi(2)).sqrt() + 1e-9
            );
            assert!(
                point.speed <= (2.0 * 12.0 * d_next + both[i + 1].speed.powi(2)).sqrt() + 1e-9
            );
        }
    }

    #[test]
    fn time_is_strictly_increasing_with_zero_speed_fallback() {
        let points = profile(straight_samples(20, 0.5, 24.0), 12.0, CurvatureSource::Parametric);
        assert_eq!(points[0].time, 0.0);
        for window in points.windows(2) {
            assert!(window[1].time > window[0].time);
        }
        // First increment uses the raw distance (previous speed is 0)
        assert_relative_eq!(points[1].time, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn parametric_angular_velocity_is_curvature_times_speed() {
        let mut samples = straight_samples(5, 1.0, 10.0);
        for sample in &mut samples {
            sample.curvature = 0.2;
        }
        let points = apply_angular_velocity(samples, CurvatureSource::Parametric);
        for point in &points {
            assert_relative_eq!(point.angular_velocity, 0.2 * point.speed);
        }
    }

    #[test]
    fn chordal_curvature_of_a_straight_run_is_zero() {
        let points = apply_angular_velocity(
            straight_samples(10, 0.5, 5.0),
            CurvatureSource::Chordal,
        );
        for point in &points {
            assert_relative_eq!(point.curvature, 0.0, epsilon = 1e-12);
            assert_relative_eq!(point.angular_velocity, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn chordal_curvature_matches_circle_radius() {
        // Points on a radius-2 circle: curvature magnitude ~ 0.5
        let radius = 2.0;
        let samples: Vec<GeneratedPoint> = (0..20)
            .map(|i| {
                let theta = i as f64 * 0.1;
                GeneratedPoint::new(
                    Point::new(radius * theta.cos(), radius * theta.sin()),
                    1.0,
                    0.0,
                )
            })
            .collect();
        let points = apply_angular_velocity(samples, CurvatureSource::Chordal);
        for point in points.iter().skip(2).take(points.len() - 4) {
            assert_relative_eq!(point.curvature.abs(), 0.5, epsilon = 0.01);
        }
    }

    #[test]
    fn empty_and_tiny_inputs_are_harmless() {
        assert!(profile(Vec::new(), 12.0, CurvatureSource::Chordal).is_empty());
        let single = profile(
            straight_samples(1, 0.5, 24.0),
            12.0,
            CurvatureSource::Chordal,
        );
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].speed, 0.0);
        let pair = profile(
            straight_samples(2, 0.5, 24.0),
            12.0,
            CurvatureSource::Chordal,
        );
        assert_eq!(pair[0].speed, 0.0);
        assert_eq!(pair[1].speed, 0.0);
        assert_relative_eq!(pair[1].time, 0.5);
    }
}
