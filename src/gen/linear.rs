//! Linear generator: one point per waypoint, no curvature or kinematic
//! shaping

use super::{GeneratedPoint, PathGenerator};
use crate::common::{PathConfig, Waypoint};

/// Emits the waypoints themselves at constant signed max velocity.
///
/// This family bypasses the profiling pipeline: `time` is a nominal
/// per-point index placeholder, not a physically integrated value. The
/// first and last points are still forced to zero speed so path boundaries
/// remain hard stops.
#[derive(Debug, Default)]
pub struct LinearGenerator;

impl PathGenerator for LinearGenerator {
    fn generate(&self, waypoints: &[Waypoint], config: &PathConfig) -> Vec<GeneratedPoint> {
        if waypoints.len() < 2 {
            return Vec::new();
        }

        let mut reversed = waypoints[0].reverse;
        let mut points: Vec<GeneratedPoint> = waypoints
            .iter()
            .enumerate()
            .map(|(index, wp)| {
                if index != 0 && wp.reverse {
                    reversed = !reversed;
                }
                let sign = if reversed { -1.0 } else { 1.0 };
                let mut point =
                    GeneratedPoint::new(wp.position, sign * config.max_velocity, 0.0);
                point.time = index as f64;
                point
            })
            .collect();

        let last = points.len() - 1;
        points[0].speed = 0.0;
        points[last].speed = 0.0;
        points
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point;

    fn wp(x: f64) -> Waypoint {
        Waypoint::new(Point::new(x, 0.0), Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }

    #[test]
    fn one_point_per_waypoint_with_index_time() {
        let waypoints = vec![wp(0.0), wp(3.0), wp(7.0)];
        let points = LinearGenerator.generate(&waypoints, &PathConfig::default());
        assert_eq!(points.len(), 3);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.time, i as f64);
            assert_eq!(point.position, waypoints[i].position);
            assert_eq!(point.angular_velocity, 0.0);
        }
    }

    #[test]
    fn interior_speed_is_signed_max_velocity_with_zero_boundaries() {
        let waypoints = vec![wp(0.0), wp(3.0), wp(7.0), wp(9.0)];
        let points = LinearGenerator.generate(&waypoints, &PathConfig::default());
        assert_eq!(points[0].speed, 0.0);
        assert_eq!(points[3].speed, 0.0);
        assert_eq!(points[1].speed, 24.0);
        assert_eq!(points[2].speed, 24.0);
    }

    #[test]
    fn reversal_flags_toggle_the_sign() {
        let waypoints = vec![wp(0.0), wp(3.0).reversed(), wp(7.0), wp(9.0)];
        let points = LinearGenerator.generate(&waypoints, &PathConfig::default());
        assert_eq!(points[1].speed, -24.0);
        assert_eq!(points[2].speed, -24.0);
    }

    #[test]
    fn reversed_first_waypoint_starts_backwards() {
        let waypoints = vec![wp(0.0).reversed(), wp(3.0), wp(7.0)];
        let points = LinearGenerator.generate(&waypoints, &PathConfig::default());
        assert_eq!(points[1].speed, -24.0);
    }

    #[test]
    fn fewer_than_two_waypoints_is_empty() {
        assert!(LinearGenerator
            .generate(&[wp(1.0)], &PathConfig::default())
            .is_empty());
    }
}
