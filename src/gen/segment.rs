//! Waypoint sectioning: reversal splitting and cubic control-point grouping

use crate::common::{Point, Waypoint};

/// Split a waypoint list into independent sub-paths at reverse-flagged
/// interior waypoints.
///
/// A flagged waypoint ends the running sub-path and starts the next one, so
/// no curve smoothing spans the cusp. Its entry handle finishes the old
/// sub-path; its exit handle belongs to the new one (see
/// [`control_points`]). Flags on the last waypoint do not split; the flag on
/// the first waypoint only sets the initial travel direction.
pub fn split_at_reversals(waypoints: &[Waypoint]) -> Vec<Vec<Waypoint>> {
    if waypoints.len() < 2 {
        return Vec::new();
    }

    let mut sub_paths = Vec::new();
    let mut current = vec![waypoints[0]];

    for wp in &waypoints[1..waypoints.len() - 1] {
        current.push(*wp);
        if wp.reverse {
            sub_paths.push(std::mem::replace(&mut current, vec![*wp]));
        }
    }

    current.push(waypoints[waypoints.len() - 1]);
    sub_paths.push(current);
    sub_paths
}

/// Flatten one sub-path into a Bezier control polyline:
/// anchor, exit handle, entry handle, anchor, exit handle, ...
///
/// The result has 3n - 2 points for n waypoints, grouped into cubic
/// segments by [`section`].
pub fn control_points(sub_path: &[Waypoint]) -> Vec<Point> {
    if sub_path.len() < 2 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(sub_path.len() * 3 - 2);
    points.push(sub_path[0].position);
    points.push(sub_path[0].exit_point());

    for wp in &sub_path[1..sub_path.len() - 1] {
        points.push(wp.entry_point());
        points.push(wp.position);
        points.push(wp.exit_point());
    }

    let last = &sub_path[sub_path.len() - 1];
    points.push(last.entry_point());
    points.push(last.position);
    points
}

/// Group a control polyline into cubic control-point groups
/// {anchor, exit handle, next entry handle, next anchor}, consecutive
/// groups sharing their anchor.
pub fn section(points: &[Point]) -> Vec<[Point; 4]> {
    let mut groups = Vec::new();
    let mut i = 3;
    while i < points.len() {
        groups.push([points[i - 3], points[i - 2], points[i - 1], points[i]]);
        i += 3;
    }
    groups
}
