//! User-authored waypoints with tangent handles

use super::point::Point;
use serde::{Deserialize, Serialize};

/// An authored anchor point with directional tangent handles.
///
/// Handle offsets are relative to the anchor position. The entry handle
/// shapes the curve arriving at this waypoint, the exit handle the curve
/// leaving it. A set `reverse` flag marks a direction change: the path is
/// cut at this waypoint and the following sub-path travels backwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Point,
    pub entry_handle: Point,
    pub exit_handle: Point,
    #[serde(default)]
    pub reverse: bool,
}

impl Waypoint {
    /// Create a waypoint with the given handle offsets, not reversed
    pub fn new(position: Point, entry_handle: Point, exit_handle: Point) -> Self {
        Waypoint {
            position,
            entry_handle,
            exit_handle,
            reverse: false,
        }
    }

    /// Mark this waypoint as a direction reversal
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Absolute position of the entry handle
    pub fn entry_point(&self) -> Point {
        self.position.add(self.entry_handle)
    }

    /// Absolute position of the exit handle
    pub fn exit_point(&self) -> Point {
        self.position.add(self.exit_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_points_are_anchor_relative() {
        let wp = Waypoint::new(
            Point::new(5.0, 5.0),
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.5),
        );
        assert_eq!(wp.entry_point(), Point::new(4.0, 5.0));
        assert_eq!(wp.exit_point(), Point::new(6.0, 5.5));
        assert!(!wp.reverse);
        assert!(wp.reversed().reverse);
    }
}
