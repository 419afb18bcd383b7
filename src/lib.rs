//! Trajectory generation core for a differential-drive robot path planner.
//!
//! Converts an ordered sequence of user-authored waypoints (anchor position,
//! entry/exit tangent handles, optional direction-reversal flag) into a
//! time-parameterized motion profile: positions at roughly uniform spatial
//! spacing, each with cumulative time, signed speed and angular velocity.
//!
//! Generation is a pure synchronous function of (waypoints, configuration):
//! no caching, no shared state, no I/O. Callers re-invoke [`generate_path`]
//! whenever waypoints or configuration change.

pub mod common;
pub mod gen;
pub mod io;

pub use common::{ConfigError, PathAlgorithm, PathConfig, Point, Waypoint};
pub use gen::{generate_path, GeneratedPoint, PathGenerator};
