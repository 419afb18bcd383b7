//! Common types shared across the generation pipeline

pub mod config;
pub mod point;
pub mod waypoint;

pub use config::{ConfigError, PathAlgorithm, PathConfig};
pub use point::Point;
pub use waypoint::Waypoint;
