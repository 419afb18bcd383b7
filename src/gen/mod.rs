//! Trajectory generation pipeline with multiple algorithm implementations
//!
//! The pipeline runs, per sub-path: waypoint sectioning ([`segment`]),
//! curve evaluation ([`curve`]), arc-length resampling ([`sampler`],
//! [`lut`]) and kinematic profiling ([`profile`]). Sub-paths cut at
//! reversal waypoints are joined by [`stitch`].

pub mod bezier;
pub mod catmull_rom;
pub mod curve;
pub mod linear;
pub mod lut;
pub mod profile;
pub mod sampler;
pub mod segment;
pub mod stitch;

use crate::common::{PathAlgorithm, PathConfig, Point, Waypoint};
use serde::{Deserialize, Serialize};

/// A single sample of the generated trajectory.
///
/// Speed is signed: negative while the robot travels a reversed sub-path.
/// `curvature` is transient scratch state for the profiling stages and is
/// not part of the exchanged output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPoint {
    pub position: Point,
    /// Cumulative time of arrival, seconds from the path start
    pub time: f64,
    /// Signed speed at this sample
    pub speed: f64,
    /// Signed angular velocity at this sample
    pub angular_velocity: f64,
    #[serde(skip)]
    pub curvature: f64,
}

impl GeneratedPoint {
    /// Create a sample with zero time and angular velocity
    pub fn new(position: Point, speed: f64, curvature: f64) -> Self {
        GeneratedPoint {
            position,
            time: 0.0,
            speed,
            angular_velocity: 0.0,
            curvature,
        }
    }

    /// Euclidean distance to another sample
    pub fn distance(&self, other: &GeneratedPoint) -> f64 {
        self.position.distance(other.position)
    }
}

/// Trait for trajectory generation algorithms
pub trait PathGenerator: Send + Sync {
    /// Generate a trajectory from the given waypoints. Degenerate input
    /// (fewer waypoints than the algorithm requires) yields an empty
    /// sequence, never an error.
    fn generate(&self, waypoints: &[Waypoint], config: &PathConfig) -> Vec<GeneratedPoint>;

    /// Get the name of this generator
    fn name(&self) -> &str;
}

/// Create the generator for an algorithm family
pub fn generator_for(algorithm: PathAlgorithm) -> Box<dyn PathGenerator> {
    match algorithm {
        PathAlgorithm::CubicSpline => Box::new(bezier::CubicSplineGenerator),
        PathAlgorithm::CatmullRom => Box::new(catmull_rom::CatmullRomGenerator),
        PathAlgorithm::Linear => Box::new(linear::LinearGenerator),
    }
}

/// Generate a trajectory using the algorithm selected in `config`.
///
/// Fewer than 2 waypoints produce an empty sequence for every family.
pub fn generate_path(waypoints: &[Waypoint], config: &PathConfig) -> Vec<GeneratedPoint> {
    if waypoints.len() < 2 {
        log::debug!(
            "generate_path: {} waypoint(s), nothing to generate",
            waypoints.len()
        );
        return Vec::new();
    }

    generator_for(config.algorithm).generate(waypoints, config)
}
