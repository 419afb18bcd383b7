//! Generation configuration and validation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The curve family used to generate the trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathAlgorithm {
    #[serde(rename = "cubic-spline")]
    CubicSpline,
    #[serde(rename = "catmull-rom")]
    CatmullRom,
    #[serde(rename = "linear")]
    Linear,
}

/// Configuration errors surfaced to the caller
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// Generation parameters supplied by the caller.
///
/// Validation is the caller's responsibility; the generators themselves do
/// not re-check these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    pub algorithm: PathAlgorithm,
    /// Maximum speed of the robot, in field units per second
    pub max_velocity: f64,
    /// Maximum acceleration, in field units per second squared
    pub max_acceleration: f64,
    /// Cornering constant: speed through turns is capped at |k / curvature|
    #[serde(rename = "k")]
    pub cornering_k: f64,
    /// Target spatial spacing between generated points
    pub spacing: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            algorithm: PathAlgorithm::CubicSpline,
            max_velocity: 24.0,
            max_acceleration: 12.0,
            cornering_k: 3.0,
            spacing: 0.5,
        }
    }
}

impl PathConfig {
    /// Check that all numeric parameters are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_velocity", self.max_velocity),
            ("max_acceleration", self.max_acceleration),
            ("k", self.cornering_k),
            ("spacing", self.spacing),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Update numeric parameters from a key/value map. Unknown keys are
    /// ignored; known keys must be positive.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), ConfigError> {
        if let Some(&v) = params.get("max_velocity") {
            if v <= 0.0 {
                return Err(ConfigError::NonPositive {
                    name: "max_velocity",
                    value: v,
                });
            }
            self.max_velocity = v;
        }

        if let Some(&v) = params.get("max_acceleration") {
            if v <= 0.0 {
                return Err(ConfigError::NonPositive {
                    name: "max_acceleration",
                    value: v,
                });
            }
            self.max_acceleration = v;
        }

        if let Some(&v) = params.get("k") {
            if v <= 0.0 {
                return Err(ConfigError::NonPositive { name: "k", value: v });
            }
            self.cornering_k = v;
        }

        if let Some(&v) = params.get("spacing") {
            if v <= 0.0 {
                return Err(ConfigError::NonPositive {
                    name: "spacing",
                    value: v,
                });
            }
            self.spacing = v;
        }

        Ok(())
    }
}
