//! World configuration

use crate::error::{PhysicsError, Result};
use serde::{Deserialize, Serialize};
use setphys_math::Vec3;

/// World configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square ground footprint on X and Z
    pub ground_size: f64,

    /// Ground thickness along Y
    pub ground_thickness: f64,

    /// Y coordinate of the ground's center (top face at y = 0 by default)
    pub ground_center_y: f64,

    /// Gravity enabled at construction, if any
    pub gravity: Option<[f64; 3]>,

    /// Step length used by `World::advance`, in milliseconds
    pub fixed_timestep_ms: u32,

    /// Maximum number of steps `World::advance` runs per call
    pub max_substeps: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_size: 15.0,
            ground_thickness: 2.0,
            ground_center_y: -1.0,
            gravity: None,
            fixed_timestep_ms: 16,
            max_substeps: 4,
        }
    }
}

impl WorldConfig {
    /// Set the ground footprint
    pub fn with_ground_size(mut self, size: f64) -> Self {
        self.ground_size = size;
        self
    }

    /// Set gravity
    pub fn with_gravity(mut self, x: f64, y: f64, z: f64) -> Self {
        self.gravity = Some([x, y, z]);
        self
    }

    /// Set the fixed timestep
    pub fn with_fixed_timestep_ms(mut self, timestep_ms: u32) -> Self {
        self.fixed_timestep_ms = timestep_ms;
        self
    }

    /// Set the substep cap
    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    pub fn gravity_vector(&self) -> Option<Vec3> {
        self.gravity.map(Vec3::from)
    }

    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> Result<()> {
        if !(self.ground_size.is_finite() && self.ground_size > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_size must be finite and positive, got {}",
                self.ground_size
            )));
        }
        if !(self.ground_thickness.is_finite() && self.ground_thickness > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_thickness must be finite and positive, got {}",
                self.ground_thickness
            )));
        }
        if !self.ground_center_y.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_center_y must be finite, got {}",
                self.ground_center_y
            )));
        }
        if let Some(gravity) = self.gravity_vector() {
            if !gravity.is_finite() {
                return Err(PhysicsError::InvalidConfig(format!(
                    "gravity must be finite, got {gravity}"
                )));
            }
        }
        if self.fixed_timestep_ms == 0 {
            return Err(PhysicsError::InvalidConfig(
                "fixed_timestep_ms must be at least 1".to_string(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidConfig(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WorldConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.gravity_vector(), None);
    }

    #[test]
    fn test_rejects_bad_ground() {
        let err = WorldConfig::default().with_ground_size(-1.0).validate();
        assert!(matches!(err, Err(PhysicsError::InvalidConfig(_))));

        let err = WorldConfig::default().with_ground_size(f64::INFINITY).validate();
        assert!(matches!(err, Err(PhysicsError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_timestep_and_substeps() {
        assert!(WorldConfig::default().with_fixed_timestep_ms(0).validate().is_err());
        assert!(WorldConfig::default().with_max_substeps(0).validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_gravity() {
        let config = WorldConfig::default().with_gravity(0.0, f64::NAN, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: WorldConfig =
            serde_json::from_str(r#"{ "ground_size": 20.0, "gravity": [0.0, -9.81, 0.0] }"#)
                .expect("valid config json");
        assert_eq!(config.ground_size, 20.0);
        assert_eq!(config.ground_thickness, 2.0);
        assert_eq!(config.gravity_vector(), Some(Vec3::new(0.0, -9.81, 0.0)));
        assert_eq!(config.max_substeps, 4);
    }
}
