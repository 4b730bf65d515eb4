//! Collision shapes

use serde::{Deserialize, Serialize};
use setphys_math::{Bounds, Vec3};

/// Geometric volume of a physic object.
///
/// Shapes are described in their own local frame, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Box with full side lengths along X, Y and Z
    Cuboid {
        width: f64,
        height: f64,
        depth: f64,
    },
    /// Sphere with radius
    Sphere {
        radius: f64,
    },
}

impl Default for Shape {
    fn default() -> Self {
        Self::Cuboid {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

impl Shape {
    /// Create a box shape from full size
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Self::Cuboid { width, height, depth }
    }

    /// Create a cube with equal sides
    pub fn cube(side: f64) -> Self {
        Self::cuboid(side, side, side)
    }

    /// Create a sphere shape
    pub fn sphere(radius: f64) -> Self {
        Self::Sphere { radius }
    }

    /// Full extents of the shape along each axis
    pub fn size(&self) -> Vec3 {
        match *self {
            Self::Cuboid { width, height, depth } => Vec3::new(width, height, depth),
            Self::Sphere { radius } => Vec3::splat(radius * 2.0),
        }
    }

    /// Bounding box in the shape's local frame
    pub fn local_bounds(&self) -> Bounds {
        Bounds::from_size(self.size())
    }

    /// True when every extent is finite and strictly positive
    pub fn is_valid(&self) -> bool {
        let size = self.size();
        size.is_finite() && size.x > 0.0 && size.y > 0.0 && size.z > 0.0
    }
}
