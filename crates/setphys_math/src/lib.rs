//! # setphys_math - Geometry primitives
//!
//! Double-precision vectors and axis-aligned bounding boxes used by the
//! simulation crates.

pub mod vector;
pub mod bounds;

pub use vector::*;
pub use bounds::*;

pub mod prelude {
    pub use crate::vector::{Axis, Vec3};
    pub use crate::bounds::Bounds;
}
