//! SetPhysics Engine - discrete-step rigid-body simulation
//!
//! This crate advances a set of axis-aligned objects under optional uniform
//! gravity and resolves their collisions by reverting motion axis by axis.
//!
//! # Features
//!
//! - Dynamic and static objects with slotted forces
//! - World-wide gravity with idempotent enable/disable
//! - Per-axis collision correction against every earlier object
//! - Fixed-timestep driver with a substep cap
//! - Collision events for the last step
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    World                      │
//! │  ┌──────────────┐  ┌─────────┐  ┌──────────┐ │
//! │  │ ordered objs │  │ gravity │  │  events  │ │
//! │  └──────────────┘  └─────────┘  └──────────┘ │
//! │  ┌──────────────────────────────────────────┐ │
//! │  │ step: integrate i, resolve i vs 0..i     │ │
//! │  └──────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────┘
//!                        │
//!          ┌─────────────┼─────────────┐
//!          ▼             ▼             ▼
//!    ┌────────────┐ ┌─────────┐ ┌───────────┐
//!    │PhysicObject│ │  Shape  │ │ collision │
//!    └────────────┘ └─────────┘ └───────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use setphys_engine::prelude::*;
//!
//! // The world starts with a static ground slab whose top face is y = 0
//! let mut world = World::new();
//! world.enable_gravity(Vec3::new(0.0, -9.81, 0.0));
//!
//! let crate_box = world.add_object(PhysicObject::new(Shape::cube(1.0), Vec3::new(0.0, 5.0, 0.0)));
//!
//! for _ in 0..120 {
//!     world.step(16);
//! }
//!
//! let y = world.position(crate_box).unwrap().y;
//! assert!(y > 0.0 && y < 5.0);
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod events;
pub mod object;
pub mod shape;
pub mod world;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::collision::{resolve, AxisMask, Correction};
    pub use crate::config::WorldConfig;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::events::CollisionEvent;
    pub use crate::object::{ForceSlot, ObjectHandle, PhysicObject};
    pub use crate::shape::Shape;
    pub use crate::world::World;
    pub use setphys_math::{Axis, Bounds, Vec3};
}

pub use prelude::*;
