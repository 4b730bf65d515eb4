//! Physic objects: motion state, slotted forces and integration

use crate::shape::Shape;
use serde::{Deserialize, Serialize};
use setphys_math::{Bounds, Vec3};
use std::collections::BTreeMap;
use std::fmt;

/// Handle to an object owned by a [`World`](crate::world::World).
///
/// Handles are issued on insertion and never reused by the same world, so two
/// objects with identical state are still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub(crate) u64);

impl ObjectHandle {
    /// Get the raw id
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag under which a force is stored on an object.
///
/// Slot 0 ([`ForceSlot::GRAVITY`]) belongs to the world's gravity. Do not
/// reuse it for other forces; the world-level force API rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ForceSlot(pub u32);

impl ForceSlot {
    /// Reserved slot for world gravity
    pub const GRAVITY: Self = Self(0);

    /// Whether this is the gravity slot
    pub fn is_reserved(&self) -> bool {
        *self == Self::GRAVITY
    }
}

impl fmt::Display for ForceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A simulated body: shape, motion state and accumulated forces.
///
/// Forces act as accelerations; the object has unit mass.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicObject {
    shape: Shape,
    position: Vec3,
    last_position: Vec3,
    velocity: Vec3,
    dynamic: bool,
    forces: BTreeMap<ForceSlot, Vec3>,
}

impl PhysicObject {
    /// Create a dynamic object at rest
    pub fn new(shape: Shape, position: Vec3) -> Self {
        Self {
            shape,
            position,
            last_position: position,
            velocity: Vec3::ZERO,
            dynamic: true,
            forces: BTreeMap::new(),
        }
    }

    /// Create a static object
    pub fn fixed(shape: Shape, position: Vec3) -> Self {
        Self::new(shape, position).with_dynamic(false)
    }

    /// Set initial velocity
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set whether the object moves
    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the object. Also resets the last position, so the move is not
    /// seen as motion by the next collision pass.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.last_position = position;
    }

    /// Position before the most recent integration
    pub fn last_position(&self) -> Vec3 {
        self.last_position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    /// Store `force` under `slot`, replacing any previous force there
    pub fn add_force(&mut self, force: Vec3, slot: ForceSlot) {
        self.forces.insert(slot, force);
    }

    /// Remove and return the force stored under `slot`
    pub fn remove_force(&mut self, slot: ForceSlot) -> Option<Vec3> {
        self.forces.remove(&slot)
    }

    /// Force stored under `slot`
    pub fn force(&self, slot: ForceSlot) -> Option<Vec3> {
        self.forces.get(&slot).copied()
    }

    /// Sum of all stored forces
    pub fn net_force(&self) -> Vec3 {
        self.forces.values().sum()
    }

    /// Iterate over stored forces in slot order
    pub fn forces(&self) -> impl Iterator<Item = (ForceSlot, Vec3)> + '_ {
        self.forces.iter().map(|(slot, force)| (*slot, *force))
    }

    /// Bounding box in the shape's local frame
    pub fn local_bounds(&self) -> Bounds {
        self.shape.local_bounds()
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Bounds {
        self.local_bounds().translated_to(self.position)
    }

    /// Advance motion by `dt` seconds with semi-implicit Euler.
    ///
    /// The current position is always recorded as the last position first.
    /// Static objects stop there.
    pub fn integrate(&mut self, dt: f64) {
        self.last_position = self.position;
        if !self.dynamic {
            return;
        }
        self.velocity += self.net_force() * dt;
        self.position += self.velocity * dt;
    }

    /// Write a collision-corrected position back.
    ///
    /// Unlike [`set_position`](Self::set_position) this keeps the last
    /// position, which later pairs in the same step still resolve against.
    pub(crate) fn apply_correction(&mut self, position: Vec3) {
        self.position = position;
    }
}
