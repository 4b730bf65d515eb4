//! Per-axis collision resolution
//!
//! After integration, a moving object is tested against an obstacle once per
//! axis. Each test places the mover at its last position with exactly one axis
//! advanced to the current position. Every axis whose isolated motion ends in
//! overlap is reverted to its last value and loses its velocity component, so
//! diagonal contacts cancel motion component-wise rather than reflecting it.
//!
//! Axes are always tested in the order Z, X, Y. There is no iteration: deep or
//! fast overlaps may survive a single pass.

use crate::object::PhysicObject;
use setphys_math::{Axis, Bounds, Vec3};
use std::fmt;

/// Order in which axes are tested
pub const RESOLUTION_ORDER: [Axis; 3] = [Axis::Z, Axis::X, Axis::Y];

/// Set of axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AxisMask(u8);

impl AxisMask {
    pub const EMPTY: Self = Self(0);

    const fn bit(axis: Axis) -> u8 {
        1 << axis.index()
    }

    pub fn insert(&mut self, axis: Axis) {
        self.0 |= Self::bit(axis);
    }

    pub fn contains(&self, axis: Axis) -> bool {
        self.0 & Self::bit(axis) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Contained axes in X, Y, Z order
    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }
}

impl FromIterator<Axis> for AxisMask {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for axis in iter {
            mask.insert(axis);
        }
        mask
    }
}

impl fmt::Display for AxisMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, axis) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{axis}")?;
        }
        f.write_str("]")
    }
}

/// Outcome of resolving one mover against one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Position with every blocked axis reverted to its last value
    pub position: Vec3,
    /// Axes whose motion caused overlap
    pub blocked: AxisMask,
}

impl Correction {
    /// `velocity` with the blocked components zeroed
    pub fn constrain_velocity(&self, velocity: Vec3) -> Vec3 {
        self.blocked
            .iter()
            .fold(velocity, |v, axis| v.with(axis, 0.0))
    }
}

/// Core resolution on raw motion data.
///
/// `local_bounds` are the mover's bounds in its shape frame; `obstacle` is
/// the other object's world bounds.
pub fn resolve_motion(
    last: Vec3,
    current: Vec3,
    local_bounds: &Bounds,
    obstacle: &Bounds,
) -> Option<Correction> {
    let mut position = current;
    let mut blocked = AxisMask::EMPTY;

    for axis in RESOLUTION_ORDER {
        let candidate = last.with(axis, current.get(axis));
        if local_bounds.translated_to(candidate).intersects(obstacle) {
            position.set(axis, last.get(axis));
            blocked.insert(axis);
        }
    }

    if blocked.is_empty() {
        None
    } else {
        Some(Correction { position, blocked })
    }
}

/// Resolve `mover` against `obstacle`.
///
/// Pure: the caller applies the corrected position and velocity.
pub fn resolve(mover: &PhysicObject, obstacle: &PhysicObject) -> Option<Correction> {
    resolve_motion(
        mover.last_position(),
        mover.position(),
        &mover.local_bounds(),
        &obstacle.bounds(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn moved(from: Vec3, to: Vec3) -> PhysicObject {
        let mut obj = PhysicObject::new(Shape::cube(1.0), from);
        // integrate with a velocity that lands exactly on `to`
        obj.set_velocity(to - from);
        obj.integrate(1.0);
        obj
    }

    #[test]
    fn test_clear_motion_needs_no_correction() {
        let mover = moved(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let wall = PhysicObject::fixed(Shape::cube(1.0), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(resolve(&mover, &wall), None);
    }

    #[test]
    fn test_single_axis_is_reverted() {
        let mover = moved(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let floor = PhysicObject::fixed(Shape::cuboid(10.0, 1.0, 10.0), Vec3::new(0.0, -1.5, 0.0));

        let correction = resolve(&mover, &floor).expect("falling onto the floor collides");
        assert_eq!(correction.position, Vec3::ZERO);
        assert_eq!(correction.blocked, [Axis::Y].into_iter().collect::<AxisMask>());
    }

    #[test]
    fn test_diagonal_motion_cancels_only_blocked_axis() {
        let mover = moved(Vec3::ZERO, Vec3::new(2.0, 0.0, 3.0));
        let wall = PhysicObject::fixed(Shape::cube(1.0), Vec3::new(2.0, 0.0, 0.0));

        let correction = resolve(&mover, &wall).expect("x motion hits the wall");
        assert_eq!(correction.position, Vec3::new(0.0, 0.0, 3.0));
        assert!(correction.blocked.contains(Axis::X));
        assert_eq!(correction.blocked.len(), 1);

        let v = correction.constrain_velocity(Vec3::new(2.0, 0.0, 3.0));
        assert_eq!(v, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_overlap_at_last_position_blocks_every_axis() {
        let mover = moved(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        let block = PhysicObject::fixed(Shape::cuboid(3.0, 1.0, 3.0), Vec3::new(1.5, 0.0, 1.5));

        let correction = resolve(&mover, &block).expect("overlap");
        assert_eq!(correction.position, Vec3::ZERO);
        assert_eq!(correction.blocked.len(), 3);
    }

    #[test]
    fn test_diagonal_end_overlap_blocks_only_offending_axis() {
        // The final position overlaps, but the isolated Z move passes beside
        // the obstacle. Only X is reverted.
        let corner = Bounds::new(Vec3::new(0.8, -0.5, -0.5), Vec3::new(2.0, 0.5, 2.0));

        let correction = resolve_motion(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 1.0),
            &Shape::cube(1.0).local_bounds(),
            &corner,
        )
        .expect("x motion overlaps");
        assert!(correction.blocked.contains(Axis::X));
        assert!(!correction.blocked.contains(Axis::Y));
        assert!(!correction.blocked.contains(Axis::Z));
        assert_eq!(correction.position, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_static_mover_resolves_to_nothing_when_clear() {
        let a = PhysicObject::fixed(Shape::cube(1.0), Vec3::ZERO);
        let b = PhysicObject::fixed(Shape::cube(1.0), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(resolve(&a, &b), None);
    }

    #[test]
    fn test_axis_mask_display() {
        let mask: AxisMask = [Axis::Z, Axis::X].into_iter().collect();
        assert_eq!(mask.to_string(), "[x, z]");
        assert_eq!(AxisMask::EMPTY.to_string(), "[]");
    }
}
