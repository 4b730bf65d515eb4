//! Axis-aligned bounding boxes

use crate::vector::{Axis, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box of the given full size centered on the origin
    #[inline]
    pub fn from_size(size: Vec3) -> Self {
        Self::from_center_half_extents(Vec3::ZERO, size * 0.5)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if the bounds are valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Shift by `offset`
    #[inline]
    pub fn translate(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Move so that the center lands on `position`.
    ///
    /// Shape-local bounds are centered on the origin, so this places them
    /// at an object's world position.
    #[inline]
    pub fn translated_to(&self, position: Vec3) -> Self {
        self.translate(position - self.center())
    }

    /// Check if a point is inside (faces included)
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if two boxes share a volume of positive size.
    ///
    /// Faces that merely touch do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        Axis::ALL.iter().all(|&axis| self.overlaps_on(other, axis))
    }

    /// Strict interval overlap along one axis
    #[inline]
    pub fn overlaps_on(&self, other: &Bounds, axis: Axis) -> bool {
        self.min.get(axis) < other.max.get(axis) && self.max.get(axis) > other.min.get(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_point() {
        let b = Bounds::new(Vec3::ZERO, Vec3::ONE);
        assert!(b.contains_point(Vec3::new(0.5, 0.5, 0.5)));
        assert!(b.contains_point(Vec3::ONE));
        assert!(!b.contains_point(Vec3::new(1.5, 0.5, 0.5)));
    }

    #[test]
    fn test_bounds_intersects() {
        let a = Bounds::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 1.5, 1.5));
        let c = Bounds::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_faces_do_not_intersect() {
        let a = Bounds::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_overlap_needs_every_axis() {
        let a = Bounds::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::new(Vec3::new(0.5, 0.5, 4.0), Vec3::new(1.5, 1.5, 5.0));
        assert!(a.overlaps_on(&b, Axis::X));
        assert!(a.overlaps_on(&b, Axis::Y));
        assert!(!a.overlaps_on(&b, Axis::Z));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_translated_to_recenters() {
        let local = Bounds::from_size(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(local.center(), Vec3::ZERO);

        let world = local.translated_to(Vec3::new(10.0, 0.0, -1.0));
        assert_eq!(world.center(), Vec3::new(10.0, 0.0, -1.0));
        assert_eq!(world.min, Vec3::new(9.0, -2.0, -4.0));
        assert_eq!(world.max, Vec3::new(11.0, 2.0, 2.0));
        assert_eq!(world.size(), local.size());
    }
}
