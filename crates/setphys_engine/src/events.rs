//! Collision events reported by a simulation step

use crate::collision::{AxisMask, Correction};
use crate::object::ObjectHandle;
use setphys_math::Vec3;

/// A correction applied to one object during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Object whose motion was reverted
    pub mover: ObjectHandle,
    /// Object it ran into
    pub obstacle: ObjectHandle,
    /// Position assigned to the mover
    pub position: Vec3,
    /// Axes whose motion was cancelled
    pub blocked: AxisMask,
}

impl CollisionEvent {
    pub(crate) fn new(mover: ObjectHandle, obstacle: ObjectHandle, correction: &Correction) -> Self {
        Self {
            mover,
            obstacle,
            position: correction.position,
            blocked: correction.blocked,
        }
    }

    /// Whether either side of the event is `handle`
    pub fn involves(&self, handle: ObjectHandle) -> bool {
        self.mover == handle || self.obstacle == handle
    }
}

/// Collects the collision events of one step
#[derive(Debug, Default)]
pub struct EventCollector {
    /// Collision events this step
    pub collision_events: Vec<CollisionEvent>,
}

impl EventCollector {
    /// Create a new event collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all collected events
    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    pub fn push(&mut self, event: CollisionEvent) {
        self.collision_events.push(event);
    }

    /// Events in which `handle` was the corrected mover
    pub fn corrections_of(&self, handle: ObjectHandle) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter().filter(move |e| e.mover == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setphys_math::Axis;

    #[test]
    fn test_collector_filters_by_mover() {
        let correction = Correction {
            position: Vec3::ZERO,
            blocked: [Axis::Y].into_iter().collect(),
        };
        let mut events = EventCollector::new();
        events.push(CollisionEvent::new(ObjectHandle(1), ObjectHandle(0), &correction));
        events.push(CollisionEvent::new(ObjectHandle(2), ObjectHandle(1), &correction));

        assert_eq!(events.corrections_of(ObjectHandle(1)).count(), 1);
        assert!(events.collision_events[1].involves(ObjectHandle(1)));
        assert!(!events.collision_events[0].involves(ObjectHandle(2)));

        events.clear();
        assert!(events.collision_events.is_empty());
    }
}
