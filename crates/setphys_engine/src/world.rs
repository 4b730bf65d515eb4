//! Physics world - main simulation container

use crate::collision;
use crate::config::WorldConfig;
use crate::error::{PhysicsError, Result};
use crate::events::{CollisionEvent, EventCollector};
use crate::object::{ForceSlot, ObjectHandle, PhysicObject};
use crate::shape::Shape;
use setphys_math::Vec3;

/// The simulation space: an ordered set of objects plus optional gravity.
///
/// A world always starts with one static ground box, inserted first. Its
/// footprint is `ground_size` on X and Z, and it is `ground_thickness` tall,
/// centered at `ground_center_y`. With the default configuration that is a
/// 15x15 slab whose top face is y = 0.
///
/// Insertion order matters: during [`step`](Self::step) each object is
/// checked only against the objects inserted before it.
pub struct World {
    /// Configuration
    config: WorldConfig,

    /// Objects in insertion order
    objects: Vec<(ObjectHandle, PhysicObject)>,

    /// Gravity, present only while enabled
    gravity: Option<Vec3>,

    /// Handle of the implicit ground object
    ground: ObjectHandle,

    /// Next handle id to issue
    next_handle: u64,

    /// Milliseconds not yet consumed by `advance`
    accumulated_ms: i64,

    /// Corrections applied during the last step
    events: EventCollector,
}

impl World {
    /// Create a world with the default configuration
    pub fn new() -> Self {
        Self::build(WorldConfig::default())
    }

    /// Create a world whose ground footprint is `size` x `size`
    pub fn with_ground_size(size: f64) -> Result<Self> {
        Self::with_config(WorldConfig::default().with_ground_size(size))
    }

    /// Create a world from a validated configuration
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WorldConfig) -> Self {
        let ground = PhysicObject::fixed(
            Shape::cuboid(config.ground_size, config.ground_thickness, config.ground_size),
            Vec3::new(0.0, config.ground_center_y, 0.0),
        );
        let gravity = config.gravity_vector();

        let mut world = Self {
            config,
            objects: Vec::new(),
            gravity: None,
            ground: ObjectHandle(0),
            next_handle: 0,
            accumulated_ms: 0,
            events: EventCollector::new(),
        };
        world.ground = world.add_object(ground);

        if let Some(gravity) = gravity {
            world.enable_gravity(gravity);
        }
        world
    }

    /// Get the world configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Handle of the ground object created with the world
    pub fn ground(&self) -> ObjectHandle {
        self.ground
    }

    // ==================== Objects ====================

    /// Append an object. It receives gravity right away if gravity is enabled.
    pub fn add_object(&mut self, mut object: PhysicObject) -> ObjectHandle {
        let handle = ObjectHandle(self.next_handle);
        self.next_handle += 1;

        if let Some(gravity) = self.gravity {
            object.add_force(gravity, ForceSlot::GRAVITY);
        }
        log::debug!(
            "Added object {} ({}) at {}",
            handle,
            if object.is_dynamic() { "dynamic" } else { "static" },
            object.position()
        );
        self.objects.push((handle, object));
        handle
    }

    /// Remove an object, returning it. Unknown handles are ignored.
    pub fn remove_object(&mut self, handle: ObjectHandle) -> Option<PhysicObject> {
        let index = self.index_of(handle)?;
        let (_, object) = self.objects.remove(index);
        log::debug!("Removed object {}", handle);
        Some(object)
    }

    /// Whether `handle` refers to an object in this world
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.index_of(handle).is_some()
    }

    /// Position of `handle` in the processing order
    pub fn index_of(&self, handle: ObjectHandle) -> Option<usize> {
        self.objects.iter().position(|(h, _)| *h == handle)
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&PhysicObject> {
        self.objects.iter().find(|(h, _)| *h == handle).map(|(_, o)| o)
    }

    pub fn object_mut(&mut self, handle: ObjectHandle) -> Option<&mut PhysicObject> {
        self.objects.iter_mut().find(|(h, _)| *h == handle).map(|(_, o)| o)
    }

    /// Objects in processing order
    pub fn objects(&self) -> impl ExactSizeIterator<Item = (ObjectHandle, &PhysicObject)> {
        self.objects.iter().map(|(h, o)| (*h, o))
    }

    /// Handles in processing order
    pub fn handles(&self) -> impl ExactSizeIterator<Item = ObjectHandle> + '_ {
        self.objects.iter().map(|(h, _)| *h)
    }

    /// Number of objects, ground included
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn get(&self, handle: ObjectHandle) -> Result<&PhysicObject> {
        self.object(handle).ok_or(PhysicsError::ObjectNotFound(handle))
    }

    fn get_mut(&mut self, handle: ObjectHandle) -> Result<&mut PhysicObject> {
        self.object_mut(handle).ok_or(PhysicsError::ObjectNotFound(handle))
    }

    /// Get object position
    pub fn position(&self, handle: ObjectHandle) -> Result<Vec3> {
        self.get(handle).map(PhysicObject::position)
    }

    /// Teleport an object
    pub fn set_position(&mut self, handle: ObjectHandle, position: Vec3) -> Result<()> {
        self.get_mut(handle).map(|o| o.set_position(position))
    }

    /// Get object velocity
    pub fn velocity(&self, handle: ObjectHandle) -> Result<Vec3> {
        self.get(handle).map(PhysicObject::velocity)
    }

    /// Set object velocity
    pub fn set_velocity(&mut self, handle: ObjectHandle, velocity: Vec3) -> Result<()> {
        self.get_mut(handle).map(|o| o.set_velocity(velocity))
    }

    /// Store a force on an object. The gravity slot is refused.
    pub fn add_force(&mut self, handle: ObjectHandle, slot: ForceSlot, force: Vec3) -> Result<()> {
        if slot.is_reserved() {
            return Err(PhysicsError::ReservedForceSlot(slot));
        }
        self.get_mut(handle).map(|o| o.add_force(force, slot))
    }

    /// Remove a force from an object. The gravity slot is refused.
    pub fn remove_force(&mut self, handle: ObjectHandle, slot: ForceSlot) -> Result<Option<Vec3>> {
        if slot.is_reserved() {
            return Err(PhysicsError::ReservedForceSlot(slot));
        }
        self.get_mut(handle).map(|o| o.remove_force(slot))
    }

    // ==================== Gravity ====================

    /// Apply `gravity` to every object. Does nothing if gravity is already
    /// enabled, even with a different vector.
    pub fn enable_gravity(&mut self, gravity: Vec3) {
        if let Some(current) = self.gravity {
            log::debug!("Gravity already enabled ({}), ignoring {}", current, gravity);
            return;
        }
        for (_, object) in &mut self.objects {
            object.add_force(gravity, ForceSlot::GRAVITY);
        }
        self.gravity = Some(gravity);
        log::debug!("Enabled gravity {} on {} objects", gravity, self.objects.len());
    }

    /// Remove gravity from every object. Does nothing if already disabled.
    pub fn disable_gravity(&mut self) {
        if self.gravity.take().is_none() {
            return;
        }
        for (_, object) in &mut self.objects {
            object.remove_force(ForceSlot::GRAVITY);
        }
        log::debug!("Disabled gravity on {} objects", self.objects.len());
    }

    /// Get gravity
    pub fn gravity(&self) -> Option<Vec3> {
        self.gravity
    }

    pub fn is_gravity_enabled(&self) -> bool {
        self.gravity.is_some()
    }

    // ==================== Simulation ====================

    /// Advance the simulation by `elapsed_millis` milliseconds.
    ///
    /// Objects are processed in insertion order: each is integrated, then
    /// resolved against every object before it. Corrections are visible to
    /// the objects processed after it in the same step. Negative durations
    /// are passed through to integration unchanged.
    pub fn step(&mut self, elapsed_millis: i64) {
        let dt = elapsed_millis as f64 / 1000.0;
        self.events.clear();

        for index in 0..self.objects.len() {
            self.objects[index].1.integrate(dt);
            handle_collisions(&mut self.objects, index, &mut self.events);
        }
    }

    /// Run fixed-length steps for the time elapsed since the last call.
    ///
    /// Returns the number of steps run. At most `max_substeps` run per call;
    /// any backlog left after that is dropped, keeping only the part shorter
    /// than one step.
    pub fn advance(&mut self, elapsed_millis: i64) -> u32 {
        let timestep = i64::from(self.config.fixed_timestep_ms);
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_millis);

        let mut steps = 0;
        while self.accumulated_ms >= timestep && steps < self.config.max_substeps {
            self.step(timestep);
            self.accumulated_ms -= timestep;
            steps += 1;
        }

        if self.accumulated_ms >= timestep {
            log::warn!(
                "Simulation fell behind: dropping {} ms after {} steps",
                self.accumulated_ms - self.accumulated_ms % timestep,
                steps
            );
            self.accumulated_ms %= timestep;
        }
        steps
    }

    /// Milliseconds buffered by `advance` but not yet simulated
    pub fn pending_ms(&self) -> i64 {
        self.accumulated_ms
    }

    // ==================== Events ====================

    /// Corrections applied during the most recent step
    pub fn collision_events(&self) -> &[CollisionEvent] {
        &self.events.collision_events
    }

    /// Corrections applied to `handle` during the most recent step
    pub fn corrections_of(&self, handle: ObjectHandle) -> impl Iterator<Item = &CollisionEvent> {
        self.events.corrections_of(handle)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the object at `index` against every earlier object.
///
/// For each pair both sides are resolved before either correction is
/// applied, so neither sees the other's correction.
fn handle_collisions(
    objects: &mut [(ObjectHandle, PhysicObject)],
    index: usize,
    events: &mut EventCollector,
) {
    let (earlier, rest) = objects.split_at_mut(index);
    let Some((handle, object)) = rest.first_mut() else {
        return;
    };

    for (other_handle, other) in earlier.iter_mut() {
        let own = if object.is_dynamic() {
            collision::resolve(object, other)
        } else {
            None
        };
        let theirs = if other.is_dynamic() {
            collision::resolve(other, object)
        } else {
            None
        };

        if let Some(correction) = own {
            apply(object, &correction);
            log::trace!("Corrected {} against {}: blocked {}", handle, other_handle, correction.blocked);
            events.push(CollisionEvent::new(*handle, *other_handle, &correction));
        }
        if let Some(correction) = theirs {
            apply(other, &correction);
            log::trace!("Corrected {} against {}: blocked {}", other_handle, handle, correction.blocked);
            events.push(CollisionEvent::new(*other_handle, *handle, &correction));
        }
    }
}

fn apply(object: &mut PhysicObject, correction: &collision::Correction) {
    object.apply_correction(correction.position);
    object.set_velocity(correction.constrain_velocity(object.velocity()));
}
