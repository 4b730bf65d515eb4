//! Error types for the physics system

use crate::object::{ForceSlot, ObjectHandle};
use thiserror::Error;

/// Physics system errors
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    /// Object not found in the world
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectHandle),

    /// Invalid configuration
    #[error("Invalid physics configuration: {0}")]
    InvalidConfig(String),

    /// Force slot reserved for gravity
    #[error("Force {0} is reserved for gravity")]
    ReservedForceSlot(ForceSlot),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
