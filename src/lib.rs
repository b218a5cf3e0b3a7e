pub mod math;
pub mod core;
pub mod bodies;
pub mod joints;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, WorldConfig, ParameterPolicy, BodyHandle, JointHandle};
pub use crate::bodies::{RigidBody, RigidBodyType};
pub use crate::joints::{
    Joint, JointDef, JointDefinition, JointKind, PrismaticJointDef, RevoluteJointDef, WheelJointDef,
};
pub use crate::math::Vector2;

/// Error types for joint definitions and the joint factory
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        /// The caller passed something unusable: a missing body, the same body
        /// twice, or a parameter the world configuration rejects
        #[error("Invalid argument: {0}")]
        InvalidArgument(String),

        /// A definition was used before it was complete
        #[error("Inconsistent state: {0}")]
        InconsistentState(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
