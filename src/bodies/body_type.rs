#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type of rigid body, determining how it is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RigidBodyType {
    /// Dynamic bodies respond to forces and joints
    #[default]
    Dynamic,

    /// Kinematic bodies are moved programmatically by velocity
    Kinematic,

    /// Static bodies never move
    Static,
}
