pub mod world;
pub mod config;
pub mod storage;
pub mod events;

pub use self::world::PhysicsWorld;
pub use self::config::{WorldConfig, ParameterPolicy};
pub use self::storage::{BodyStorage, JointStorage, Handle, HandleStorage};
pub use self::events::{EventQueue, BodyEvent, BodyEventType, JointEvent, JointEventType};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for a joint in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct JointHandle(pub(crate) u32);

impl Handle for BodyHandle {
    fn from_raw(id: u32) -> Self {
        Self(id)
    }
}

impl Handle for JointHandle {
    fn from_raw(id: u32) -> Self {
        Self(id)
    }
}
