#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How the joint factory treats parameters that must be non-negative
/// (spring frequency, damping ratio, motor torque/force).
///
/// Definition setters always store values verbatim; the policy is applied only
/// when a definition is turned into a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ParameterPolicy {
    /// Pass values through unchanged
    #[default]
    Permissive,

    /// Clamp negative values to zero
    Clamp,

    /// Refuse to create the joint
    Reject,
}

/// Configuration for joint creation in a [`PhysicsWorld`](crate::PhysicsWorld)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Treatment of negative spring/motor parameters
    pub parameter_policy: ParameterPolicy,

    /// Normalize joint axes to unit length when creating joints
    pub normalize_axes: bool,
}

impl WorldConfig {
    /// A configuration that rejects negative parameters and normalizes axes
    pub fn strict() -> Self {
        Self {
            parameter_policy: ParameterPolicy::Reject,
            normalize_axes: true,
        }
    }
}
