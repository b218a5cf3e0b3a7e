use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage};
use crate::error::PhysicsError;
use crate::joints::{PrismaticJointDef, RevoluteJointDef, WheelJointDef};
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The closed set of joint shapes a definition can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum JointKind {
    /// Suspension joint: translation along an axis plus free rotation
    Wheel,

    /// Hinge: shared anchor, free rotation
    Revolute,

    /// Slider: translation along an axis, no relative rotation
    Prismatic,
}

impl JointKind {
    pub fn name(&self) -> &'static str {
        match self {
            JointKind::Wheel => "Wheel",
            JointKind::Revolute => "Revolute",
            JointKind::Prismatic => "Prismatic",
        }
    }
}

/// Fields every joint definition carries regardless of its kind
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct JointBase {
    /// The first attached body, if set
    pub(crate) body_a: Option<BodyHandle>,

    /// The second attached body, if set
    pub(crate) body_b: Option<BodyHandle>,

    /// Whether the two attached bodies should still collide with each other
    pub(crate) collide_connected: bool,

    /// Opaque value for the application
    pub(crate) user_data: u128,
}

/// Accessors shared by every joint definition.
pub trait JointDefinition {
    /// Which joint shape this definition describes
    fn kind(&self) -> JointKind;

    fn base(&self) -> &JointBase;

    fn base_mut(&mut self) -> &mut JointBase;

    /// The first attached body, or `None` if never set
    fn body_a(&self) -> Option<BodyHandle> {
        self.base().body_a
    }

    /// The second attached body, or `None` if never set
    fn body_b(&self) -> Option<BodyHandle> {
        self.base().body_b
    }

    /// Sets the bodies directly, without touching anchors, axis, or reference angle.
    ///
    /// No checks happen here; the joint factory rejects unset or identical bodies.
    fn set_bodies(&mut self, body_a: BodyHandle, body_b: BodyHandle) {
        let base = self.base_mut();
        base.body_a = Some(body_a);
        base.body_b = Some(body_b);
    }

    /// Checks if the definition attaches a specific body
    fn involves_body(&self, body: BodyHandle) -> bool {
        self.body_a() == Some(body) || self.body_b() == Some(body)
    }

    fn collide_connected(&self) -> bool {
        self.base().collide_connected
    }

    fn set_collide_connected(&mut self, flag: bool) {
        self.base_mut().collide_connected = flag;
    }

    fn user_data(&self) -> u128 {
        self.base().user_data
    }

    fn set_user_data(&mut self, data: u128) {
        self.base_mut().user_data = data;
    }
}

/// A joint definition of any kind, ready to be handed to the joint factory
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum JointDef {
    Wheel(WheelJointDef),
    Revolute(RevoluteJointDef),
    Prismatic(PrismaticJointDef),
}

impl JointDef {
    /// The anchor on body A in its local frame
    pub fn local_anchor_a(&self) -> Vector2 {
        match self {
            JointDef::Wheel(def) => def.get_local_anchor_a(),
            JointDef::Revolute(def) => def.get_local_anchor_a(),
            JointDef::Prismatic(def) => def.get_local_anchor_a(),
        }
    }

    /// The anchor on body B in its local frame
    pub fn local_anchor_b(&self) -> Vector2 {
        match self {
            JointDef::Wheel(def) => def.get_local_anchor_b(),
            JointDef::Revolute(def) => def.get_local_anchor_b(),
            JointDef::Prismatic(def) => def.get_local_anchor_b(),
        }
    }

    /// The translation axis in body A's frame, for kinds that have one
    pub fn local_axis_a(&self) -> Option<Vector2> {
        match self {
            JointDef::Wheel(def) => Some(def.get_local_axis_a()),
            JointDef::Revolute(_) => None,
            JointDef::Prismatic(def) => Some(def.get_local_axis_a()),
        }
    }

    pub fn reference_angle(&self) -> f32 {
        match self {
            JointDef::Wheel(def) => def.get_reference_angle(),
            JointDef::Revolute(def) => def.get_reference_angle(),
            JointDef::Prismatic(def) => def.get_reference_angle(),
        }
    }

    pub fn as_wheel(&self) -> Option<&WheelJointDef> {
        match self {
            JointDef::Wheel(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_revolute(&self) -> Option<&RevoluteJointDef> {
        match self {
            JointDef::Revolute(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_prismatic(&self) -> Option<&PrismaticJointDef> {
        match self {
            JointDef::Prismatic(def) => Some(def),
            _ => None,
        }
    }

    pub(crate) fn as_wheel_mut(&mut self) -> Option<&mut WheelJointDef> {
        match self {
            JointDef::Wheel(def) => Some(def),
            _ => None,
        }
    }
}

impl JointDefinition for JointDef {
    fn kind(&self) -> JointKind {
        match self {
            JointDef::Wheel(def) => def.kind(),
            JointDef::Revolute(def) => def.kind(),
            JointDef::Prismatic(def) => def.kind(),
        }
    }

    fn base(&self) -> &JointBase {
        match self {
            JointDef::Wheel(def) => def.base(),
            JointDef::Revolute(def) => def.base(),
            JointDef::Prismatic(def) => def.base(),
        }
    }

    fn base_mut(&mut self) -> &mut JointBase {
        match self {
            JointDef::Wheel(def) => def.base_mut(),
            JointDef::Revolute(def) => def.base_mut(),
            JointDef::Prismatic(def) => def.base_mut(),
        }
    }
}

impl From<WheelJointDef> for JointDef {
    fn from(def: WheelJointDef) -> Self {
        JointDef::Wheel(def)
    }
}

impl From<RevoluteJointDef> for JointDef {
    fn from(def: RevoluteJointDef) -> Self {
        JointDef::Revolute(def)
    }
}

impl From<PrismaticJointDef> for JointDef {
    fn from(def: PrismaticJointDef) -> Self {
        JointDef::Prismatic(def)
    }
}

/// Looks up the two bodies an `initialize` call names.
///
/// Identical handles and handles that resolve to no body are caller errors.
pub(crate) fn resolve_pair(
    bodies: &BodyStorage<RigidBody>,
    body_a: BodyHandle,
    body_b: BodyHandle,
) -> Result<(&RigidBody, &RigidBody)> {
    if body_a == body_b {
        return Err(PhysicsError::InvalidArgument(format!(
            "a joint cannot attach body {:?} to itself",
            body_a
        )));
    }

    let first = bodies.get(body_a).ok_or_else(|| {
        PhysicsError::InvalidArgument(format!("body A {:?} does not exist", body_a))
    })?;
    let second = bodies.get(body_b).ok_or_else(|| {
        PhysicsError::InvalidArgument(format!("body B {:?} does not exist", body_b))
    })?;

    Ok((first, second))
}
