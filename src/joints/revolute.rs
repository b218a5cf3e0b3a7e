use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage};
use crate::joints::joint_def::{resolve_pair, JointBase, JointDefinition, JointKind};
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Definition of a revolute (hinge) joint: both bodies share an anchor point and
/// rotate freely about it, optionally within angle limits and driven by a motor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RevoluteJointDef {
    base: JointBase,

    /// The anchor point relative to body A's origin
    local_anchor_a: Vector2,

    /// The anchor point relative to body B's origin
    local_anchor_b: Vector2,

    /// Body B's angle minus body A's angle when `initialize` ran
    reference_angle: f32,

    /// Whether to use limits for the rotation
    enable_limit: bool,

    /// The lower joint angle limit, in radians
    lower_angle: f32,

    /// The upper joint angle limit, in radians
    upper_angle: f32,

    enable_motor: bool,
    motor_speed: f32,
    max_motor_torque: f32,
}

impl RevoluteJointDef {
    pub fn new() -> Self {
        Self {
            base: JointBase::default(),
            local_anchor_a: Vector2::zero(),
            local_anchor_b: Vector2::zero(),
            reference_angle: 0.0,
            enable_limit: false,
            lower_angle: 0.0,
            upper_angle: 0.0,
            enable_motor: false,
            motor_speed: 0.0,
            max_motor_torque: 0.0,
        }
    }

    /// Initializes the bodies, anchors, and reference angle from a world anchor.
    ///
    /// Rejects missing or identical bodies without modifying the definition.
    pub fn initialize(
        &mut self,
        bodies: &BodyStorage<RigidBody>,
        body_a: BodyHandle,
        body_b: BodyHandle,
        world_anchor: Vector2,
    ) -> Result<()> {
        let (first, second) = resolve_pair(bodies, body_a, body_b)?;

        self.set_bodies(body_a, body_b);
        self.local_anchor_a = first.get_local_point(world_anchor);
        self.local_anchor_b = second.get_local_point(world_anchor);
        self.reference_angle = second.get_angle() - first.get_angle();

        Ok(())
    }

    pub fn get_local_anchor_a(&self) -> Vector2 {
        self.local_anchor_a
    }

    pub fn set_local_anchor_a(&mut self, anchor: Vector2) {
        self.local_anchor_a = anchor;
    }

    pub fn get_local_anchor_b(&self) -> Vector2 {
        self.local_anchor_b
    }

    pub fn set_local_anchor_b(&mut self, anchor: Vector2) {
        self.local_anchor_b = anchor;
    }

    pub fn get_reference_angle(&self) -> f32 {
        self.reference_angle
    }

    /// Sets and enables the angle limits
    pub fn set_limits(&mut self, lower_angle: f32, upper_angle: f32) {
        self.lower_angle = lower_angle;
        self.upper_angle = upper_angle;
        self.enable_limit = true;
    }

    pub fn disable_limits(&mut self) {
        self.enable_limit = false;
    }

    pub fn are_limits_enabled(&self) -> bool {
        self.enable_limit
    }

    pub fn get_lower_limit(&self) -> f32 {
        self.lower_angle
    }

    pub fn get_upper_limit(&self) -> f32 {
        self.upper_angle
    }

    pub fn is_motor_enabled(&self) -> bool {
        self.enable_motor
    }

    pub fn set_enable_motor(&mut self, flag: bool) {
        self.enable_motor = flag;
    }

    pub fn get_motor_speed(&self) -> f32 {
        self.motor_speed
    }

    pub fn set_motor_speed(&mut self, speed: f32) {
        self.motor_speed = speed;
    }

    pub fn get_max_motor_torque(&self) -> f32 {
        self.max_motor_torque
    }

    pub fn set_max_motor_torque(&mut self, torque: f32) {
        self.max_motor_torque = torque;
    }
}

impl Default for RevoluteJointDef {
    fn default() -> Self {
        Self::new()
    }
}

impl JointDefinition for RevoluteJointDef {
    fn kind(&self) -> JointKind {
        JointKind::Revolute
    }

    fn base(&self) -> &JointBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut JointBase {
        &mut self.base
    }
}
