use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage};
use crate::joints::joint_def::{resolve_pair, JointBase, JointDefinition, JointKind};
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Definition of a prismatic (slider) joint: body B translates along an axis fixed
/// in body A with no relative rotation. Translation can be limited and motorized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PrismaticJointDef {
    base: JointBase,

    local_anchor_a: Vector2,
    local_anchor_b: Vector2,

    /// The translation axis in body A's frame
    local_axis_a: Vector2,

    reference_angle: f32,

    /// Whether to use limits for the translation
    enable_limit: bool,

    /// The lower translation limit, usually in meters
    lower_translation: f32,

    /// The upper translation limit, usually in meters
    upper_translation: f32,

    enable_motor: bool,

    /// The desired motor speed, usually in meters per second
    motor_speed: f32,

    /// The maximum motor force, usually in N
    max_motor_force: f32,
}

impl PrismaticJointDef {
    pub fn new() -> Self {
        Self {
            base: JointBase::default(),
            local_anchor_a: Vector2::zero(),
            local_anchor_b: Vector2::zero(),
            local_axis_a: Vector2::unit_x(),
            reference_angle: 0.0,
            enable_limit: false,
            lower_translation: 0.0,
            upper_translation: 0.0,
            enable_motor: false,
            motor_speed: 0.0,
            max_motor_force: 0.0,
        }
    }

    /// Initializes the bodies, anchors, axis, and reference angle from a world
    /// anchor and world axis.
    ///
    /// Rejects missing or identical bodies without modifying the definition.
    pub fn initialize(
        &mut self,
        bodies: &BodyStorage<RigidBody>,
        body_a: BodyHandle,
        body_b: BodyHandle,
        world_anchor: Vector2,
        world_axis: Vector2,
    ) -> Result<()> {
        let (first, second) = resolve_pair(bodies, body_a, body_b)?;

        self.set_bodies(body_a, body_b);
        self.local_anchor_a = first.get_local_point(world_anchor);
        self.local_anchor_b = second.get_local_point(world_anchor);
        self.local_axis_a = first.get_local_vector(world_axis);
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

    pub fn get_local_axis_a(&self) -> Vector2 {
        self.local_axis_a
    }

    pub fn set_local_axis_a(&mut self, axis: Vector2) {
        self.local_axis_a = axis;
    }

    pub fn get_reference_angle(&self) -> f32 {
        self.reference_angle
    }

    /// Sets and enables the translation limits
    pub fn set_limits(&mut self, lower_translation: f32, upper_translation: f32) {
        self.lower_translation = lower_translation;
        self.upper_translation = upper_translation;
        self.enable_limit = true;
    }

    pub fn disable_limits(&mut self) {
        self.enable_limit = false;
    }

    pub fn are_limits_enabled(&self) -> bool {
        self.enable_limit
    }

    pub fn get_lower_limit(&self) -> f32 {
        self.lower_translation
    }

    pub fn get_upper_limit(&self) -> f32 {
        self.upper_translation
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

    pub fn get_max_motor_force(&self) -> f32 {
        self.max_motor_force
    }

    pub fn set_max_motor_force(&mut self, force: f32) {
        self.max_motor_force = force;
    }
}

impl Default for PrismaticJointDef {
    fn default() -> Self {
        Self::new()
    }
}

impl JointDefinition for PrismaticJointDef {
    fn kind(&self) -> JointKind {
        JointKind::Prismatic
    }

    fn base(&self) -> &JointBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut JointBase {
        &mut self.base
    }
}
