use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage};
use crate::joints::joint_def::{resolve_pair, JointBase, JointDefinition, JointKind};
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Definition of a wheel joint.
///
/// A wheel joint lets body B translate along an axis fixed in body A and rotate
/// freely, the way a wheel rides on a suspension strut. Translation along the axis
/// can be sprung (`frequency`, `damping_ratio`) and rotation can be driven by a motor.
///
/// The definition is plain data: setters store values verbatim and never validate.
/// Hand it to [`PhysicsWorld::create_joint`](crate::PhysicsWorld::create_joint) to
/// get a live joint; the definition stays usable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WheelJointDef {
    base: JointBase,

    /// The anchor point relative to body A's origin
    local_anchor_a: Vector2,

    /// The anchor point relative to body B's origin
    local_anchor_b: Vector2,

    /// The translation axis in body A's frame
    local_axis_a: Vector2,

    /// Body B's angle minus body A's angle when `initialize` ran
    reference_angle: f32,

    enable_motor: bool,

    /// The desired motor speed, in radians per second
    motor_speed: f32,

    /// The maximum motor torque used to achieve the motor speed, in N·m
    max_motor_torque: f32,

    /// Suspension frequency in Hz, zero means no suspension
    frequency: f32,

    /// Suspension damping ratio, one means critical damping
    damping_ratio: f32,
}

impl WheelJointDef {
    /// Creates a definition with no bodies, zero anchors, the x axis, motor off,
    /// and a rigid (zero frequency) suspension.
    pub fn new() -> Self {
        Self {
            base: JointBase::default(),
            local_anchor_a: Vector2::zero(),
            local_anchor_b: Vector2::zero(),
            local_axis_a: Vector2::unit_x(),
            reference_angle: 0.0,
            enable_motor: false,
            motor_speed: 0.0,
            max_motor_torque: 0.0,
            frequency: 0.0,
            damping_ratio: 0.0,
        }
    }

    /// Initializes the bodies, anchors, axis, and reference angle from a world
    /// anchor and world axis.
    ///
    /// Fails with [`PhysicsError::InvalidArgument`](crate::error::PhysicsError::InvalidArgument)
    /// if either handle names no body in `bodies` or both handles are the same; the
    /// definition is left untouched in that case. Motor and spring settings are
    /// never modified.
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

        log::trace!(
            "wheel joint def initialized between {:?} and {:?} at {}",
            body_a,
            body_b,
            world_anchor
        );

        Ok(())
    }

    pub fn get_local_anchor_a(&self) -> Vector2 {
        self.local_anchor_a
    }

    /// Sets the anchor in body A's frame directly. The reference angle is left as is.
    pub fn set_local_anchor_a(&mut self, anchor: Vector2) {
        self.local_anchor_a = anchor;
    }

    pub fn get_local_anchor_b(&self) -> Vector2 {
        self.local_anchor_b
    }

    /// Sets the anchor in body B's frame directly. The reference angle is left as is.
    pub fn set_local_anchor_b(&mut self, anchor: Vector2) {
        self.local_anchor_b = anchor;
    }

    /// The translation axis in body A's frame
    pub fn get_local_axis_a(&self) -> Vector2 {
        self.local_axis_a
    }

    /// Sets the axis in body A's frame directly. A unit vector is expected but not
    /// enforced.
    pub fn set_local_axis_a(&mut self, axis: Vector2) {
        self.local_axis_a = axis;
    }

    /// The relative angle captured by `initialize`
    pub fn get_reference_angle(&self) -> f32 {
        self.reference_angle
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

    /// Sets the desired motor speed; the sign gives the direction
    pub fn set_motor_speed(&mut self, speed: f32) {
        self.motor_speed = speed;
    }

    pub fn get_max_motor_torque(&self) -> f32 {
        self.max_motor_torque
    }

    pub fn set_max_motor_torque(&mut self, torque: f32) {
        self.max_motor_torque = torque;
    }

    pub fn get_frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn get_damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    pub fn set_damping_ratio(&mut self, ratio: f32) {
        self.damping_ratio = ratio;
    }
}

impl Default for WheelJointDef {
    fn default() -> Self {
        Self::new()
    }
}

impl JointDefinition for WheelJointDef {
    fn kind(&self) -> JointKind {
        JointKind::Wheel
    }

    fn base(&self) -> &JointBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut JointBase {
        &mut self.base
    }
}
