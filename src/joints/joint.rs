use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage, ParameterPolicy, WorldConfig};
use crate::error::PhysicsError;
use crate::joints::{JointDef, JointDefinition, JointKind};
use crate::math::Vector2;
use crate::Result;

/// A live joint created by the world from a [`JointDef`].
///
/// The joint owns a validated copy of the definition it was built from; later
/// changes to the caller's definition do not reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// The validated definition
    def: JointDef,

    /// The bodies involved in the joint (cached for quick lookup)
    bodies: [BodyHandle; 2],
}

impl Joint {
    /// Validates a definition against the bodies it names and the world
    /// configuration, producing a joint.
    ///
    /// Unset bodies are an inconsistent state, identical bodies and rejected
    /// parameters are invalid arguments, and unknown handles are missing resources.
    pub fn from_def(def: &JointDef, bodies: &BodyStorage<RigidBody>, config: &WorldConfig) -> Result<Self> {
        let kind = def.kind();
        let (body_a, body_b) = match (def.body_a(), def.body_b()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(PhysicsError::InconsistentState(format!(
                    "{} joint definition has unset bodies; call initialize or set_bodies first",
                    kind.name()
                )))
            }
        };

        if body_a == body_b {
            return Err(PhysicsError::InvalidArgument(format!(
                "{} joint cannot attach body {:?} to itself",
                kind.name(),
                body_a
            )));
        }

        bodies.get_body(body_a)?;
        bodies.get_body(body_b)?;

        let mut def = def.clone();
        let policy = config.parameter_policy;
        match &mut def {
            JointDef::Wheel(wheel) => {
                let frequency = non_negative(policy, "frequency", wheel.get_frequency())?;
                let damping_ratio = non_negative(policy, "damping ratio", wheel.get_damping_ratio())?;
                let torque = non_negative(policy, "max motor torque", wheel.get_max_motor_torque())?;
                wheel.set_frequency(frequency);
                wheel.set_damping_ratio(damping_ratio);
                wheel.set_max_motor_torque(torque);
            }
            JointDef::Revolute(revolute) => {
                let torque = non_negative(policy, "max motor torque", revolute.get_max_motor_torque())?;
                revolute.set_max_motor_torque(torque);
                check_limits(revolute.are_limits_enabled(), revolute.get_lower_limit(), revolute.get_upper_limit())?;
            }
            JointDef::Prismatic(prismatic) => {
                let force = non_negative(policy, "max motor force", prismatic.get_max_motor_force())?;
                prismatic.set_max_motor_force(force);
                check_limits(prismatic.are_limits_enabled(), prismatic.get_lower_limit(), prismatic.get_upper_limit())?;
            }
        }

        if config.normalize_axes {
            normalize_axis(&mut def)?;
        }

        Ok(Self {
            def,
            bodies: [body_a, body_b],
        })
    }

    pub fn kind(&self) -> JointKind {
        self.def.kind()
    }

    /// The definition this joint was built from, after validation
    pub fn def(&self) -> &JointDef {
        &self.def
    }

    /// Returns the bodies involved in the joint
    pub fn bodies(&self) -> &[BodyHandle; 2] {
        &self.bodies
    }

    /// Checks if the joint involves a specific body
    pub fn involves_body(&self, body: BodyHandle) -> bool {
        self.bodies.contains(&body)
    }

    pub fn collide_connected(&self) -> bool {
        self.def.collide_connected()
    }

    /// The anchor on body A in world space
    pub fn anchor_a(&self, bodies: &BodyStorage<RigidBody>) -> Result<Vector2> {
        let (body_a, _) = self.resolve(bodies)?;
        Ok(body_a.get_world_point(self.def.local_anchor_a()))
    }

    /// The anchor on body B in world space
    pub fn anchor_b(&self, bodies: &BodyStorage<RigidBody>) -> Result<Vector2> {
        let (_, body_b) = self.resolve(bodies)?;
        Ok(body_b.get_world_point(self.def.local_anchor_b()))
    }

    /// The translation axis in world space; revolute joints have none
    pub fn world_axis(&self, bodies: &BodyStorage<RigidBody>) -> Result<Vector2> {
        let local_axis = self.local_axis()?;
        let (body_a, _) = self.resolve(bodies)?;
        Ok(body_a.get_world_vector(local_axis))
    }

    /// Current relative angle, measured from the reference angle
    pub fn angle(&self, bodies: &BodyStorage<RigidBody>) -> Result<f32> {
        let (body_a, body_b) = self.resolve(bodies)?;
        Ok(body_b.get_angle() - body_a.get_angle() - self.def.reference_angle())
    }

    /// Relative angular speed of body B with respect to body A
    pub fn angular_speed(&self, bodies: &BodyStorage<RigidBody>) -> Result<f32> {
        let (body_a, body_b) = self.resolve(bodies)?;
        Ok(body_b.get_angular_velocity() - body_a.get_angular_velocity())
    }

    /// Current offset of anchor B from anchor A, projected on the world axis
    pub fn translation(&self, bodies: &BodyStorage<RigidBody>) -> Result<f32> {
        let local_axis = self.local_axis()?;
        let (body_a, body_b) = self.resolve(bodies)?;

        let anchor_a = body_a.get_world_point(self.def.local_anchor_a());
        let anchor_b = body_b.get_world_point(self.def.local_anchor_b());
        let axis = body_a.get_world_vector(local_axis);

        Ok((anchor_b - anchor_a).dot(&axis))
    }

    /// Rate of change of [`translation`](Self::translation)
    pub fn linear_speed(&self, bodies: &BodyStorage<RigidBody>) -> Result<f32> {
        let local_axis = self.local_axis()?;
        let (body_a, body_b) = self.resolve(bodies)?;

        let r_a = body_a.get_world_vector(self.def.local_anchor_a());
        let r_b = body_b.get_world_vector(self.def.local_anchor_b());
        let d = (body_b.get_position() + r_b) - (body_a.get_position() + r_a);
        let axis = body_a.get_world_vector(local_axis);

        let w_a = body_a.get_angular_velocity();
        let w_b = body_b.get_angular_velocity();
        let v_a = body_a.get_linear_velocity() + Vector2::cross_scalar(w_a, &r_a);
        let v_b = body_b.get_linear_velocity() + Vector2::cross_scalar(w_b, &r_b);

        // The axis itself rotates with body A
        Ok(d.dot(&Vector2::cross_scalar(w_a, &axis)) + axis.dot(&(v_b - v_a)))
    }

    pub fn is_motor_enabled(&self) -> bool {
        match &self.def {
            JointDef::Wheel(def) => def.is_motor_enabled(),
            JointDef::Revolute(def) => def.is_motor_enabled(),
            JointDef::Prismatic(def) => def.is_motor_enabled(),
        }
    }

    pub fn set_motor_enabled(&mut self, flag: bool) {
        match &mut self.def {
            JointDef::Wheel(def) => def.set_enable_motor(flag),
            JointDef::Revolute(def) => def.set_enable_motor(flag),
            JointDef::Prismatic(def) => def.set_enable_motor(flag),
        }
    }

    pub fn get_motor_speed(&self) -> f32 {
        match &self.def {
            JointDef::Wheel(def) => def.get_motor_speed(),
            JointDef::Revolute(def) => def.get_motor_speed(),
            JointDef::Prismatic(def) => def.get_motor_speed(),
        }
    }

    pub fn set_motor_speed(&mut self, speed: f32) {
        match &mut self.def {
            JointDef::Wheel(def) => def.set_motor_speed(speed),
            JointDef::Revolute(def) => def.set_motor_speed(speed),
            JointDef::Prismatic(def) => def.set_motor_speed(speed),
        }
    }

    /// Updates the suspension of a wheel joint. Nothing is written unless both
    /// values pass the policy.
    pub(crate) fn set_spring(&mut self, policy: ParameterPolicy, frequency: f32, damping_ratio: f32) -> Result<()> {
        let kind = self.kind();
        let wheel = self.def.as_wheel_mut().ok_or_else(|| {
            PhysicsError::InvalidArgument(format!("{} joints have no suspension spring", kind.name()))
        })?;
        let frequency = non_negative(policy, "frequency", frequency)?;
        let damping_ratio = non_negative(policy, "damping ratio", damping_ratio)?;
        wheel.set_frequency(frequency);
        wheel.set_damping_ratio(damping_ratio);
        Ok(())
    }

    fn local_axis(&self) -> Result<Vector2> {
        self.def.local_axis_a().ok_or_else(|| {
            PhysicsError::InvalidArgument(format!("{} joints have no translation axis", self.kind().name()))
        })
    }

    fn resolve<'a>(&self, bodies: &'a BodyStorage<RigidBody>) -> Result<(&'a RigidBody, &'a RigidBody)> {
        Ok((bodies.get_body(self.bodies[0])?, bodies.get_body(self.bodies[1])?))
    }
}

/// Applies the parameter policy to a value that should be non-negative
fn non_negative(policy: ParameterPolicy, name: &str, value: f32) -> Result<f32> {
    if value >= 0.0 {
        return Ok(value);
    }

    match policy {
        ParameterPolicy::Permissive => Ok(value),
        ParameterPolicy::Clamp => {
            log::warn!("{} of {} clamped to zero", name, value);
            Ok(0.0)
        }
        ParameterPolicy::Reject => Err(PhysicsError::InvalidArgument(format!(
            "{} must be non-negative, got {}",
            name, value
        ))),
    }
}

fn check_limits(enabled: bool, lower: f32, upper: f32) -> Result<()> {
    if enabled && lower > upper {
        return Err(PhysicsError::InvalidArgument(format!(
            "lower limit {} exceeds upper limit {}",
            lower, upper
        )));
    }
    Ok(())
}

fn normalize_axis(def: &mut JointDef) -> Result<()> {
    let axis = match def.local_axis_a() {
        Some(axis) => axis,
        None => return Ok(()),
    };

    if axis.is_zero() {
        return Err(PhysicsError::InvalidArgument(format!(
            "{} joint axis is zero and cannot be normalized",
            def.kind().name()
        )));
    }

    match def {
        JointDef::Wheel(wheel) => wheel.set_local_axis_a(axis.normalize()),
        JointDef::Prismatic(prismatic) => prismatic.set_local_axis_a(axis.normalize()),
        JointDef::Revolute(_) => {}
    }
    Ok(())
}
