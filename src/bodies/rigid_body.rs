use crate::bodies::RigidBodyType;
use crate::math::{Rotation, Transform, Vector2};

/// A planar rigid body.
///
/// Joints only ever read a body's frame (its [`Transform`]) and its velocities, so
/// this type carries pose and motion state and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// The body's transform in world space
    transform: Transform,

    /// The body's angle in radians (kept alongside the rotation so it is not wrapped)
    angle: f32,

    /// Linear velocity of the body origin
    linear_velocity: Vector2,

    /// Angular velocity in radians per second
    angular_velocity: f32,

    /// The body's type (dynamic, kinematic, or static)
    body_type: RigidBodyType,
}

impl RigidBody {
    /// Creates a new rigid body at the given position and angle
    pub fn new(position: Vector2, angle: f32, body_type: RigidBodyType) -> Self {
        Self {
            transform: Transform::from_position_angle(position, angle),
            angle,
            linear_velocity: Vector2::zero(),
            angular_velocity: 0.0,
            body_type,
        }
    }

    /// Creates a new dynamic rigid body
    pub fn new_dynamic(position: Vector2, angle: f32) -> Self {
        Self::new(position, angle, RigidBodyType::Dynamic)
    }

    /// Creates a new kinematic rigid body
    pub fn new_kinematic(position: Vector2, angle: f32) -> Self {
        Self::new(position, angle, RigidBodyType::Kinematic)
    }

    /// Creates a new static rigid body
    pub fn new_static(position: Vector2, angle: f32) -> Self {
        Self::new(position, angle, RigidBodyType::Static)
    }

    /// Returns the body's transform
    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    /// Sets the body's position and angle at once
    pub fn set_transform(&mut self, position: Vector2, angle: f32) {
        self.transform = Transform::from_position_angle(position, angle);
        self.angle = angle;
    }

    pub fn get_position(&self) -> Vector2 {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.transform.position = position;
    }

    /// Returns the body's angle in radians
    pub fn get_angle(&self) -> f32 {
        self.angle
    }

    /// Sets the body's angle in radians
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.transform.rotation = Rotation::from_angle(angle);
    }

    pub fn get_linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        if self.body_type != RigidBodyType::Static {
            self.linear_velocity = velocity;
        }
    }

    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, velocity: f32) {
        if self.body_type != RigidBodyType::Static {
            self.angular_velocity = velocity;
        }
    }

    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Changes the body type. Static bodies lose their velocity.
    pub fn set_body_type(&mut self, body_type: RigidBodyType) {
        self.body_type = body_type;
        if body_type == RigidBodyType::Static {
            self.linear_velocity = Vector2::zero();
            self.angular_velocity = 0.0;
        }
    }

    /// Converts a world-space point into this body's local frame
    pub fn get_local_point(&self, world_point: Vector2) -> Vector2 {
        self.transform.inverse_transform_point(world_point)
    }

    /// Converts a world-space direction into this body's local frame
    pub fn get_local_vector(&self, world_vector: Vector2) -> Vector2 {
        self.transform.inverse_transform_direction(world_vector)
    }

    /// Converts a point in this body's local frame into world space
    pub fn get_world_point(&self, local_point: Vector2) -> Vector2 {
        self.transform.transform_point(local_point)
    }

    /// Converts a direction in this body's local frame into world space
    pub fn get_world_vector(&self, local_vector: Vector2) -> Vector2 {
        self.transform.transform_direction(local_vector)
    }
}
