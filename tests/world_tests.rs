use phys_joints::{
    core::{BodyEventType, JointEventType},
    error::PhysicsError,
    math::Vector2,
    JointDef, JointDefinition, JointKind, ParameterPolicy, PhysicsWorld, PrismaticJointDef,
    RevoluteJointDef, RigidBody, RigidBodyType, WheelJointDef, WorldConfig,
};
use approx::assert_relative_eq;
use std::f32::consts::FRAC_PI_2;

/// A chassis at the origin and a wheel hanging one unit below it on a vertical strut
fn car(world: &mut PhysicsWorld) -> (phys_joints::BodyHandle, phys_joints::BodyHandle, WheelJointDef) {
    let chassis = world.add_body(RigidBody::new_dynamic(Vector2::zero(), 0.0));
    let wheel = world.add_body(RigidBody::new_dynamic(Vector2::new(0.0, -1.0), 0.0));

    let mut def = WheelJointDef::new();
    def.initialize(world.bodies(), chassis, wheel, Vector2::new(0.0, -1.0), Vector2::new(0.0, 1.0))
        .unwrap();
    def.set_frequency(4.0);
    def.set_damping_ratio(0.7);
    def.set_enable_motor(true);
    def.set_motor_speed(-10.0);
    def.set_max_motor_torque(20.0);

    (chassis, wheel, def)
}

#[test]
fn test_create_wheel_joint() {
    let mut world = PhysicsWorld::new();
    let (chassis, wheel, def) = car(&mut world);

    let handle = world.create_joint(&JointDef::from(def.clone())).unwrap();
    assert_eq!(world.joint_count(), 1);

    let joint = world.get_joint(handle).unwrap();
    assert_eq!(joint.kind(), JointKind::Wheel);
    assert_eq!(joint.bodies(), &[chassis, wheel]);
    assert!(joint.is_motor_enabled());
    assert_eq!(joint.get_motor_speed(), -10.0);
    assert_eq!(joint.def().as_wheel(), Some(&def));

    assert_eq!(world.joints_for_body(chassis), vec![handle]);
    assert_eq!(world.joints_for_body(wheel), vec![handle]);
}

#[test]
fn test_joint_does_not_alias_definition() {
    let mut world = PhysicsWorld::new();
    let (_, _, def) = car(&mut world);
    let mut def = JointDef::from(def);

    let first = world.create_joint(&def).unwrap();

    // Re-mutating the caller's definition neither touches the joint nor prevents reuse
    if let JointDef::Wheel(wheel) = &mut def {
        wheel.set_frequency(9.0);
    }
    let second = world.create_joint(&def).unwrap();

    let frequency = |h| world.get_joint(h).unwrap().def().as_wheel().unwrap().get_frequency();
    assert_eq!(frequency(first), 4.0);
    assert_eq!(frequency(second), 9.0);
}

#[test]
fn test_create_joint_with_unset_bodies() {
    let mut world = PhysicsWorld::new();
    world.add_body(RigidBody::new_static(Vector2::zero(), 0.0));

    let result = world.create_joint(&JointDef::from(WheelJointDef::new()));
    assert!(matches!(result, Err(PhysicsError::InconsistentState(_))));
    assert_eq!(world.joint_count(), 0);
}

#[test]
fn test_create_joint_with_same_or_removed_body() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(RigidBody::new_static(Vector2::zero(), 0.0));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(1.0, 0.0), 0.0));

    let mut def = WheelJointDef::new();
    def.set_bodies(a, a);
    assert!(matches!(world.create_joint(&JointDef::from(def.clone())), Err(PhysicsError::InvalidArgument(_))));

    def.set_bodies(a, b);
    world.remove_body(b).unwrap();
    assert!(matches!(world.create_joint(&JointDef::from(def)), Err(PhysicsError::ResourceNotFound(_))));
}

#[test]
fn test_parameter_policies() {
    let mut def = WheelJointDef::new();
    def.set_frequency(-2.0);
    def.set_damping_ratio(0.5);
    def.set_max_motor_torque(-1.0);

    // Permissive keeps values verbatim
    let mut world = PhysicsWorld::new();
    let a = world.add_body(RigidBody::new_static(Vector2::zero(), 0.0));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(1.0, 0.0), 0.0));
    def.set_bodies(a, b);
    let def = JointDef::from(def);

    let handle = world.create_joint(&def).unwrap();
    let wheel = world.get_joint(handle).unwrap().def().as_wheel().unwrap().clone();
    assert_eq!(wheel.get_frequency(), -2.0);
    assert_eq!(wheel.get_max_motor_torque(), -1.0);

    // Clamp zeroes negatives and leaves the rest
    world.get_config_mut().parameter_policy = ParameterPolicy::Clamp;
    let handle = world.create_joint(&def).unwrap();
    let wheel = world.get_joint(handle).unwrap().def().as_wheel().unwrap().clone();
    assert_eq!(wheel.get_frequency(), 0.0);
    assert_eq!(wheel.get_damping_ratio(), 0.5);
    assert_eq!(wheel.get_max_motor_torque(), 0.0);

    // Reject refuses the joint
    world.get_config_mut().parameter_policy = ParameterPolicy::Reject;
    assert!(matches!(world.create_joint(&def), Err(PhysicsError::InvalidArgument(_))));
    assert_eq!(world.joint_count(), 2);
}

#[test]
fn test_normalize_axes() {
    let mut world = PhysicsWorld::with_config(WorldConfig::strict());
    let a = world.add_body(RigidBody::new_static(Vector2::zero(), 0.0));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(1.0, 0.0), 0.0));

    let mut def = WheelJointDef::new();
    def.set_bodies(a, b);
    def.set_local_axis_a(Vector2::new(0.0, 3.0));

    let handle = world.create_joint(&JointDef::from(def.clone())).unwrap();
    let axis = world.get_joint(handle).unwrap().def().local_axis_a().unwrap();
    assert_relative_eq!(axis, Vector2::unit_y());

    // The caller's definition keeps the raw axis
    assert_eq!(def.get_local_axis_a(), Vector2::new(0.0, 3.0));

    // A short axis is still a direction
    def.set_local_axis_a(Vector2::new(5.0e-4, 0.0));
    let handle = world.create_joint(&JointDef::from(def.clone())).unwrap();
    let axis = world.get_joint(handle).unwrap().def().local_axis_a().unwrap();
    assert_relative_eq!(axis, Vector2::unit_x());

    def.set_local_axis_a(Vector2::zero());
    assert!(matches!(world.create_joint(&JointDef::from(def)), Err(PhysicsError::InvalidArgument(_))));
}

#[test]
fn test_inverted_limits_rejected() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(RigidBody::new_static(Vector2::zero(), 0.0));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(1.0, 0.0), 0.0));

    let mut revolute = RevoluteJointDef::new();
    revolute.initialize(world.bodies(), a, b, Vector2::zero()).unwrap();
    revolute.set_limits(1.0, -1.0);
    assert!(matches!(world.create_joint(&JointDef::from(revolute.clone())), Err(PhysicsError::InvalidArgument(_))));

    revolute.disable_limits();
    assert!(world.create_joint(&JointDef::from(revolute)).is_ok());

    let mut prismatic = PrismaticJointDef::new();
    prismatic.initialize(world.bodies(), a, b, Vector2::zero(), Vector2::unit_x()).unwrap();
    prismatic.set_limits(-1.0, 1.0);
    assert!(world.create_joint(&JointDef::from(prismatic)).is_ok());
}

#[test]
fn test_wheel_joint_queries() {
    let mut world = PhysicsWorld::new();
    let (chassis, wheel, def) = car(&mut world);
    let handle = world.create_joint(&JointDef::from(def)).unwrap();

    {
        let joint = world.get_joint(handle).unwrap();
        assert_relative_eq!(joint.anchor_a(world.bodies()).unwrap(), Vector2::new(0.0, -1.0));
        assert_relative_eq!(joint.anchor_b(world.bodies()).unwrap(), Vector2::new(0.0, -1.0));
        assert_relative_eq!(joint.translation(world.bodies()).unwrap(), 0.0);
        assert_relative_eq!(joint.angle(world.bodies()).unwrap(), 0.0);
    }

    // Compress the suspension and spin the wheel
    let body = world.get_body_mut(wheel).unwrap();
    body.set_position(Vector2::new(0.0, -0.75));
    body.set_angle(1.0);
    body.set_linear_velocity(Vector2::new(0.0, 2.0));
    body.set_angular_velocity(-3.0);

    let joint = world.get_joint(handle).unwrap();
    assert_relative_eq!(joint.translation(world.bodies()).unwrap(), 0.25);
    assert_relative_eq!(joint.angle(world.bodies()).unwrap(), 1.0);
    assert_relative_eq!(joint.angular_speed(world.bodies()).unwrap(), -3.0);

    // The wheel anchor sits on the wheel's origin, so its spin adds no axial speed
    assert_relative_eq!(joint.linear_speed(world.bodies()).unwrap(), 2.0);
    assert_relative_eq!(joint.world_axis(world.bodies()).unwrap(), Vector2::unit_y());

    let chassis_body = world.get_body(chassis).unwrap();
    assert_eq!(chassis_body.get_position(), Vector2::zero());
}

#[test]
fn test_linear_speed_with_rotating_axis() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(RigidBody::new_dynamic(Vector2::zero(), 0.0));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(2.0, 1.0), 0.0));

    let mut def = PrismaticJointDef::new();
    def.initialize(world.bodies(), a, b, Vector2::zero(), Vector2::unit_x()).unwrap();
    def.set_local_anchor_b(Vector2::zero());
    let handle = world.create_joint(&JointDef::from(def)).unwrap();

    // Spinning body A sweeps its axis, so the offset (2, 1) projects at d·(w×axis)
    world.get_body_mut(a).unwrap().set_angular_velocity(1.5);
    let joint = world.get_joint(handle).unwrap();

    assert_relative_eq!(joint.translation(world.bodies()).unwrap(), 2.0);
    assert_relative_eq!(joint.linear_speed(world.bodies()).unwrap(), 1.5);
}

/// Moves a body along its current velocities for `dt` seconds
fn advance(world: &mut PhysicsWorld, handle: phys_joints::BodyHandle, dt: f32) {
    let body = world.get_body_mut(handle).unwrap();
    let position = body.get_position() + body.get_linear_velocity() * dt;
    let angle = body.get_angle() + body.get_angular_velocity() * dt;
    body.set_transform(position, angle);
}

#[test]
fn test_linear_speed_matches_finite_difference() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(RigidBody::new_dynamic(Vector2::new(0.5, -0.3), 0.4));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(1.8, 1.1), -0.9));

    let mut def = WheelJointDef::new();
    def.initialize(world.bodies(), a, b, Vector2::new(1.2, 0.2), Vector2::new(0.6, 0.8)).unwrap();
    // Pull anchor B off the shared point so both anchors sit away from their body origins
    def.set_local_anchor_b(Vector2::new(0.4, -0.7));
    let handle = world.create_joint(&JointDef::from(def)).unwrap();

    let body = world.get_body_mut(a).unwrap();
    body.set_linear_velocity(Vector2::new(0.7, -1.1));
    body.set_angular_velocity(1.3);
    let body = world.get_body_mut(b).unwrap();
    body.set_linear_velocity(Vector2::new(-0.4, 2.2));
    body.set_angular_velocity(-2.1);

    let speed = world.get_joint(handle).unwrap().linear_speed(world.bodies()).unwrap();

    // Central difference of the translation around the current pose
    let dt = 1.0e-3;
    advance(&mut world, a, dt);
    advance(&mut world, b, dt);
    let ahead = world.get_joint(handle).unwrap().translation(world.bodies()).unwrap();
    advance(&mut world, a, -2.0 * dt);
    advance(&mut world, b, -2.0 * dt);
    let behind = world.get_joint(handle).unwrap().translation(world.bodies()).unwrap();

    assert_relative_eq!(speed, (ahead - behind) / (2.0 * dt), epsilon = 1e-2);
}

#[test]
fn test_revolute_joint_has_no_axis() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(RigidBody::new_static(Vector2::zero(), 0.0));
    let b = world.add_body(RigidBody::new_dynamic(Vector2::new(0.0, 1.0), FRAC_PI_2));

    let mut def = RevoluteJointDef::new();
    def.initialize(world.bodies(), a, b, Vector2::zero()).unwrap();
    let handle = world.create_joint(&JointDef::from(def)).unwrap();

    let joint = world.get_joint(handle).unwrap();
    assert!(matches!(joint.translation(world.bodies()), Err(PhysicsError::InvalidArgument(_))));
    assert_relative_eq!(joint.angle(world.bodies()).unwrap(), 0.0);
    assert_relative_eq!(joint.anchor_b(world.bodies()).unwrap(), Vector2::zero(), epsilon = 1e-6);

    assert!(matches!(world.set_wheel_spring(handle, 1.0, 1.0), Err(PhysicsError::InvalidArgument(_))));
}

#[test]
fn test_live_joint_updates() {
    let mut world = PhysicsWorld::new();
    let (_, _, def) = car(&mut world);
    let handle = world.create_joint(&JointDef::from(def)).unwrap();

    let joint = world.get_joint_mut(handle).unwrap();
    joint.set_motor_speed(5.0);
    joint.set_motor_enabled(false);

    world.set_wheel_spring(handle, 2.0, 1.0).unwrap();

    let joint = world.get_joint(handle).unwrap();
    assert_eq!(joint.get_motor_speed(), 5.0);
    assert!(!joint.is_motor_enabled());
    let wheel = joint.def().as_wheel().unwrap();
    assert_eq!(wheel.get_frequency(), 2.0);
    assert_eq!(wheel.get_damping_ratio(), 1.0);

    world.get_config_mut().parameter_policy = ParameterPolicy::Reject;
    assert!(matches!(world.set_wheel_spring(handle, 2.5, -1.0), Err(PhysicsError::InvalidArgument(_))));
    let wheel = world.get_joint(handle).unwrap().def().as_wheel().unwrap();
    assert_eq!(wheel.get_frequency(), 2.0);
    assert_eq!(wheel.get_damping_ratio(), 1.0);
}

#[test]
fn test_set_wheel_spring_resolves_joint_first() {
    let mut world = PhysicsWorld::with_config(WorldConfig::strict());
    let (_, _, def) = car(&mut world);
    let handle = world.create_joint(&JointDef::from(def)).unwrap();
    world.destroy_joint(handle).unwrap();

    // A stale handle is missing, whatever the values
    assert!(matches!(world.set_wheel_spring(handle, -1.0, 0.5), Err(PhysicsError::ResourceNotFound(_))));
}

#[test]
fn test_remove_body_destroys_joints_and_emits_events() {
    let mut world = PhysicsWorld::new();
    let (chassis, wheel, def) = car(&mut world);
    let joint = world.create_joint(&JointDef::from(def)).unwrap();

    world.remove_body(wheel).unwrap();

    assert_eq!(world.joint_count(), 0);
    assert_eq!(world.body_count(), 1);
    assert!(matches!(world.get_joint(joint), Err(PhysicsError::ResourceNotFound(_))));
    assert!(world.joints_for_body(chassis).is_empty());

    let events = world.get_events();
    assert_eq!(events.get_joint_events_of_type(JointEventType::Created).len(), 1);
    let destroyed = events.get_joint_events_of_type(JointEventType::Destroyed);
    assert_eq!(destroyed.len(), 1);
    assert_eq!(destroyed[0].joint, joint);
    assert_eq!(destroyed[0].kind, JointKind::Wheel);
    assert_eq!(events.get_joint_events_for_body(chassis).len(), 2);

    assert!(events.has_body_events());
    let events = world.get_events_mut();
    let mut body_events = Vec::new();
    while let Some(event) = events.next_body_event() {
        body_events.push(event.event_type);
    }
    assert_eq!(body_events, vec![BodyEventType::Added, BodyEventType::Added, BodyEventType::Removed]);
    assert!(!world.get_events().has_body_events());

    assert!(matches!(world.remove_body(wheel), Err(PhysicsError::ResourceNotFound(_))));
    assert!(matches!(world.destroy_joint(joint), Err(PhysicsError::ResourceNotFound(_))));
}

#[test]
fn test_clear() {
    let mut world = PhysicsWorld::new();
    let (_, _, def) = car(&mut world);
    world.create_joint(&JointDef::from(def)).unwrap();

    world.clear();
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.joint_count(), 0);
    assert!(world.get_events().is_empty());
}

#[test]
fn test_body_frames_and_types() {
    let mut body = RigidBody::new_static(Vector2::new(1.0, 2.0), 0.0);
    body.set_linear_velocity(Vector2::new(5.0, 0.0));
    body.set_angular_velocity(1.0);
    assert_eq!(body.get_linear_velocity(), Vector2::zero());
    assert_eq!(body.get_angular_velocity(), 0.0);

    body.set_body_type(RigidBodyType::Kinematic);
    body.set_angular_velocity(1.0);
    assert_eq!(body.get_angular_velocity(), 1.0);

    body.set_transform(Vector2::new(-1.0, 0.0), FRAC_PI_2);
    assert_eq!(body.get_angle(), FRAC_PI_2);
    let transform = body.get_transform();
    assert_eq!(transform.position, Vector2::new(-1.0, 0.0));
    assert_relative_eq!(transform.rotation.angle(), FRAC_PI_2, epsilon = 1e-6);
    assert_relative_eq!(body.get_world_point(Vector2::unit_x()), Vector2::new(-1.0, 1.0), epsilon = 1e-6);
    assert_relative_eq!(body.get_local_vector(Vector2::unit_y()), Vector2::unit_x(), epsilon = 1e-6);
}
