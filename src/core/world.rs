use crate::core::{
    BodyEvent, BodyEventType, BodyHandle, BodyStorage, EventQueue, JointEvent,
    JointEventType, JointHandle, JointStorage, WorldConfig,
};
use crate::bodies::RigidBody;
use crate::joints::{Joint, JointDef};
use crate::Result;

/// Owns bodies and the joints between them.
///
/// The world is the joint factory: it turns [`JointDef`]s into live [`Joint`]s
/// after checking them against its bodies and [`WorldConfig`]. It does not step a
/// simulation.
pub struct PhysicsWorld {
    /// All rigid bodies in the world
    bodies: BodyStorage<RigidBody>,

    /// All joints in the world
    joints: JointStorage<Joint>,

    /// Configuration for joint creation
    config: WorldConfig,

    /// Queue of world events
    events: EventQueue,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            joints: JointStorage::new(),
            config,
            events: EventQueue::new(),
        }
    }

    pub fn get_config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut WorldConfig {
        &mut self.config
    }

    /// Adds a rigid body to the world and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        log::debug!("added body {:?}", handle);

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });

        handle
    }

    /// Removes a rigid body from the world, destroying every joint attached to it
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody> {
        self.bodies.get_body(handle)?;

        for joint in self.joints_for_body(handle) {
            self.destroy_joint(joint)?;
        }

        let body = self.bodies.take_body(handle)?;
        log::debug!("removed body {:?}", handle);

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });

        Ok(body)
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// All bodies, for initializing definitions and querying joints
    pub fn bodies(&self) -> &BodyStorage<RigidBody> {
        &self.bodies
    }

    /// Creates a joint from a definition.
    ///
    /// The definition is copied; the caller keeps it and may re-read or reuse it.
    pub fn create_joint(&mut self, def: &JointDef) -> Result<JointHandle> {
        let joint = Joint::from_def(def, &self.bodies, &self.config)?;
        let kind = joint.kind();
        let bodies = *joint.bodies();

        let handle = self.joints.add(joint);
        log::debug!("created {} joint {:?} between {:?} and {:?}", kind.name(), handle, bodies[0], bodies[1]);

        self.events.add_joint_event(JointEvent {
            event_type: JointEventType::Created,
            joint: handle,
            kind,
            bodies,
        });

        Ok(handle)
    }

    /// Destroys a joint and returns it
    pub fn destroy_joint(&mut self, handle: JointHandle) -> Result<Joint> {
        let joint = self.joints.take_joint(handle)?;
        log::debug!("destroyed {} joint {:?}", joint.kind().name(), handle);

        self.events.add_joint_event(JointEvent {
            event_type: JointEventType::Destroyed,
            joint: handle,
            kind: joint.kind(),
            bodies: *joint.bodies(),
        });

        Ok(joint)
    }

    /// Gets a reference to a joint by its handle
    pub fn get_joint(&self, handle: JointHandle) -> Result<&Joint> {
        self.joints.get_joint(handle)
    }

    /// Gets a mutable reference to a joint by its handle
    pub fn get_joint_mut(&mut self, handle: JointHandle) -> Result<&mut Joint> {
        self.joints.get_joint_mut(handle)
    }

    /// Updates the suspension of a wheel joint, applying the parameter policy
    pub fn set_wheel_spring(&mut self, handle: JointHandle, frequency: f32, damping_ratio: f32) -> Result<()> {
        let policy = self.config.parameter_policy;
        self.joints.get_joint_mut(handle)?.set_spring(policy, frequency, damping_ratio)
    }

    /// Handles of all joints attached to a body
    pub fn joints_for_body(&self, body: BodyHandle) -> Vec<JointHandle> {
        self.joints
            .iter()
            .filter(|(_, joint)| joint.involves_body(body))
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Clears the world of all bodies, joints, and events
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.joints.clear();
        self.events.clear();
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
