use crate::core::{BodyHandle, JointHandle};
use crate::joints::JointKind;
use std::collections::VecDeque;

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body has been added to the world
    Added,

    /// A body has been removed from the world
    Removed,
}

/// An event related to a single body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyEvent {
    pub event_type: BodyEventType,
    pub body: BodyHandle,
}

/// Types of joint events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointEventType {
    /// A joint has been created from a definition
    Created,

    /// A joint has been destroyed, explicitly or because one of its bodies was removed
    Destroyed,
}

/// An event related to a joint
#[derive(Debug, Clone, PartialEq)]
pub struct JointEvent {
    pub event_type: JointEventType,
    pub joint: JointHandle,
    pub kind: JointKind,

    /// The two bodies the joint connects
    pub bodies: [BodyHandle; 2],
}

/// A queue of world events, drained by the caller
#[derive(Debug, Default)]
pub struct EventQueue {
    body_events: VecDeque<BodyEvent>,
    joint_events: VecDeque<JointEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.body_events.push_back(event);
    }

    pub fn add_joint_event(&mut self, event: JointEvent) {
        self.joint_events.push_back(event);
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Gets the next joint event from the queue
    pub fn next_joint_event(&mut self) -> Option<JointEvent> {
        self.joint_events.pop_front()
    }

    pub fn has_body_events(&self) -> bool {
        !self.body_events.is_empty()
    }

    pub fn has_joint_events(&self) -> bool {
        !self.joint_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.body_events.is_empty() && self.joint_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.body_events.clear();
        self.joint_events.clear();
    }

    /// Gets all joint events of a specific type
    pub fn get_joint_events_of_type(&self, event_type: JointEventType) -> Vec<&JointEvent> {
        self.joint_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all joint events involving a specific body
    pub fn get_joint_events_for_body(&self, body: BodyHandle) -> Vec<&JointEvent> {
        self.joint_events
            .iter()
            .filter(|e| e.bodies.contains(&body))
            .collect()
    }
}
