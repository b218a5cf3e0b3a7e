use std::collections::BTreeMap;
use std::fmt::Debug;
use crate::core::{BodyHandle, JointHandle};
use crate::error::PhysicsError;
use crate::Result;

/// A typed identifier minted by a [`HandleStorage`]
pub trait Handle: Copy + Ord + Debug {
    /// Builds a handle from its raw id
    fn from_raw(id: u32) -> Self;
}

/// Handle-keyed storage for physics objects.
///
/// Handles are never reused, so a stale handle from a removed item resolves to
/// nothing rather than to a newer item. Iteration is in handle order.
#[derive(Debug, Clone)]
pub struct HandleStorage<H, T> {
    items: BTreeMap<H, T>,
    next_id: u32,
}

/// Storage for physics bodies
pub type BodyStorage<T> = HandleStorage<BodyHandle, T>;

/// Storage for joints
pub type JointStorage<T> = HandleStorage<JointHandle, T>;

impl<H: Handle, T> HandleStorage<H, T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1, // 0 is never handed out
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> H {
        let handle = H::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    pub fn get(&self, handle: H) -> Option<&T> {
        self.items.get(&handle)
    }

    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    pub fn contains(&self, handle: H) -> bool {
        self.items.contains_key(&handle)
    }

    pub fn remove(&mut self, handle: H) -> Option<T> {
        self.items.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item. Handle ids keep counting up.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn handles(&self) -> Vec<H> {
        self.items.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (H, &mut T)> + '_ {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }
}

impl<H: Handle, T> Default for HandleStorage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BodyStorage<T> {
    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Removes a body by its handle, returning an error if not found
    pub fn take_body(&mut self, handle: BodyHandle) -> Result<T> {
        self.remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}

impl<T> JointStorage<T> {
    /// Gets a joint by its handle, returning an error if not found
    pub fn get_joint(&self, handle: JointHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Joint with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a joint by its handle, returning an error if not found
    pub fn get_joint_mut(&mut self, handle: JointHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Joint with handle {:?} not found", handle)))
    }

    /// Removes a joint by its handle, returning an error if not found
    pub fn take_joint(&mut self, handle: JointHandle) -> Result<T> {
        self.remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Joint with handle {:?} not found", handle)))
    }
}
