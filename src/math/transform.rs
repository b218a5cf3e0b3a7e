use crate::math::{Rotation, Vector2};
use nalgebra as na;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rigid transformation in the plane (position and rotation, no scale)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position of the frame origin in world space
    pub position: Vector2,

    /// Orientation of the frame
    pub rotation: Rotation,
}

impl Transform {
    #[inline]
    pub fn new(position: Vector2, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// The identity transform
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self::new(position, Rotation::identity())
    }

    /// Creates a transform from a position and an angle in radians
    #[inline]
    pub fn from_position_angle(position: Vector2, angle: f32) -> Self {
        Self::new(position, Rotation::from_angle(angle))
    }

    /// Maps a point from local space into world space
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        self.rotation.rotate_vector(point) + self.position
    }

    /// Maps a direction from local space into world space (ignores translation)
    #[inline]
    pub fn transform_direction(&self, direction: Vector2) -> Vector2 {
        self.rotation.rotate_vector(direction)
    }

    /// Maps a world-space point into local space
    #[inline]
    pub fn inverse_transform_point(&self, point: Vector2) -> Vector2 {
        self.rotation.inverse_rotate_vector(point - self.position)
    }

    /// Maps a world-space direction into local space
    #[inline]
    pub fn inverse_transform_direction(&self, direction: Vector2) -> Vector2 {
        self.rotation.inverse_rotate_vector(direction)
    }

    /// The inverse transform
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            position: -rotation.rotate_vector(self.position),
            rotation,
        }
    }

    /// Combines this transform with another, applying this one first
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            position: other.transform_point(self.position),
            rotation: other.rotation * self.rotation,
        }
    }

    pub fn to_nalgebra(&self) -> na::Isometry2<f32> {
        na::Isometry2::from_parts(
            na::Translation2::new(self.position.x, self.position.y),
            self.rotation.to_nalgebra(),
        )
    }

    pub fn from_nalgebra(iso: &na::Isometry2<f32>) -> Self {
        Self {
            position: Vector2::from_nalgebra(&iso.translation.vector),
            rotation: Rotation::from_nalgebra(&iso.rotation),
        }
    }
}
