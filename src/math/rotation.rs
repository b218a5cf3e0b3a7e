use crate::math::Vector2;
use nalgebra as na;
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A planar rotation stored as its cosine/sine pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rotation {
    /// Cosine of the angle
    pub c: f32,

    /// Sine of the angle
    pub s: f32,
}

impl Rotation {
    /// The identity rotation
    #[inline]
    pub fn identity() -> Self {
        Self { c: 1.0, s: 0.0 }
    }

    /// Creates a rotation from an angle in radians
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { c, s }
    }

    /// Returns the angle in radians, in the range [-PI, PI]
    #[inline]
    pub fn angle(&self) -> f32 {
        self.s.atan2(self.c)
    }

    /// Rotates a vector by this rotation
    #[inline]
    pub fn rotate_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(self.c * v.x - self.s * v.y, self.s * v.x + self.c * v.y)
    }

    /// Rotates a vector by the inverse of this rotation
    #[inline]
    pub fn inverse_rotate_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(self.c * v.x + self.s * v.y, -self.s * v.x + self.c * v.y)
    }

    /// The inverse rotation
    #[inline]
    pub fn inverse(&self) -> Self {
        Self { c: self.c, s: -self.s }
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::UnitComplex<f32> {
        na::UnitComplex::from_cos_sin_unchecked(self.c, self.s)
    }

    #[inline]
    pub fn from_nalgebra(r: &na::UnitComplex<f32>) -> Self {
        Self { c: r.cos_angle(), s: r.sin_angle() }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Rotation {
    type Output = Self;

    /// Composes two rotations, applying `rhs` first
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            c: self.c * rhs.c - self.s * rhs.s,
            s: self.s * rhs.c + self.c * rhs.s,
        }
    }
}
