mod vector;
mod transform;
mod rotation;

pub use vector::Vector2;
pub use transform::Transform;
pub use rotation::Rotation;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;
