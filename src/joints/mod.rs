mod joint_def;
mod joint;
mod wheel;
mod revolute;
mod prismatic;

pub use self::joint_def::{JointBase, JointDef, JointDefinition, JointKind};
pub use self::joint::Joint;
pub use self::wheel::WheelJointDef;
pub use self::revolute::RevoluteJointDef;
pub use self::prismatic::PrismaticJointDef;

