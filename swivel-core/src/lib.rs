pub mod block_face;
pub mod facing;
pub mod identifier;
pub mod math;
pub mod rotation;
pub mod side;

pub use block_face::BlockFace;
pub use facing::{Axis, Facing};
pub use identifier::Identifier;
pub use rotation::{Rotatable, RotationDirection, RotationScheme};
