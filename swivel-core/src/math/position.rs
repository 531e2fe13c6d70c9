use std::fmt;

use serde::{Deserialize, Serialize};

use super::vector3::Vector3;
use crate::Facing;

/// Integer grid coordinate of a single block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn offset(&self, facing: Facing) -> Self {
        self.offset_by(facing, 1)
    }

    pub fn offset_by(&self, facing: Facing, distance: i32) -> Self {
        Self(self.0.wrapping_add(facing.direction_vec().wrapping_scale(distance)))
    }

    /// The facing of the neighbour of `self` that `other` lies toward, checking the
    /// Y axis first, then Z, then X. [`Facing::Unknown`] when both are the same block.
    pub fn facing_toward(&self, other: &BlockPos) -> Facing {
        let (from, to) = (self.0, other.0);
        if to.y > from.y {
            Facing::Up
        } else if to.y < from.y {
            Facing::Down
        } else if to.z > from.z {
            Facing::South
        } else if to.z < from.z {
            Facing::North
        } else if to.x > from.x {
            Facing::East
        } else if to.x < from.x {
            Facing::West
        } else {
            Facing::Unknown
        }
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from(value: (i32, i32, i32)) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
