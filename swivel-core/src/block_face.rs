use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::math::vector3::Vector3;

/// The face of a block as the host world reports it, e.g. the face a player clicked.
/// Has no notion of "no face"; see [`crate::Facing::Unknown`] for that.
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockFace {
    Bottom = 0,
    Top,
    North,
    South,
    West,
    East,
}

impl BlockFace {
    pub const VALUES: [BlockFace; 6] = [
        BlockFace::Bottom,
        BlockFace::Top,
        BlockFace::North,
        BlockFace::South,
        BlockFace::West,
        BlockFace::East,
    ];

    pub fn to_offset(&self) -> Vector3<i32> {
        match self {
            BlockFace::Bottom => (0, -1, 0),
            BlockFace::East => (1, 0, 0),
            BlockFace::North => (0, 0, -1),
            BlockFace::South => (0, 0, 1),
            BlockFace::Top => (0, 1, 0),
            BlockFace::West => (-1, 0, 0),
        }
        .into()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}
