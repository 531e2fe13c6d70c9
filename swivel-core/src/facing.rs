use std::{fmt, str::FromStr};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{block_face::BlockFace, math::vector3::Vector3};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFacingError {
    #[error("Unknown facing `{0}`")]
    UnknownFacing(String),
    #[error("Unknown axis `{0}`")]
    UnknownAxis(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Axis::X),
            'y' | 'Y' => Some(Axis::Y),
            'z' | 'Z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl FromStr for Axis {
    type Err = ParseFacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::from_char(c),
            _ => None,
        }
        .ok_or_else(|| ParseFacingError::UnknownAxis(s.to_string()))
    }
}

/// One of the six axis aligned directions a block can face, or [`Facing::Unknown`]
/// when a block has no orientation.
///
/// The discriminant is the canonical index (D-U-N-S-W-E, then Unknown) and is also
/// the persisted form: a facing is serialized as a single byte.
#[derive(
    FromPrimitive, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
#[repr(u8)]
pub enum Facing {
    Down = 0,
    Up,
    North,
    South,
    West,
    East,
    #[default]
    Unknown,
}

const ALL: [Facing; 7] = [
    Facing::Down,
    Facing::Up,
    Facing::North,
    Facing::South,
    Facing::West,
    Facing::East,
    Facing::Unknown,
];

/// Index of the opposite facing, by canonical index
const OPPOSITES: [u8; 7] = [1, 0, 3, 2, 5, 4, 6];

impl Facing {
    /// All real facings in D-U-N-S-W-E order
    pub const VALUES: [Facing; 6] = [
        Facing::Down,
        Facing::Up,
        Facing::North,
        Facing::South,
        Facing::West,
        Facing::East,
    ];

    /// The four facings that lie in the horizontal plane, in N-S-W-E order
    pub const HORIZONTAL: [Facing; 4] = [Facing::North, Facing::South, Facing::West, Facing::East];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_u8(index)
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn opposite(self) -> Self {
        ALL[OPPOSITES[self as usize] as usize]
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(
            self,
            Facing::North | Facing::South | Facing::West | Facing::East
        )
    }

    pub const fn axis(self) -> Option<Axis> {
        match self {
            Facing::Down | Facing::Up => Some(Axis::Y),
            Facing::North | Facing::South => Some(Axis::Z),
            Facing::West | Facing::East => Some(Axis::X),
            Facing::Unknown => None,
        }
    }

    /// Rotates this facing clockwise around `axis`. Facings lying on the axis itself
    /// are returned unchanged.
    pub const fn rotate_around(self, axis: Axis) -> Self {
        match axis {
            Axis::X => self.rotate_x(),
            Axis::Y => self.rotate_y(),
            Axis::Z => self.rotate_z(),
        }
    }

    /// Exact inverse of [`Facing::rotate_around`].
    pub const fn rotate_around_ccw(self, axis: Axis) -> Self {
        match axis {
            Axis::X => self.rotate_x_ccw(),
            Axis::Y => self.rotate_y_ccw(),
            Axis::Z => self.rotate_z_ccw(),
        }
    }

    /// Rotates around an axis given by name. An unrecognised axis yields [`Facing::Unknown`].
    pub const fn rotate_around_char(self, axis: char) -> Self {
        match Axis::from_char(axis) {
            Some(axis) => self.rotate_around(axis),
            None => Facing::Unknown,
        }
    }

    /// NORTH => EAST => SOUTH => WEST => NORTH
    pub const fn rotate_y(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
            other => other,
        }
    }

    /// NORTH => WEST => SOUTH => EAST => NORTH
    pub const fn rotate_y_ccw(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
            other => other,
        }
    }

    /// NORTH => DOWN => SOUTH => UP => NORTH
    pub const fn rotate_x(self) -> Self {
        match self {
            Facing::North => Facing::Down,
            Facing::Down => Facing::South,
            Facing::South => Facing::Up,
            Facing::Up => Facing::North,
            other => other,
        }
    }

    pub const fn rotate_x_ccw(self) -> Self {
        match self {
            Facing::North => Facing::Up,
            Facing::Up => Facing::South,
            Facing::South => Facing::Down,
            Facing::Down => Facing::North,
            other => other,
        }
    }

    /// EAST => DOWN => WEST => UP => EAST
    pub const fn rotate_z(self) -> Self {
        match self {
            Facing::East => Facing::Down,
            Facing::Down => Facing::West,
            Facing::West => Facing::Up,
            Facing::Up => Facing::East,
            other => other,
        }
    }

    pub const fn rotate_z_ccw(self) -> Self {
        match self {
            Facing::East => Facing::Up,
            Facing::Up => Facing::West,
            Facing::West => Facing::Down,
            Facing::Down => Facing::East,
            other => other,
        }
    }

    /// Unit vector pointing in this direction, zero for [`Facing::Unknown`].
    pub fn direction_vec(self) -> Vector3<i32> {
        match self {
            Facing::Down => (0, -1, 0),
            Facing::Up => (0, 1, 0),
            Facing::North => (0, 0, -1),
            Facing::South => (0, 0, 1),
            Facing::West => (-1, 0, 0),
            Facing::East => (1, 0, 0),
            Facing::Unknown => (0, 0, 0),
        }
        .into()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Up => "up",
            Facing::North => "north",
            Facing::South => "south",
            Facing::West => "west",
            Facing::East => "east",
            Facing::Unknown => "unknown",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL.into_iter()
            .find(|facing| facing.name().eq_ignore_ascii_case(name))
    }

    /// `None` for [`Facing::Unknown`], which has no block face.
    pub fn to_block_face(self) -> Option<BlockFace> {
        BlockFace::from_u8(self.index())
    }
}

impl From<BlockFace> for Facing {
    fn from(face: BlockFace) -> Self {
        match face {
            BlockFace::Bottom => Facing::Down,
            BlockFace::Top => Facing::Up,
            BlockFace::North => Facing::North,
            BlockFace::South => Facing::South,
            BlockFace::West => Facing::West,
            BlockFace::East => Facing::East,
        }
    }
}

/// Out of range bytes read back as [`Facing::Unknown`]
impl From<u8> for Facing {
    fn from(index: u8) -> Self {
        Self::from_index(index).unwrap_or_default()
    }
}

impl From<Facing> for u8 {
    fn from(facing: Facing) -> Self {
        facing.index()
    }
}

impl FromStr for Facing {
    type Err = ParseFacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseFacingError::UnknownFacing(s.to_string()))
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[test]
    fn canonical_indices() {
        for (index, facing) in ALL.into_iter().enumerate() {
            assert_eq!(facing.index() as usize, index);
            assert_eq!(Facing::from_index(index as u8), Some(facing));
        }
        assert_eq!(Facing::from_index(7), None);
    }

    #[test]
    fn opposite_is_involution() {
        for facing in Facing::VALUES {
            assert_ne!(facing.opposite(), facing);
            assert_eq!(facing.opposite().opposite(), facing);
            assert_eq!(facing.opposite().direction_vec(), -facing.direction_vec());
        }
        assert_eq!(Facing::Unknown.opposite(), Facing::Unknown);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for facing in ALL {
            for axis in AXES {
                let mut rotated = facing;
                for _ in 0..4 {
                    rotated = rotated.rotate_around(axis);
                }
                assert_eq!(rotated, facing, "{facing} around {axis:?}");
            }
        }
    }

    #[test]
    fn counter_clockwise_inverts_clockwise() {
        for facing in ALL {
            for axis in AXES {
                assert_eq!(facing.rotate_around(axis).rotate_around_ccw(axis), facing);
                assert_eq!(facing.rotate_around_ccw(axis).rotate_around(axis), facing);
            }
        }
    }

    #[test]
    fn facings_on_the_axis_are_unaffected() {
        for facing in Facing::VALUES {
            for axis in AXES {
                let rotated = facing.rotate_around(axis);
                if facing.axis() == Some(axis) {
                    assert_eq!(rotated, facing);
                } else {
                    assert_ne!(rotated, facing);
                    assert_ne!(rotated.axis(), Some(axis));
                }
            }
        }
    }

    #[test]
    fn rotation_cycles() {
        let y = [Facing::North, Facing::East, Facing::South, Facing::West];
        let x = [Facing::North, Facing::Down, Facing::South, Facing::Up];
        let z = [Facing::East, Facing::Down, Facing::West, Facing::Up];
        for (axis, cycle) in [(Axis::Y, y), (Axis::X, x), (Axis::Z, z)] {
            for i in 0..4 {
                assert_eq!(cycle[i].rotate_around(axis), cycle[(i + 1) % 4]);
            }
        }
        assert_eq!(Facing::Up.rotate_y(), Facing::Up);
        assert_eq!(Facing::North.rotate_y_ccw(), Facing::West);
    }

    #[test]
    fn unknown_axis_yields_unknown() {
        assert_eq!(Facing::North.rotate_around_char('w'), Facing::Unknown);
        assert_eq!(Facing::North.rotate_around_char('y'), Facing::East);
        assert_eq!(Facing::Unknown.rotate_around_char('x'), Facing::Unknown);
        assert_eq!(
            "q".parse::<Axis>(),
            Err(ParseFacingError::UnknownAxis("q".to_string()))
        );
        assert_eq!("Z".parse::<Axis>(), Ok(Axis::Z));
    }

    #[test]
    fn block_face_conversion() {
        for face in BlockFace::VALUES {
            let facing = Facing::from(face);
            assert_eq!(facing.index(), face.index());
            assert_eq!(facing.to_block_face(), Some(face));
            assert_eq!(facing.direction_vec(), face.to_offset());
        }
        assert_eq!(Facing::Unknown.to_block_face(), None);
    }

    #[test]
    fn names() {
        assert_eq!(Facing::West.to_string(), "west");
        assert_eq!("EAST".parse::<Facing>(), Ok(Facing::East));
        assert_eq!("unknown".parse::<Facing>(), Ok(Facing::Unknown));
        assert!("sideways".parse::<Facing>().is_err());
    }

    #[test]
    fn serializes_as_index_byte() {
        assert_eq!(serde_json::to_string(&Facing::South).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Facing>("4").unwrap(), Facing::West);
        assert_eq!(serde_json::from_str::<Facing>("42").unwrap(), Facing::Unknown);
    }
}
