use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use super::{position::BlockPos, vector3::Vector3};
use crate::{side::SIDE_COORD_MOD, Facing, Rotatable};

/// A block coordinate paired with the direction an observer standing there faces.
///
/// Movement methods take the observer's view: `move_right` on a position facing
/// south moves toward -X, on one facing east toward +Z. They mutate in place and
/// return `&mut Self` so calls can be chained.
///
/// Equality includes the orientation, ordering only looks at `(x, y, z)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativePosition {
    #[serde(rename = "bp_i")]
    pub x: i32,
    #[serde(rename = "bp_j")]
    pub y: i32,
    #[serde(rename = "bp_k")]
    pub z: i32,
    #[serde(rename = "bp_dir", default)]
    pub orientation: Facing,
}

impl RelativePosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self::with_orientation(x, y, z, Facing::Unknown)
    }

    pub const fn with_orientation(x: i32, y: i32, z: i32, orientation: Facing) -> Self {
        Self {
            x,
            y,
            z,
            orientation,
        }
    }

    /// Takes the orientation a rotatable block has recorded for itself.
    pub fn from_rotatable<R: Rotatable + ?Sized>(pos: BlockPos, block: &R) -> Self {
        Self::with_orientation(pos.0.x, pos.0.y, pos.0.z, block.facing())
    }

    pub fn from_nbt(bytes: &[u8]) -> Result<Self, fastnbt::error::Error> {
        fastnbt::from_bytes(bytes)
    }

    pub fn to_nbt(&self) -> Result<Vec<u8>, fastnbt::error::Error> {
        fastnbt::to_bytes(self)
    }

    pub const fn copy_with(&self, orientation: Facing) -> Self {
        Self::with_orientation(self.x, self.y, self.z, orientation)
    }

    pub fn set_orientation(&mut self, orientation: Facing) -> &mut Self {
        self.orientation = orientation;
        self
    }

    pub const fn block_pos(&self) -> BlockPos {
        BlockPos::new(self.x, self.y, self.z)
    }

    /// Coordinates wrap around at the `i32` limits.
    fn translate(&mut self, delta: Vector3<i32>) -> &mut Self {
        self.x = self.x.wrapping_add(delta.x);
        self.y = self.y.wrapping_add(delta.y);
        self.z = self.z.wrapping_add(delta.z);
        self
    }

    pub fn step(&mut self, direction: Facing) -> &mut Self {
        self.step_by(direction, 1)
    }

    pub fn step_by(&mut self, direction: Facing, distance: i32) -> &mut Self {
        self.translate(direction.direction_vec().wrapping_scale(distance))
    }

    /// Steps toward a raw side code. Codes outside 0-5 leave the position as is.
    pub fn step_side(&mut self, side: u8, distance: i32) -> &mut Self {
        match SIDE_COORD_MOD.get(side as usize) {
            Some(&[dx, dy, dz]) => {
                self.translate(Vector3::new(dx, dy, dz).wrapping_scale(distance))
            }
            None => self,
        }
    }

    pub fn move_forwards(&mut self, step: i32) -> &mut Self {
        self.step_by(self.orientation, step)
    }

    pub fn move_backwards(&mut self, step: i32) -> &mut Self {
        self.move_forwards(-step)
    }

    pub fn move_right(&mut self, step: i32) -> &mut Self {
        self.translate(right_of(self.orientation).wrapping_scale(step))
    }

    pub fn move_left(&mut self, step: i32) -> &mut Self {
        self.move_right(-step)
    }

    pub fn move_up(&mut self, step: i32) -> &mut Self {
        self.translate(up_of(self.orientation).wrapping_scale(step))
    }

    pub fn move_down(&mut self, step: i32) -> &mut Self {
        self.move_up(-step)
    }

    /// The unit neighbours in E-W-S-N(-U-D) order, each facing away from `self`.
    pub fn adjacent(&self, include_vertical: bool) -> Vec<RelativePosition> {
        const HORIZONTAL: [Facing; 4] =
            [Facing::East, Facing::West, Facing::South, Facing::North];
        const VERTICAL: [Facing; 2] = [Facing::Up, Facing::Down];

        let vertical: &[Facing] = if include_vertical { &VERTICAL } else { &[] };
        HORIZONTAL
            .iter()
            .chain(vertical)
            .map(|&facing| *self.copy_with(facing).move_forwards(1))
            .collect()
    }

    /// Which facing points from `from` to `to`, provided they differ along exactly
    /// one axis. Anything else, including equal positions, is [`Facing::Unknown`].
    pub fn classify_direction(from: &BlockPos, to: &BlockPos) -> Facing {
        use Ordering::{Equal, Greater, Less};

        let (from, to) = (from.0, to.0);
        match (to.y.cmp(&from.y), to.z.cmp(&from.z), to.x.cmp(&from.x)) {
            (Greater, Equal, Equal) => Facing::Up,
            (Less, Equal, Equal) => Facing::Down,
            (Equal, Greater, Equal) => Facing::South,
            (Equal, Less, Equal) => Facing::North,
            (Equal, Equal, Greater) => Facing::East,
            (Equal, Equal, Less) => Facing::West,
            _ => Facing::Unknown,
        }
    }

    /// Component-wise minimum, without an orientation. Unlike [`Ord::min`] this
    /// mixes coordinates of both positions.
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum, without an orientation
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

/// World offset of one step to the observer's right
fn right_of(orientation: Facing) -> Vector3<i32> {
    match orientation {
        Facing::Up | Facing::South => (-1, 0, 0),
        Facing::Down | Facing::North => (1, 0, 0),
        Facing::East => (0, 0, 1),
        Facing::West => (0, 0, -1),
        Facing::Unknown => (0, 0, 0),
    }
    .into()
}

/// World offset of one step up from the observer's point of view
fn up_of(orientation: Facing) -> Vector3<i32> {
    match orientation {
        Facing::North | Facing::South | Facing::West | Facing::East => (0, 1, 0),
        Facing::Up => (0, 0, -1),
        Facing::Down => (0, 0, 1),
        Facing::Unknown => (0, 0, 0),
    }
    .into()
}

impl From<BlockPos> for RelativePosition {
    fn from(pos: BlockPos) -> Self {
        Self::new(pos.0.x, pos.0.y, pos.0.z)
    }
}

impl PartialOrd for RelativePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RelativePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x, self.y, self.z).cmp(&(other.x, other.y, other.z))
    }
}

impl fmt::Display for RelativePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {};{}}}",
            self.x, self.y, self.z, self.orientation
        )
    }
}
