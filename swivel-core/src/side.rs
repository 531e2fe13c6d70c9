//! Relation tables keyed by raw side codes.
//!
//! A side code is the canonical [`Facing`](crate::Facing) index (0-5, D-U-N-S-W-E). Call
//! sites that only carry the number, like block metadata, use these instead of going
//! through the enum. Every table agrees with the matching `Facing` rotation.

use crate::math::{boundingbox::BoundingBox, position::BlockPos};

/// Unit offset toward each side
pub const SIDE_COORD_MOD: [[i32; 3]; 6] = [
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
    [-1, 0, 0],
    [1, 0, 0],
];
/// Offset of the far corner of the neighbouring block on each side
pub const SIDE_COORD_AABB: [[i32; 3]; 6] = [
    [1, 0, 1],
    [1, 2, 1],
    [1, 1, 0],
    [1, 1, 2],
    [0, 1, 1],
    [2, 1, 1],
];

/// Quarter turn around Y, N => E => S => W
pub const SIDE_LEFT: [u8; 6] = [0, 1, 5, 4, 2, 3];
pub const SIDE_RIGHT: [u8; 6] = [0, 1, 4, 5, 3, 2];
pub const SIDE_OPPOSITE: [u8; 6] = [1, 0, 3, 2, 5, 4];
/// Quarter turn around X, N => D => S => U
pub const SIDE_ABOVE: [u8; 6] = [3, 2, 0, 1, 4, 5];
pub const SIDE_BELOW: [u8; 6] = [2, 3, 1, 0, 4, 5];

// Half turns
pub const SIDE_INVERT_X: [u8; 6] = [1, 0, 3, 2, 4, 5];
pub const SIDE_INVERT_Y: [u8; 6] = [0, 1, 3, 2, 5, 4];
pub const SIDE_INVERT_Z: [u8; 6] = [1, 0, 2, 3, 5, 4];

/// Codes outside 0-5 are passed through untouched.
#[inline]
fn relation(table: &[u8; 6], side: u8) -> u8 {
    table.get(side as usize).copied().unwrap_or(side)
}

pub fn left_side(side: u8) -> u8 {
    relation(&SIDE_LEFT, side)
}

pub fn right_side(side: u8) -> u8 {
    relation(&SIDE_RIGHT, side)
}

pub fn opposite_side(side: u8) -> u8 {
    relation(&SIDE_OPPOSITE, side)
}

pub fn above_side(side: u8) -> u8 {
    relation(&SIDE_ABOVE, side)
}

pub fn below_side(side: u8) -> u8 {
    relation(&SIDE_BELOW, side)
}

/// Coordinates of the neighbour on `side`. An invalid side leaves them unchanged.
pub fn adjacent_coordinates(x: i32, y: i32, z: i32, side: u8) -> [i32; 3] {
    match SIDE_COORD_MOD.get(side as usize) {
        Some([dx, dy, dz]) => [x + dx, y + dy, z + dz],
        None => [x, y, z],
    }
}

pub fn adjacent_bounding_box(pos: &BlockPos, side: u8) -> Option<BoundingBox> {
    let min = SIDE_COORD_MOD.get(side as usize)?;
    let max = SIDE_COORD_AABB.get(side as usize)?;
    let origin = pos.0;
    Some(BoundingBox::new(
        f64::from(origin.x + min[0]),
        f64::from(origin.y + min[1]),
        f64::from(origin.z + min[2]),
        f64::from(origin.x + max[0]),
        f64::from(origin.y + max[1]),
        f64::from(origin.z + max[2]),
    ))
}

/// Side code of the neighbour of `origin` that `target` lies toward.
/// Checks Y first, then Z, then X; equal positions give 6.
pub fn side_toward(origin: &BlockPos, target: &BlockPos) -> u8 {
    origin.facing_toward(target).index()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::vector3::Vector3, Axis, Facing};

    fn facing(side: u8) -> Facing {
        Facing::from_index(side).unwrap()
    }

    #[test]
    fn tables_agree_with_facing() {
        for side in 0..6u8 {
            let f = facing(side);
            assert_eq!(left_side(side), f.rotate_around(Axis::Y).index());
            assert_eq!(right_side(side), f.rotate_around_ccw(Axis::Y).index());
            assert_eq!(above_side(side), f.rotate_around(Axis::X).index());
            assert_eq!(below_side(side), f.rotate_around_ccw(Axis::X).index());
            assert_eq!(opposite_side(side), f.opposite().index());

            let [dx, dy, dz] = SIDE_COORD_MOD[side as usize];
            assert_eq!(Vector3::new(dx, dy, dz), f.direction_vec());

            assert_eq!(
                SIDE_INVERT_X[side as usize],
                f.rotate_x().rotate_x().index()
            );
            assert_eq!(
                SIDE_INVERT_Y[side as usize],
                f.rotate_y().rotate_y().index()
            );
            assert_eq!(
                SIDE_INVERT_Z[side as usize],
                f.rotate_z().rotate_z().index()
            );
        }
    }

    #[test]
    fn relations_are_mutual_inverses() {
        for side in 0..6u8 {
            assert_eq!(left_side(right_side(side)), side);
            assert_eq!(right_side(left_side(side)), side);
            assert_eq!(above_side(below_side(side)), side);
            assert_eq!(below_side(above_side(side)), side);
            assert_eq!(opposite_side(opposite_side(side)), side);
        }
    }

    #[test]
    fn invalid_sides_pass_through() {
        assert_eq!(left_side(6), 6);
        assert_eq!(opposite_side(200), 200);
        assert_eq!(adjacent_coordinates(1, 2, 3, 9), [1, 2, 3]);
        assert!(adjacent_bounding_box(&BlockPos::new(0, 0, 0), 6).is_none());
    }

    #[test]
    fn adjacent_box_covers_one_block() {
        let pos = BlockPos::new(4, 10, -3);
        for side in 0..6u8 {
            let bb = adjacent_bounding_box(&pos, side).unwrap();
            let [x, y, z] = adjacent_coordinates(4, 10, -3, side);
            assert_eq!(
                (bb.min_x, bb.min_y, bb.min_z),
                (f64::from(x), f64::from(y), f64::from(z))
            );
            assert_eq!(bb.max_x - bb.min_x, 1.0);
            assert_eq!(bb.max_y - bb.min_y, 1.0);
            assert_eq!(bb.max_z - bb.min_z, 1.0);
            assert!(bb.contains_block(&BlockPos::new(x, y, z)));
            assert!(!bb.contains_block(&pos));
        }
    }

    #[test]
    fn side_toward_prefers_vertical() {
        let origin = BlockPos::new(0, 0, 0);
        assert_eq!(side_toward(&origin, &BlockPos::new(3, 1, 3)), 1);
        assert_eq!(side_toward(&origin, &BlockPos::new(3, -1, 3)), 0);
        assert_eq!(side_toward(&origin, &BlockPos::new(3, 0, -2)), 2);
        assert_eq!(side_toward(&origin, &BlockPos::new(-1, 0, 0)), 4);
        assert_eq!(side_toward(&origin, &BlockPos::new(1, 0, 0)), 5);
        assert_eq!(side_toward(&origin, &origin), 6);
    }
}
