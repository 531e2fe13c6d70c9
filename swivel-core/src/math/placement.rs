use std::f32::consts::PI;

use super::{vector3::Vector3, wrap_degrees};
use crate::Facing;

/// Radius around the centre of a face inside which a hit selects the face itself
const FACE_CENTER_RADIUS: f32 = 0.16;

/// The horizontal facing a block placed by someone looking along `yaw` should take,
/// so that its front points back at the placer.
pub fn place_facing_from_yaw(yaw: f32) -> Facing {
    let quadrant = (f64::from(wrap_degrees(yaw)) * 4.0 / 360.0 + 0.5).floor() as i32 & 3;
    match quadrant {
        0 => Facing::North,
        1 => Facing::East,
        2 => Facing::South,
        _ => Facing::West,
    }
}

/// Picks a side code from where a face was hit. Hits near the centre select the side
/// opposite the hit face, hits near an edge select the horizontal side that edge
/// points to. `hit` is relative to the block, each component in `0.0..=1.0`.
pub fn micro_block_angle(side: u8, hit: Vector3<f32>) -> u8 {
    if side > 5 {
        return side;
    }
    let (x, y) = match side >> 1 {
        0 => (hit.x, hit.z),
        1 => (hit.x, hit.y),
        _ => (hit.y, hit.z),
    };
    let (x, y) = (x - 0.5, y - 0.5);

    if x * x + y * y <= FACE_CENTER_RADIUS * FACE_CENTER_RADIUS {
        return side ^ 1;
    }

    let octant = ((x.atan2(y) + PI) * 4.0 / PI) as i32;
    match ((octant + 1) & 7) >> 1 {
        0 => 2,
        1 => 4,
        2 => 3,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_quadrants() {
        assert_eq!(place_facing_from_yaw(0.0), Facing::North);
        assert_eq!(place_facing_from_yaw(90.0), Facing::East);
        assert_eq!(place_facing_from_yaw(180.0), Facing::South);
        assert_eq!(place_facing_from_yaw(-90.0), Facing::West);
        assert_eq!(place_facing_from_yaw(270.0), Facing::West);
        assert_eq!(place_facing_from_yaw(44.0), Facing::North);
        assert_eq!(place_facing_from_yaw(46.0), Facing::East);
        assert_eq!(place_facing_from_yaw(-720.0), Facing::North);
    }

    #[test]
    fn center_hit_selects_opposite_side() {
        assert_eq!(micro_block_angle(1, Vector3::new(0.5, 1.0, 0.5)), 0);
        assert_eq!(micro_block_angle(2, Vector3::new(0.55, 0.5, 0.0)), 3);
        assert_eq!(micro_block_angle(5, Vector3::new(1.0, 0.45, 0.5)), 4);
    }

    #[test]
    fn edge_hit_selects_edge_side() {
        assert_eq!(micro_block_angle(1, Vector3::new(0.5, 1.0, 0.0)), 2);
        assert_eq!(micro_block_angle(1, Vector3::new(0.5, 1.0, 1.0)), 3);
        assert_eq!(micro_block_angle(1, Vector3::new(0.0, 1.0, 0.5)), 4);
        assert_eq!(micro_block_angle(1, Vector3::new(1.0, 1.0, 0.5)), 5);
    }

    #[test]
    fn invalid_side_passes_through() {
        assert_eq!(micro_block_angle(7, Vector3::new(0.0, 0.0, 0.0)), 7);
    }
}
