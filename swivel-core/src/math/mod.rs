pub mod boundingbox;
pub mod placement;
pub mod position;
pub mod relative;
pub mod vector3;

/// Wraps an angle in degrees into `-180.0..180.0`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else if wrapped < -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
