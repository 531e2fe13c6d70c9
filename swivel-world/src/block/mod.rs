pub mod rotation;
pub mod rotation_registry;

pub use rotation::rotate_metadata;
