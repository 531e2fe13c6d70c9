pub mod block;
pub mod grid;
pub mod traversal;

pub use block::rotation::BlockRotator;
pub use block::rotation_registry::{RotationRegistry, ROTATION_SCHEMES};
pub use grid::{Cell, Grid, MemoryGrid};
