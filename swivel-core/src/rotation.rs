use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Axis, Facing};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rotation scheme `{0}`")]
pub struct ParseSchemeError(pub String);

/// How the metadata of a kind of block changes when the block is rotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationScheme {
    /// Not registered, rotating leaves the metadata alone
    #[default]
    Passthrough,
    Prevented,
    FourWay,
    SixWay,
    Rail,
    Pumpkin,
    Stairs,
    Redstone,
    Log,
    Slab,
    Chest,
    Lever,
    Sign,
}

impl RotationScheme {
    pub const ALL: [RotationScheme; 13] = [
        RotationScheme::Passthrough,
        RotationScheme::Prevented,
        RotationScheme::FourWay,
        RotationScheme::SixWay,
        RotationScheme::Rail,
        RotationScheme::Pumpkin,
        RotationScheme::Stairs,
        RotationScheme::Redstone,
        RotationScheme::Log,
        RotationScheme::Slab,
        RotationScheme::Chest,
        RotationScheme::Lever,
        RotationScheme::Sign,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            RotationScheme::Passthrough => "passthrough",
            RotationScheme::Prevented => "prevented",
            RotationScheme::FourWay => "four_way",
            RotationScheme::SixWay => "six_way",
            RotationScheme::Rail => "rail",
            RotationScheme::Pumpkin => "pumpkin",
            RotationScheme::Stairs => "stairs",
            RotationScheme::Redstone => "redstone",
            RotationScheme::Log => "log",
            RotationScheme::Slab => "slab",
            RotationScheme::Chest => "chest",
            RotationScheme::Lever => "lever",
            RotationScheme::Sign => "sign",
        }
    }

    /// Whether the block takes part in rotation at all. A [`RotationScheme::Prevented`]
    /// block does, it just never changes.
    pub const fn can_rotate(self) -> bool {
        !matches!(self, RotationScheme::Passthrough)
    }
}

impl FromStr for RotationScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ParseSchemeError(s.to_string()))
    }
}

impl fmt::Display for RotationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub const fn reverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// A placed block that tracks its own orientation, e.g. a machine with a front face.
pub trait Rotatable {
    fn can_rotate(&self) -> bool;

    fn can_rotate_around(&self, axis: Axis) -> bool;

    fn rotate_around(&mut self, axis: Axis);

    /// Sets the facing directly. Returns `false` if the block refused it.
    fn rotate_directly_to(&mut self, facing: Facing) -> bool;

    fn facing(&self) -> Facing;
}
