use log::trace;
use swivel_core::{
    math::position::BlockPos,
    side::{left_side, opposite_side, right_side},
    Facing, Identifier, RotationDirection, RotationScheme,
};

use super::rotation_registry::{RotationRegistry, ROTATION_SCHEMES};
use crate::grid::Grid;

const LEVER_FLAG: u8 = 0b1000;

/// Steps `value` one place around a cycle of length `modulus`.
const fn cycle(value: u8, modulus: u8, direction: RotationDirection) -> u8 {
    let value = value % modulus;
    match direction {
        RotationDirection::Clockwise => (value + 1) % modulus,
        RotationDirection::CounterClockwise => (value + modulus - 1) % modulus,
    }
}

/// Clockwise turns the cell, so the facing it stores turns the other way round.
fn four_way(metadata: u8, direction: RotationDirection) -> u8 {
    match direction {
        RotationDirection::Clockwise => left_side(metadata),
        RotationDirection::CounterClockwise => right_side(metadata),
    }
}

/// Bits 0-2 say where the lever is attached, bit 3 whether it is switched on.
/// Ceiling and floor mounts swap their two alignments, wall mounts go round.
fn lever(metadata: u8, direction: RotationDirection) -> u8 {
    if metadata > 15 {
        return metadata;
    }
    let flag = metadata & LEVER_FLAG;
    let mount = match (metadata & 0b111, direction) {
        (0, _) => 7,
        (7, _) => 0,
        (5, _) => 6,
        (6, _) => 5,
        (4, RotationDirection::Clockwise) => 1,
        (1, RotationDirection::CounterClockwise) => 4,
        (mount, RotationDirection::Clockwise) => mount + 1,
        (mount, RotationDirection::CounterClockwise) => mount - 1,
    };
    flag | mount
}

/// The metadata a cell with `scheme` takes after one turn in `direction`.
///
/// [`RotationScheme::Chest`] can't see its neighbours here and rotates like
/// [`RotationScheme::FourWay`]; use [`BlockRotator`] to have double chests handled.
pub fn rotate_metadata(scheme: RotationScheme, metadata: u8, direction: RotationDirection) -> u8 {
    match scheme {
        RotationScheme::Passthrough | RotationScheme::Prevented => metadata,
        RotationScheme::FourWay | RotationScheme::Chest => four_way(metadata, direction),
        RotationScheme::SixWay if metadata < 6 => cycle(metadata, 6, direction),
        RotationScheme::SixWay => metadata,
        RotationScheme::Rail if metadata < 2 => metadata ^ 1,
        RotationScheme::Rail => metadata,
        RotationScheme::Pumpkin => cycle(metadata, 4, direction),
        RotationScheme::Stairs => cycle(metadata, 8, direction),
        RotationScheme::Redstone => (metadata & !0b11) + cycle(metadata & 0b11, 4, direction),
        RotationScheme::Log => match direction {
            RotationDirection::Clockwise => (metadata % 12 + 4) % 12,
            RotationDirection::CounterClockwise => (metadata % 12 + 8) % 12,
        },
        RotationScheme::Slab => (metadata % 16 + 8) % 16,
        RotationScheme::Lever => lever(metadata, direction),
        RotationScheme::Sign => cycle(metadata, 16, direction),
    }
}

/// Rotates cells of a [`Grid`], looking their schemes up in a [`RotationRegistry`].
#[derive(Clone, Copy, Debug)]
pub struct BlockRotator<'a> {
    registry: &'a RotationRegistry,
}

impl Default for BlockRotator<'static> {
    fn default() -> Self {
        Self::new(&ROTATION_SCHEMES)
    }
}

impl<'a> BlockRotator<'a> {
    pub const fn new(registry: &'a RotationRegistry) -> Self {
        Self { registry }
    }

    pub const fn registry(&self) -> &'a RotationRegistry {
        self.registry
    }

    /// Computes the metadata the cell at `pos` should take and returns it, the caller
    /// writes it back. Half of a double chest is the exception: its partner is
    /// rewritten here, as the two halves have to stay aligned.
    ///
    /// Empty positions and unregistered types return the current metadata.
    pub fn rotate<G: Grid + ?Sized>(
        &self,
        grid: &mut G,
        pos: &BlockPos,
        direction: RotationDirection,
    ) -> u8 {
        let metadata = grid.cell_metadata(pos);
        let Some(kind) = grid.cell_type(pos).cloned() else {
            trace!("Nothing to rotate at {pos}");
            return metadata;
        };
        let scheme = self.registry.scheme(&kind);

        let rotated = match scheme {
            RotationScheme::Chest => Self::rotate_chest(grid, pos, &kind, metadata, direction),
            scheme => rotate_metadata(scheme, metadata, direction),
        };
        trace!("Rotating {kind} at {pos} ({scheme}, {direction:?}): {metadata} -> {rotated}");
        rotated
    }

    /// Like [`BlockRotator::rotate`], but also writes the result to `pos`.
    pub fn rotate_in_place<G: Grid + ?Sized>(
        &self,
        grid: &mut G,
        pos: &BlockPos,
        direction: RotationDirection,
    ) -> u8 {
        let rotated = self.rotate(grid, pos, direction);
        grid.set_cell_metadata(pos, rotated);
        rotated
    }

    fn rotate_chest<G: Grid + ?Sized>(
        grid: &mut G,
        pos: &BlockPos,
        kind: &Identifier,
        metadata: u8,
        direction: RotationDirection,
    ) -> u8 {
        let partner = Facing::HORIZONTAL
            .into_iter()
            .map(|facing| pos.offset(facing))
            .find(|neighbour| grid.cell_type(neighbour) == Some(kind));

        match partner {
            Some(partner) => {
                let flipped = opposite_side(metadata);
                trace!("Turning {kind} at {partner} along with {pos}");
                grid.set_cell_metadata(&partner, flipped);
                flipped
            }
            None => four_way(metadata, direction),
        }
    }
}
