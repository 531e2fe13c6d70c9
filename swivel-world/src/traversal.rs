use swivel_core::{
    math::{position::BlockPos, relative::RelativePosition},
    Facing, Identifier,
};

use crate::grid::Grid;

pub fn cell_exists_toward<G: Grid + ?Sized>(grid: &G, pos: &BlockPos, facing: Facing) -> bool {
    grid.cell_exists(&pos.offset(facing))
}

/// The type of the neighbour on `facing`, `None` if that position is empty.
pub fn adjacent_cell_type<'g, G: Grid + ?Sized>(
    grid: &'g G,
    pos: &BlockPos,
    facing: Facing,
) -> Option<&'g Identifier> {
    grid.cell_type(&pos.offset(facing))
}

/// The neighbours of `pos` that hold a cell, each oriented toward the way it lies
/// from `pos`. Same order as [`RelativePosition::adjacent`].
pub fn existing_neighbours<G: Grid + ?Sized>(
    grid: &G,
    pos: &RelativePosition,
    include_vertical: bool,
) -> Vec<RelativePosition> {
    pos.adjacent(include_vertical)
        .into_iter()
        .filter(|neighbour| grid.cell_exists(&neighbour.block_pos()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;

    fn grid() -> MemoryGrid {
        let mut grid = MemoryGrid::new();
        grid.place(BlockPos::new(1, 0, 0), Identifier::vanilla("furnace"), 2);
        grid.place(BlockPos::new(0, 0, -1), Identifier::vanilla("chest"), 3);
        grid.place(BlockPos::new(0, 1, 0), Identifier::vanilla("hopper"), 0);
        grid.place(BlockPos::new(1, 1, 1), Identifier::vanilla("stone"), 0);
        grid
    }

    #[test]
    fn looks_at_neighbours() {
        let grid = grid();
        let origin = BlockPos::new(0, 0, 0);

        assert!(cell_exists_toward(&grid, &origin, Facing::East));
        assert!(!cell_exists_toward(&grid, &origin, Facing::West));
        assert!(!cell_exists_toward(&grid, &origin, Facing::Unknown));
        assert_eq!(
            adjacent_cell_type(&grid, &origin, Facing::North),
            Some(&Identifier::vanilla("chest"))
        );
        assert_eq!(adjacent_cell_type(&grid, &origin, Facing::Down), None);
    }

    #[test]
    fn filters_empty_neighbours() {
        let grid = grid();
        let origin = RelativePosition::new(0, 0, 0);

        assert_eq!(
            existing_neighbours(&grid, &origin, false),
            [
                RelativePosition::with_orientation(1, 0, 0, Facing::East),
                RelativePosition::with_orientation(0, 0, -1, Facing::North),
            ]
        );

        let all = existing_neighbours(&grid, &origin, true);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], RelativePosition::with_orientation(0, 1, 0, Facing::Up));
    }
}
