use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use swivel_core::{math::position::BlockPos, Identifier};

/// Block storage owned by the host. Rotation only ever reads types and metadata and
/// writes metadata back; it never places or removes blocks.
pub trait Grid {
    /// `None` when there is no block at `pos`
    fn cell_type(&self, pos: &BlockPos) -> Option<&Identifier>;

    fn cell_metadata(&self, pos: &BlockPos) -> u8;

    fn set_cell_metadata(&mut self, pos: &BlockPos, metadata: u8);

    fn cell_exists(&self, pos: &BlockPos) -> bool {
        self.cell_type(pos).is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: Identifier,
    pub metadata: u8,
}

/// A sparse grid kept in memory, positions without a cell are empty.
#[derive(Clone, Debug, Default)]
pub struct MemoryGrid {
    cells: HashMap<BlockPos, Cell>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a cell, returning the one it replaced.
    pub fn place(&mut self, pos: BlockPos, kind: Identifier, metadata: u8) -> Option<Cell> {
        self.cells.insert(pos, Cell { kind, metadata })
    }

    pub fn remove(&mut self, pos: &BlockPos) -> Option<Cell> {
        self.cells.remove(pos)
    }

    pub fn get(&self, pos: &BlockPos) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Grid for MemoryGrid {
    fn cell_type(&self, pos: &BlockPos) -> Option<&Identifier> {
        self.cells.get(pos).map(|cell| &cell.kind)
    }

    fn cell_metadata(&self, pos: &BlockPos) -> u8 {
        self.cells.get(pos).map_or(0, |cell| cell.metadata)
    }

    /// Writes to empty positions are dropped.
    fn set_cell_metadata(&mut self, pos: &BlockPos, metadata: u8) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.metadata = metadata;
        }
    }
}
