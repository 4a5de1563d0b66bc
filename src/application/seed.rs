use crate::domain::{CellCoord, GridSize};

/// Linear indices of cells painted while editing, in paint order.
///
/// Repeats are kept; the universe treats a repeated index as one live cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedAccumulator {
    indices: Vec<u32>,
}

impl SeedAccumulator {
    /// Append the index of `cell`. Cells outside `grid` have no index and
    /// are not recorded.
    pub fn record(&mut self, grid: GridSize, cell: CellCoord) -> Option<u32> {
        let index = grid.index(cell)?;
        self.indices.push(index);
        Some(index)
    }

    pub fn reset(&mut self) {
        self.indices.clear();
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
