//! Grid dimensions and cell coordinates.

/// A cell position in grid space. Signed, because rasterized strokes can
/// land outside the grid; use [`GridSize::index`] to get a linear index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: i32,
    pub row: i32,
}

impl CellCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell containing pixel `(x, y)` for the given cell pitch (cell size + 1).
    pub fn from_pixel(x: f32, y: f32, pitch: u32) -> Self {
        let pitch = pitch as f32;
        Self {
            col: (x / pitch).floor() as i32,
            row: (y / pitch).floor() as i32,
        }
    }
}

/// Width and height of one automaton instance, both strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Returns `None` unless both dimensions are positive.
    pub fn try_new(width: i32, height: i32) -> Option<Self> {
        (width > 0 && height > 0).then(|| Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.width
            && (cell.row as u32) < self.height
    }

    /// Linear index `row * width + col`, or `None` outside the grid.
    pub fn index(&self, cell: CellCoord) -> Option<u32> {
        self.contains(cell)
            .then(|| cell.row as u32 * self.width + cell.col as u32)
    }

    /// Inverse of [`GridSize::index`].
    pub fn coord(&self, index: u32) -> CellCoord {
        CellCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Iterate every cell in row-major order with its linear index
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, CellCoord)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| (row * self.width + col, CellCoord::new(col as i32, row as i32)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(GridSize::try_new(0, 10).is_none());
        assert!(GridSize::try_new(10, -1).is_none());
        assert!(GridSize::try_new(1, 1).is_some());
    }

    #[test]
    fn test_index_round_trip() {
        let grid = GridSize::try_new(7, 5).unwrap();
        for (idx, cell) in grid.iter_cells() {
            assert_eq!(grid.index(cell), Some(idx));
            assert_eq!(grid.coord(idx), cell);
        }
        assert_eq!(grid.iter_cells().count(), grid.cell_count());
    }

    #[test]
    fn test_out_of_grid_has_no_index() {
        let grid = GridSize::try_new(4, 4).unwrap();
        assert_eq!(grid.index(CellCoord::new(-1, 0)), None);
        assert_eq!(grid.index(CellCoord::new(4, 0)), None);
        assert_eq!(grid.index(CellCoord::new(0, 4)), None);
        assert_eq!(grid.index(CellCoord::new(3, 3)), Some(15));
    }

    #[test]
    fn test_from_pixel_floors_negative() {
        assert_eq!(CellCoord::from_pixel(0.0, 5.9, 6), CellCoord::new(0, 0));
        assert_eq!(CellCoord::from_pixel(6.0, 12.0, 6), CellCoord::new(1, 2));
        assert_eq!(CellCoord::from_pixel(-0.5, -6.5, 6), CellCoord::new(-1, -2));
    }
}
