mod canvas;
mod panel;
mod surface;

pub use canvas::Canvas;
pub use panel::{draw_canvas, draw_controls};
pub use surface::Surface;

use macroquad::color::Color;
use crate::domain::{CellCoord, GridSize, codec};

/// Colors used on the drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub grid: Color,
    pub alive: Color,
    pub dead: Color,
}

/// Paints grid lines and cell state onto a [`Surface`].
///
/// Cells sit on a pitch of `cell_size + 1` pixels: one grid line pixel
/// followed by `cell_size` pixels of fill.
#[derive(Clone, Debug)]
pub struct Renderer {
    cell_size: u32,
    palette: Palette,
}

impl Renderer {
    pub fn new(cell_size: u32, palette: Palette) -> Self {
        Self { cell_size, palette }
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance between adjacent cell origins
    pub const fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Surface size needed to show `grid`, including the closing grid line
    pub fn canvas_size(&self, grid: GridSize) -> (u32, u32) {
        (
            self.pitch() * grid.width() + 1,
            self.pitch() * grid.height() + 1,
        )
    }

    /// Stroke all grid lines in one path
    pub fn draw_grid(&self, surface: &mut impl Surface, grid: GridSize) {
        let (width, height) = surface.size();
        let pitch = self.pitch();

        surface.begin_path();
        surface.set_stroke_color(self.palette.grid);

        for i in 0..=grid.width() {
            let x = (i * pitch) as f32;
            surface.move_to(x, 0.0);
            surface.line_to(x, height as f32);
        }

        for i in 0..=grid.height() {
            let y = (i * pitch) as f32;
            surface.move_to(0.0, y);
            surface.line_to(width as f32, y);
        }

        surface.stroke();
    }

    fn fill_cell(&self, surface: &mut impl Surface, cell: CellCoord) {
        let pitch = self.pitch() as f32;
        let size = self.cell_size as f32;
        surface.fill_rect(
            cell.col as f32 * pitch + 1.0,
            cell.row as f32 * pitch + 1.0,
            size,
            size,
        );
    }

    /// Fill the given cells in the alive color (manual editing)
    pub fn draw_cells(&self, surface: &mut impl Surface, cells: &[CellCoord]) {
        surface.set_fill_color(self.palette.alive);
        for &cell in cells {
            self.fill_cell(surface, cell);
        }
    }

    /// Fill every cell of `grid` from the bit-packed `buffer`
    pub fn draw_universe(&self, surface: &mut impl Surface, grid: GridSize, buffer: &[u8]) {
        let mut current = None;
        for (idx, cell) in grid.iter_cells() {
            let color = if codec::is_alive(idx as usize, buffer) {
                self.palette.alive
            } else {
                self.palette.dead
            };
            // Only touch pen state on change
            if current != Some(color) {
                surface.set_fill_color(color);
                current = Some(color);
            }
            self.fill_cell(surface, cell);
        }
    }

    /// Paint the whole surface in the dead color
    pub fn clear(&self, surface: &mut impl Surface) {
        let (width, height) = surface.size();
        surface.set_fill_color(self.palette.dead);
        surface.fill_rect(0.0, 0.0, width as f32, height as f32);
    }
}
