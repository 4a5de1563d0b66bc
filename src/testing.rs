//! Test doubles shared by the unit tests.

use macroquad::color::{Color, WHITE};

use crate::domain::{CellCoord, Universe, codec};
use crate::rendering::{Palette, Renderer, Surface};

/// Palette whose channels survive a round trip through an RGBA8 image.
pub fn test_palette() -> Palette {
    Palette {
        grid: Color::new(0.0, 0.0, 1.0, 1.0),
        alive: Color::new(0.0, 1.0, 0.0, 1.0),
        dead: WHITE,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Resize(u32, u32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Stroke,
    FillRect { rect: (f32, f32, f32, f32), color: Color },
}

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill_color: Color::new(0.0, 0.0, 0.0, 0.0),
            stroke_color: Color::new(0.0, 0.0, 0.0, 0.0),
            ops: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn fills(&self) -> Vec<(f32, f32, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Cells filled in the alive color, in call order
    pub fn alive_cells(&self, renderer: &Renderer) -> Vec<CellCoord> {
        let pitch = renderer.pitch() as f32;
        let size = renderer.cell_size() as f32;
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect { rect: (x, y, w, _), color }
                    if *color == renderer.palette().alive && *w == size =>
                {
                    Some(CellCoord::new(((x - 1.0) / pitch) as i32, ((y - 1.0) / pitch) as i32))
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(SurfaceOp::Resize(width, height));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(SurfaceOp::FillRect {
            rect: (x, y, width, height),
            color: self.fill_color,
        });
    }
}

/// Universe that never evolves; it only counts ticks.
pub struct CountingUniverse {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<u8>,
    pub seed: Option<Vec<u32>>,
    pub ticks: usize,
}

impl Universe for CountingUniverse {
    fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            cells: vec![0; codec::packed_len(size)],
            seed: None,
            ticks: 0,
        }
    }

    fn new_with_state(width: u32, height: u32, alive: &[u32]) -> Self {
        let mut universe = Self::new(width, height);
        for &idx in alive {
            codec::set(idx as usize, &mut universe.cells, true);
        }
        universe.seed = Some(alive.to_vec());
        universe
    }

    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
