//! Off-screen RGBA framebuffer implementing [`Surface`].
//!
//! The canvas only touches CPU memory; `main` uploads it to a texture once
//! per frame when it changed.

use macroquad::color::{BLANK, Color};
use macroquad::math::{Vec2, vec2};
use macroquad::texture::Image;

use super::Surface;

pub struct Canvas {
    image: Image,
    fill: Color,
    stroke: Color,
    path: Vec<(Vec2, Vec2)>,
    cursor: Option<Vec2>,
    dirty: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: Image::gen_image_color(clamp_extent(width), clamp_extent(height), BLANK),
            fill: BLANK,
            stroke: BLANK,
            path: Vec::new(),
            cursor: None,
            dirty: true,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Color of pixel `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let (width, height) = self.size();
        (x < width && y < height).then(|| self.image.get_pixel(x, y))
    }

    /// Returns whether anything was drawn since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn plot(&mut self, x: f32, y: f32, color: Color) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (px, py) = (x as u32, y as u32);
        let (width, height) = self.size();
        if px < width && py < height {
            self.image.set_pixel(px, py, color);
        }
    }

    /// Walk one segment, one pixel per step along the longer axis
    fn plot_segment(&mut self, from: Vec2, to: Vec2, color: Color) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
        let step = delta / steps;
        let mut point = from;
        for _ in 0..=steps as u32 {
            self.plot(point.x.floor(), point.y.floor(), color);
            point += step;
        }
    }
}

/// Framebuffer images are indexed with `u16`
fn clamp_extent(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.image.width as u32, self.image.height as u32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = Image::gen_image_color(clamp_extent(width), clamp_extent(height), BLANK);
        self.path.clear();
        self.cursor = None;
        self.dirty = true;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.cursor = Some(vec2(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let to = vec2(x, y);
        if let Some(from) = self.cursor {
            self.path.push((from, to));
        }
        self.cursor = Some(to);
    }

    fn stroke(&mut self) {
        let color = self.stroke;
        let path = std::mem::take(&mut self.path);
        for &(from, to) in &path {
            self.plot_segment(from, to, color);
        }
        // Path survives a stroke, like an HTML canvas path
        self.path = path;
        self.dirty = true;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (canvas_width, canvas_height) = self.size();
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + width).max(0.0) as u32).min(canvas_width);
        let y1 = ((y + height).max(0.0) as u32).min(canvas_height);

        let color = self.fill;
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.set_pixel(px, py, color);
            }
        }
        self.dirty = true;
    }
}
