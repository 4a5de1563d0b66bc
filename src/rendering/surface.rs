use macroquad::color::Color;

/// A 2D drawing target with persistent pen state.
///
/// Fill and stroke colors stay set until changed. Line segments accumulate
/// into the current path and are painted together by [`Surface::stroke`].
pub trait Surface {
    /// Size in pixels
    fn size(&self) -> (u32, u32);

    /// Resize, discarding the current contents
    fn resize(&mut self, width: u32, height: u32);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Start a new, empty path
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Paint every segment of the current path in the stroke color
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}
