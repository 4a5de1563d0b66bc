mod button;
mod stepper;

pub use button::Button;
pub use stepper::Stepper;

// UI constants - now functions for responsive layout
use macroquad::prelude::{screen_height, screen_width};

use crate::application::Controls;
use crate::config::AppConfig;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Top-left corner of the drawing surface on screen
pub const CANVAS_ORIGIN: (f32, f32) = (10.0, 10.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Index of each button returned by [`create_buttons`]
pub const PLAY_BUTTON: usize = 0;
pub const RESET_BUTTON: usize = 1;
pub const DRAW_BUTTON: usize = 2;

/// Create UI buttons with standard layout. Labels follow session state.
pub fn create_buttons(play_label: &str, edit_label: &str) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 190.0, PANEL_WIDTH, BUTTON_HEIGHT, play_label),
        Button::new(px, 240.0, PANEL_WIDTH, BUTTON_HEIGHT, "reset"),
        Button::new(px, 290.0, PANEL_WIDTH, BUTTON_HEIGHT, edit_label),
    ]
}

/// The numeric inputs: width, height and speed.
pub struct ControlPanel {
    pub width: Stepper,
    pub height: Stepper,
    pub speed: Stepper,
}

impl ControlPanel {
    pub fn new(config: &AppConfig) -> Self {
        let px = panel_x();
        let max = config.max_dimension;
        Self {
            width: Stepper::new(px, 30.0, PANEL_WIDTH, "width", config.width, 1, max),
            height: Stepper::new(px, 80.0, PANEL_WIDTH, "height", config.height, 1, max),
            speed: Stepper::new(px, 130.0, PANEL_WIDTH, "speed", config.speed, config.speed_min, config.speed_max),
        }
    }

    /// Update positions for responsive layout
    pub fn set_position(&mut self, px: f32) {
        self.width.set_position(px, 30.0);
        self.height.set_position(px, 80.0);
        self.speed.set_position(px, 130.0);
    }

    /// Handle clicks on all steppers
    pub fn update(&mut self, mouse_pos: (f32, f32)) {
        if self.speed.update(mouse_pos) {
            log::debug!("Speed set to {}", self.speed.value());
        }
        self.width.update(mouse_pos);
        self.height.update(mouse_pos);
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        self.width.draw(mouse_pos);
        self.height.draw(mouse_pos);
        self.speed.draw(mouse_pos);
    }

    pub fn controls(&self) -> Controls {
        Controls {
            width: self.width.value(),
            height: self.height.value(),
            speed: self.speed.value(),
        }
    }
}
