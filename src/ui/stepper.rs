use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;
const ARROW_WIDTH: f32 = 30.0;

/// Integer input with -/+ buttons, clamped to a range.
///
/// Shift-click steps by ten.
#[derive(Clone, Debug)]
pub struct Stepper {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    value: i32,
    min: i32,
    max: i32,
}

impl Stepper {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, value: i32, min: i32, max: i32) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Caption shown above the value, e.g. "speed 3"
    pub fn caption(&self) -> String {
        format!("{} {}", self.label, self.value)
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Move the value by `delta`, clamped. Returns true if it changed.
    pub fn step(&mut self, delta: i32) -> bool {
        let next = self.value.saturating_add(delta).clamp(self.min, self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    fn minus_contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x && pos.0 <= self.x + ARROW_WIDTH && pos.1 >= self.y && pos.1 <= self.y + ROW_HEIGHT
    }

    fn plus_contains(&self, pos: (f32, f32)) -> bool {
        let left = self.x + self.width - ARROW_WIDTH;
        pos.0 >= left && pos.0 <= self.x + self.width && pos.1 >= self.y && pos.1 <= self.y + ROW_HEIGHT
    }

    /// Direction of the arrow under `pos`, if any
    pub fn hit(&self, pos: (f32, f32)) -> Option<i32> {
        if self.minus_contains(pos) {
            Some(-1)
        } else if self.plus_contains(pos) {
            Some(1)
        } else {
            None
        }
    }

    /// Handle clicks and return true if the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let Some(direction) = self.hit(mouse_pos) else {
            return false;
        };
        let scale = if is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift) { 10 } else { 1 };
        self.step(direction * scale)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.caption(), self.x, self.y - 5.0, 14.0, GRAY);

        let idle = Color::from_rgba(70, 130, 180, 255);
        let hover = Color::from_rgba(100, 149, 237, 255);

        draw_rectangle(self.x, self.y, self.width, ROW_HEIGHT, Color::from_rgba(45, 45, 45, 255));
        draw_rectangle(
            self.x,
            self.y,
            ARROW_WIDTH,
            ROW_HEIGHT,
            if self.minus_contains(mouse_pos) { hover } else { idle },
        );
        draw_rectangle(
            self.x + self.width - ARROW_WIDTH,
            self.y,
            ARROW_WIDTH,
            ROW_HEIGHT,
            if self.plus_contains(mouse_pos) { hover } else { idle },
        );
        draw_rectangle_lines(self.x, self.y, self.width, ROW_HEIGHT, 2.0, WHITE);

        draw_text("-", self.x + 11.0, self.y + 21.0, 20.0, WHITE);
        draw_text("+", self.x + self.width - 20.0, self.y + 21.0, 20.0, WHITE);

        let text = self.value.to_string();
        let measure = measure_text(&text, None, 16, 1.0);
        draw_text(&text, self.x + (self.width - measure.width) / 2.0, self.y + 21.0, 16.0, WHITE);
    }
}
