use std::time::Duration;

use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::{Point, Universe};
use crate::rendering::Surface;
use crate::ui::{Button, ControlPanel, DRAW_BUTTON, PLAY_BUTTON, RESET_BUTTON, grid_area_height, grid_area_width};

/// A user action on the session, independent of where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Reset,
    ToggleEdit,
    AdjustSpeed(i32),
}

/// Pointer activity on the drawing surface, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// Map a button index from [`crate::ui::create_buttons`] to its command
pub fn button_command(index: usize) -> Option<Command> {
    match index {
        PLAY_BUTTON => Some(Command::TogglePlay),
        RESET_BUTTON => Some(Command::Reset),
        DRAW_BUTTON => Some(Command::ToggleEdit),
        _ => None,
    }
}

/// Commands from buttons clicked this frame
pub fn commands_from_buttons(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| button_command(idx))
        .collect()
}

/// Commands from keys pressed this frame
pub fn commands_from_keyboard() -> Vec<Command> {
    let bindings: [(KeyCode, Command); 5] = [
        (KeyCode::Space, Command::TogglePlay),
        (KeyCode::R, Command::Reset),
        (KeyCode::D, Command::ToggleEdit),
        (KeyCode::Up, Command::AdjustSpeed(1)),
        (KeyCode::Down, Command::AdjustSpeed(-1)),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Run one command against the session.
pub fn apply_command<U: Universe>(
    command: Command,
    session: &mut Session<U>,
    panel: &mut ControlPanel,
    surface: &mut impl Surface,
    now: Duration,
) {
    let controls = panel.controls();
    let result = match command {
        Command::TogglePlay => session.toggle_play(&controls, surface, now),
        Command::ToggleEdit => session.toggle_edit(&controls, surface),
        Command::Reset => {
            session.reset(surface);
            Ok(())
        }
        Command::AdjustSpeed(delta) => {
            panel.speed.step(delta);
            Ok(())
        }
    };
    if let Err(e) = result {
        log::warn!("{:?} rejected: {}", command, e);
    }
}

/// Convert a screen position to surface pixels
pub fn to_surface(origin: (f32, f32), pos: (f32, f32)) -> Point {
    Point::new(pos.0 - origin.0, pos.1 - origin.1)
}

/// Check if a surface point lies on a surface of `size`
pub fn on_surface(point: Point, size: (u32, u32)) -> bool {
    point.x >= 0.0 && point.y >= 0.0 && point.x < size.0 as f32 && point.y < size.1 as f32
}

/// Turns per-frame mouse state into pointer events.
///
/// A drag starts only on the surface but is followed anywhere until the
/// button is released.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn poll(&mut self, origin: (f32, f32), size: (u32, u32), mouse_pos: (f32, f32)) -> Option<PointerEvent> {
        let point = to_surface(origin, mouse_pos);
        let in_grid_area = mouse_pos.0 < grid_area_width() && mouse_pos.1 < grid_area_height();

        if is_mouse_button_pressed(MouseButton::Left) {
            if in_grid_area && on_surface(point, size) {
                self.last = Some(mouse_pos);
                return Some(PointerEvent::Down(point));
            }
            return None;
        }

        let last = self.last?;
        if is_mouse_button_released(MouseButton::Left) || !is_mouse_button_down(MouseButton::Left) {
            self.last = None;
            return Some(PointerEvent::Up(point));
        }
        if last != mouse_pos {
            self.last = Some(mouse_pos);
            return Some(PointerEvent::Move(point));
        }
        None
    }
}

/// Route a pointer event to the session
pub fn dispatch_pointer<U: Universe>(session: &mut Session<U>, event: PointerEvent, surface: &mut impl Surface) {
    match event {
        PointerEvent::Down(point) => session.pointer_down(point),
        PointerEvent::Move(point) => session.pointer_move(point, surface),
        PointerEvent::Up(point) => session.pointer_up(point, surface),
    }
}
