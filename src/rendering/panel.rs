use macroquad::prelude::*;

use crate::application::{PlaybackState, Session};
use crate::domain::LifeUniverse;
use crate::ui::{Button, ControlPanel, panel_x, PANEL_WIDTH};
use super::{Canvas, Surface};

/// Upload the canvas when it changed and draw it at `origin`
pub fn draw_canvas(canvas: &mut Canvas, texture: &mut Option<Texture2D>, origin: (f32, f32)) {
    let (width, height) = canvas.size();
    if canvas.take_dirty() || texture.is_none() {
        match texture {
            Some(tex) if (tex.width() as u32, tex.height() as u32) == (width, height) => {
                tex.update(canvas.image());
            }
            _ => {
                let tex = Texture2D::from_image(canvas.image());
                tex.set_filter(FilterMode::Nearest);
                *texture = Some(tex);
            }
        }
    }
    if let Some(tex) = texture {
        draw_texture(tex, origin.0, origin.1, WHITE);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with steppers, buttons and session info
pub fn draw_controls(
    session: &Session<LifeUniverse>,
    panel: &ControlPanel,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) {
    draw_panel_background();
    panel.draw(mouse_pos);
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", px, 360.0, 14.0, WHITE),
        ("Space: Play/Pause", px, 375.0, 12.0, GRAY),
        ("R: Reset", px, 388.0, 12.0, GRAY),
        ("D: Draw", px, 401.0, 12.0, GRAY),
        ("Up/Down: Speed", px, 414.0, 12.0, GRAY),
        ("Shift+click: step 10", px, 427.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    let state = session.state();
    let state_color = match state {
        PlaybackState::Playing => Color::from_rgba(0, 255, 0, 255),
        PlaybackState::Paused => Color::from_rgba(255, 165, 0, 255),
        PlaybackState::Stopped => Color::from_rgba(180, 180, 180, 255),
    };
    let mode = if session.is_editing() { "Drawing" } else { state.name() };
    draw_text("Status:", px, 460.0, 16.0, WHITE);
    draw_text(mode, px, 480.0, 16.0, state_color);

    let grid = session
        .grid()
        .map_or_else(|| "-".to_string(), |g| format!("{}x{}", g.width(), g.height()));
    let live = session
        .universe()
        .map_or_else(|| "-".to_string(), |u| u.live_count().to_string());

    let labels = [
        format!("Grid: {}", grid),
        format!("Seed cells: {}", session.seeds().len()),
        format!("Live cells: {}", live),
    ];
    labels.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, 510.0 + i as f32 * 15.0, 13.0, Color::from_rgba(150, 150, 150, 255));
    });
}
