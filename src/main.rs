use std::path::PathBuf;
use std::time::Duration;

use macroquad::prelude::*;
use life_canvas::{
    AppConfig, Canvas, LifeUniverse, Session, Surface,
    domain::GridSize,
    input::{self, PointerTracker},
    rendering,
    ui::{self, CANVAS_ORIGIN, ControlPanel},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// `None` when the process should exit without opening the simulation
fn load_config() -> Option<AppConfig> {
    match std::env::args().nth(1) {
        None => Some(AppConfig::default()),
        Some(arg) if arg == "--example-config" => {
            match serde_json::to_string_pretty(&AppConfig::default()) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Failed to serialize config: {}", e),
            }
            None
        }
        Some(path) => match AppConfig::load(&PathBuf::from(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                Some(config)
            }
            Err(e) => {
                log::error!("{}: {}", path, e);
                eprintln!("Error: {}", e);
                None
            }
        },
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let Some(config) = load_config() else {
        return;
    };

    let mut session: Session<LifeUniverse> = Session::new(&config);
    let mut panel = ControlPanel::new(&config);

    // Blank surface sized for the configured grid until the first play/draw
    let (width, height) = GridSize::try_new(config.width, config.height)
        .map_or((1, 1), |grid| session.renderer().canvas_size(grid));
    let mut canvas = Canvas::new(width, height);
    session.reset(&mut canvas);

    let mut texture: Option<Texture2D> = None;
    let mut pointer = PointerTracker::default();

    loop {
        let now = Duration::from_secs_f64(get_time());
        let mouse_pos = mouse_position();

        panel.set_position(ui::panel_x());
        panel.update(mouse_pos);

        // Frame start: anything the handlers below arm runs next frame
        session.frame(&panel.controls(), &mut canvas, now);

        let buttons = ui::create_buttons(session.play_label(), session.edit_label());
        let commands = input::commands_from_buttons(&buttons, mouse_pos)
            .into_iter()
            .chain(input::commands_from_keyboard());
        for command in commands {
            input::apply_command(command, &mut session, &mut panel, &mut canvas, now);
        }

        if let Some(event) = pointer.poll(CANVAS_ORIGIN, canvas.size(), mouse_pos) {
            input::dispatch_pointer(&mut session, event, &mut canvas);
        }

        clear_background(Color::from_rgba(15, 15, 15, 255));
        rendering::draw_canvas(&mut canvas, &mut texture, CANVAS_ORIGIN);
        let buttons = ui::create_buttons(session.play_label(), session.edit_label());
        rendering::draw_controls(&session, &panel, &buttons, mouse_pos);

        next_frame().await;
    }
}
