//! Native host for the grid modeler: window, frame loop, input sampling,
//! and the save dialog. All editor logic lives in the `editor` crate; this
//! binary only bridges macroquad input/drawing and executes the actions the
//! engine returns.

mod painter;

use editor::camera::Point;
use editor::engine::{Action, EngineCore};
use editor::input::{ButtonState, InputFrame, KeyEdges};
use editor::render;
use editor::writer;
use macroquad::prelude::*;

use crate::painter::MacroquadPainter;

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;

fn window_conf() -> Conf {
    Conf {
        window_title: "Modeler".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();
    tracing::info!(width = WINDOW_WIDTH, height = WINDOW_HEIGHT, "modeler starting");

    let mut engine = EngineCore::centered(f64::from(WINDOW_WIDTH), f64::from(WINDOW_HEIGHT));
    let mut painter = MacroquadPainter;

    loop {
        // The only clean-shutdown path; checked every frame.
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let frame = sample_input();
        for action in engine.tick(&frame) {
            match action {
                Action::SaveRequested => save_model(&engine),
            }
        }

        render::draw_scene(&mut painter, &engine, frame.viewport_w, frame.viewport_h);
        next_frame().await;
    }

    tracing::info!("modeler exiting");
}

/// Snapshot this frame's input for the engine tick.
fn sample_input() -> InputFrame {
    let (mouse_x, mouse_y) = mouse_position();
    let (_, wheel_y) = mouse_wheel();

    InputFrame {
        mouse: Point::new(f64::from(mouse_x), f64::from(mouse_y)),
        primary: button_state(MouseButton::Left),
        pan: button_state(MouseButton::Middle),
        wheel: f64::from(wheel_y),
        keys: KeyEdges {
            fill: is_key_pressed(KeyCode::F),
            points: is_key_pressed(KeyCode::P),
            stroke: is_key_pressed(KeyCode::S),
            wire: is_key_pressed(KeyCode::W),
            delete: is_key_pressed(KeyCode::R),
            save: is_key_pressed(KeyCode::Key1),
        },
        dt: f64::from(get_frame_time()),
        viewport_w: f64::from(screen_width()),
        viewport_h: f64::from(screen_height()),
    }
}

fn button_state(button: MouseButton) -> ButtonState {
    ButtonState {
        pressed: is_mouse_button_pressed(button),
        held: is_mouse_button_down(button),
        released: is_mouse_button_released(button),
    }
}

/// Run the modal save dialog and write the model.
///
/// Cancelling the dialog is the designed no-op path; a failed write is
/// surfaced in the log rather than swallowed.
fn save_model(engine: &EngineCore) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Select a file")
        .add_filter("Model Files", &["model"])
        .save_file()
    else {
        tracing::debug!("save dialog cancelled");
        return;
    };

    match writer::write(&path, &engine.model) {
        Ok(()) => {
            tracing::info!(points = engine.model.len(), path = %path.display(), "model saved");
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "model save failed");
        }
    }
}
