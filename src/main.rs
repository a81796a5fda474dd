//! Minimal top-down map viewer.
//!
//! Casts the full per-column ray fan from a movable camera and renders only
//! the debug overlay, which makes traversal artefacts easy to eyeball.
//!
//! ```bash
//! cargo run --release --bin raygrid_rs -- [map.txt]
//! ```

use glam::vec2;
use minifb::{Key, Window, WindowOptions};

use raygrid_rs::{
    engine::Frame,
    renderer::{CLEAR_COLOUR, Rgba, overlay},
    sim::{self, InputCmd},
    world::{Camera, GridMap},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const FPS: usize = 60;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("RAYGRID_LOG");

    let grid = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading map {path}");
            GridMap::from_ascii(&std::fs::read_to_string(path)?)?
        }
        None => GridMap::reference(),
    };

    let mut camera = Camera::new(vec2(8.0, 8.0), vec2(1.0, 1.0), 90.0);
    let mut frame = Frame::new();
    let mut buffer: Vec<Rgba> = vec![CLEAR_COLOUR; WIDTH * HEIGHT];

    let mut win = Window::new("raygrid — top-down", WIDTH, HEIGHT, WindowOptions::default())?;
    win.set_target_fps(FPS);
    let dt = 1.0 / FPS as f32;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) {
            cmd.turn -= sim::TURN_RATE * dt;
        }
        if win.is_key_down(Key::Right) {
            cmd.turn += sim::TURN_RATE * dt;
        }

        sim::apply_input(&mut camera, &grid, &cmd, dt);
        frame.cast_columns(&camera, &grid, WIDTH);

        buffer.fill(CLEAR_COLOUR);
        overlay::draw(&mut buffer, WIDTH, HEIGHT, &grid, camera.pos(), frame.hits());
        win.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }

    Ok(())
}
