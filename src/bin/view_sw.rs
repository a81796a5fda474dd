//! Interactive first-person viewer.
//!
//! Controls  W/S = forward/back  A/D = strafe  ←/→ = turn  Shift = run
//! Tab = top-down overlay  RMB held = mouse look  Esc = quit
//!
//! ```bash
//! cargo run --release -- --width 640 --height 480 --scale 2
//! ```

use clap::Parser;
use glam::vec2;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Scale, Window, WindowOptions};
use std::path::PathBuf;

use raygrid_rs::{
    engine::pipeline::{self, Frame},
    renderer::{Renderer, Software, overlay},
    sim::{self, InputCmd},
    world::{Camera, GridMap},
};

#[derive(Parser)]
#[command(version, about = "Grid ray-casting first-person viewer")]
struct Args {
    /// Framebuffer width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,
    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 480)]
    height: usize,
    /// Integer window scale: 1, 2 or 4
    #[arg(long, default_value_t = 1)]
    scale: u8,
    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f32,
    /// ASCII map file (`#` wall, `.` empty); defaults to the built-in map
    #[arg(long)]
    map: Option<PathBuf>,
}

const TARGET_FPS: usize = 60;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("RAYGRID_LOG");
    let args = Args::parse();

    let grid = match &args.map {
        Some(path) => {
            log::info!("loading map {}", path.display());
            GridMap::from_ascii(&std::fs::read_to_string(path)?)?
        }
        None => GridMap::reference(),
    };
    log::info!("map is {}x{} cells", grid.width(), grid.height());

    let mut camera = Camera::new(vec2(8.0, 8.0), vec2(1.0, 1.0), args.fov);

    let scale = match args.scale {
        2 => Scale::X2,
        4 => Scale::X4,
        _ => Scale::X1,
    };
    let mut win = Window::new(
        "raygrid",
        args.width,
        args.height,
        WindowOptions {
            scale,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(TARGET_FPS);

    let mut renderer = Software::default();
    let mut frame = Frame::new();
    let mut strips = Vec::new();

    let mut show_overlay = false;
    let mut last_mouse: Option<(f32, f32)> = None;
    let dt = 1.0 / TARGET_FPS as f32;

    log::info!("entering frame loop");
    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* --------------- build one InputCmd per tic ------------------- */
        let mut cmd = InputCmd::default();

        if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::A) {
            cmd.strafe -= 1.0;
        }
        if win.is_key_down(Key::D) {
            cmd.strafe += 1.0;
        }
        if win.is_key_down(Key::Left) {
            cmd.turn -= sim::TURN_RATE * dt;
        }
        if win.is_key_down(Key::Right) {
            cmd.turn += sim::TURN_RATE * dt;
        }
        cmd.run = win.is_key_down(Key::LeftShift) || win.is_key_down(Key::RightShift);

        if win.is_key_pressed(Key::Tab, KeyRepeat::No) {
            show_overlay = !show_overlay;
        }

        /* mouse look while the right button is held (minifb cannot grab the
         * OS cursor, so "captured" is simply button-held) */
        let captured = win.get_mouse_down(MouseButton::Right);
        if let Some((mx, my)) = win.get_mouse_pos(MouseMode::Pass) {
            if captured {
                if let Some((lx, _)) = last_mouse {
                    cmd.turn += sim::mouse_turn(mx - lx);
                }
            }
            last_mouse = Some((mx, my));
        }

        /* --------------- update, then render --------------------------- */
        sim::apply_input(&mut camera, &grid, &cmd, dt);

        frame.cast_columns(&camera, &grid, args.width);
        pipeline::project(frame.hits(), camera.pos(), args.height, &mut strips);

        renderer.begin_frame(args.width, args.height);
        for strip in &strips {
            renderer.draw_strip(strip);
        }
        if show_overlay {
            let (fb, w, h) = renderer.frame_mut();
            overlay::draw(fb, w, h, &grid, camera.pos(), frame.hits());
        }

        let mut presented = Ok(());
        renderer.end_frame(|fb, w, h| presented = win.update_with_buffer(fb, w, h));
        presented?;
    }

    Ok(())
}
