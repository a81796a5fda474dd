//! Player input command and the per-tic update step.
//!
//! The frame loop is strictly update-then-render: the window layer samples
//! input into one [`InputCmd`], [`apply_input`] mutates the camera, and only
//! then does the engine cast the frame. Nothing else writes the camera.

use glam::Vec2;

use crate::world::{Camera, GridMap};

/// Movement speed, world cells per second.
pub const MOVE_SPEED: f32 = 3.0;
/// Speed multiplier while the run modifier is held.
pub const RUN_MULT: f32 = 1.8;
/// Keyboard turn rate, radians per second.
pub const TURN_RATE: f32 = std::f32::consts::PI;
/// Pointer delta (pixels) → radians.
pub const MOUSE_SENSITIVITY: f32 = 3.0 / 1000.0;

/// One tic worth of player intent, sampled by the windowing layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub strafe: f32,  // –1 … +1  (left / right)
    pub turn: f32,    // radians to apply this tic, already scaled
    pub run: bool,    // Shift
}

/// Sensitivity-scaled rotation for a captured-mouse pixel delta.
#[inline]
pub fn mouse_turn(delta_px: f32) -> f32 {
    delta_px * MOUSE_SENSITIVITY
}

/// Advance the camera by one tic: rotate first, then translate with per-axis
/// movement blocking.
///
/// The wish vector sums the camera-relative bases weighted by the command and
/// is normalized once, so diagonals are no faster. Each axis of the step is
/// dropped independently when its destination cell blocks, which lets the
/// player slide along walls.
pub fn apply_input(camera: &mut Camera, grid: &GridMap, cmd: &InputCmd, dt: f32) {
    if cmd.turn != 0.0 {
        camera.rotate(cmd.turn);
    }

    let wish = camera.forward() * cmd.forward + camera.right() * cmd.strafe;
    let Some(wish) = wish.try_normalize() else {
        return;
    };
    let speed = MOVE_SPEED * dt * if cmd.run { RUN_MULT } else { 1.0 };
    let step = wish * speed;

    let pos = camera.pos();
    if grid.is_open(Vec2::new(pos.x + step.x, pos.y)) {
        camera.translate(Vec2::new(step.x, 0.0), step.x.abs());
    }
    let pos = camera.pos();
    if grid.is_open(Vec2::new(pos.x, pos.y + step.y)) {
        camera.translate(Vec2::new(0.0, step.y), step.y.abs());
    }
}
