use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::helpers::{deg_to_rad, rotate};

/// Player view-point in world space.
///
/// * `dir` is kept unit length across every rotation.
/// * `plane` is perpendicular to `dir` at construction; its magnitude is
///   `tan(fov/2)` and encodes the field of view, so rotations turn it but
///   never rescale it.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pos: Vec2,
    dir: Vec2,
    plane: Vec2,
}

impl Camera {
    /// Create a camera at `pos` looking along `dir` with the given horizontal
    /// field of view. The view-plane length is derived once, not per frame.
    pub fn new(pos: Vec2, dir: Vec2, fov_degrees: f32) -> Self {
        let dir = dir.normalize();
        let plane = rotate(dir, FRAC_PI_2) * (deg_to_rad(fov_degrees) * 0.5).tan();
        Self { pos, dir, plane }
    }

    #[inline(always)]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline(always)]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    #[inline(always)]
    pub fn plane(&self) -> Vec2 {
        self.plane
    }

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        self.dir
    }

    /// Unit vector pointing to the camera's right (direction rotated −90°).
    #[inline(always)]
    pub fn right(&self) -> Vec2 {
        rotate(self.dir, -FRAC_PI_2)
    }

    /// Turn by `radians` (positive = clockwise in screen space).
    ///
    /// Direction is renormalized to counter floating-point drift; the plane
    /// only rotates, preserving the FOV encoded in its magnitude.
    pub fn rotate(&mut self, radians: f32) {
        self.dir = rotate(self.dir, radians).normalize();
        self.plane = rotate(self.plane, radians);
    }

    /// Move by `speed` along `move_vec`. A zero-length vector is a no-op
    /// rather than a NaN position.
    pub fn translate(&mut self, move_vec: Vec2, speed: f32) {
        if let Some(step) = move_vec.try_normalize() {
            self.pos += step * speed;
        }
    }

    /// Ray direction for screen column `column` of `screen_width`.
    ///
    /// The column maps to a viewport coordinate in `[-1, 1)`; the ray is the
    /// view direction plus the plane scaled by it. Not normalized here — the
    /// caster normalizes every ray it receives.
    #[inline]
    pub fn ray_direction(&self, column: usize, screen_width: usize) -> Vec2 {
        let half = screen_width as f32 * 0.5;
        let viewport = (column as f32 - half) / half;
        self.dir + self.plane * viewport
    }
}
