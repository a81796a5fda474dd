//! Per-frame column pipeline: ray fan + projector/shader.
//!
//! The update step leaves the camera in its final pose; then `cast_columns`
//! fires one ray per screen column and `project` turns the resulting hit
//! array into drawable wall strips. Hits live only for the frame.

use glam::Vec2;

use crate::engine::caster::{self, Facing, Hit};
use crate::renderer::{WallStrip, grey};
use crate::world::{Camera, GridMap};

/// Distance-based brightness scale (fully bright at the clamp distance).
const SHADE_SCALE: f32 = 200.0;
/// Flat brightness bonus for Y-facing walls so perpendicular faces read
/// differently on screen.
const Y_FACE_BOOST: f32 = 55.0;

/// Per-frame hit storage, one slot per screen column, reused across frames.
#[derive(Default)]
pub struct Frame {
    hits: Vec<Option<Hit>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cast one ray per screen column, left to right.
    pub fn cast_columns(&mut self, camera: &Camera, grid: &GridMap, screen_width: usize) {
        self.hits.clear();
        self.hits.reserve(screen_width);
        for column in 0..screen_width {
            let ray = camera.ray_direction(column, screen_width);
            self.hits.push(caster::cast(camera.pos(), ray, grid));
        }
    }

    /// Read-only hit array for the projector and the debug overlay.
    pub fn hits(&self) -> &[Option<Hit>] {
        &self.hits
    }
}

/// Full wall-strip height in pixels for a hit at `distance`.
///
/// Plain inverse-distance scaling, clamped below 1.0 so close walls fill the
/// screen exactly once. Not perspective-correct: wide FOVs show a mild
/// fisheye, which is the intended look.
#[inline]
pub fn line_height(distance: f32, screen_height: usize) -> i32 {
    ((1.0 / distance.max(1.0)) * screen_height as f32).round() as i32
}

/// Greyscale brightness for a hit: inverse distance scaled to [`SHADE_SCALE`],
/// plus [`Y_FACE_BOOST`] when the last crossed grid-line was horizontal.
#[inline]
pub fn shade(distance: f32, facing: Facing) -> u8 {
    let base = (1.0 / distance.max(1.0)) * SHADE_SCALE;
    let boost = if facing == Facing::Y { Y_FACE_BOOST } else { 0.0 };
    (base + boost).clamp(0.0, 255.0) as u8
}

/// Convert a frame's hit array into wall strips.
///
/// Columns without a hit contribute nothing and keep the cleared background.
pub fn project(
    hits: &[Option<Hit>],
    camera_pos: Vec2,
    screen_height: usize,
    out: &mut Vec<WallStrip>,
) {
    out.clear();
    for (x, hit) in hits.iter().enumerate() {
        let Some(hit) = hit else { continue };
        let distance = (hit.point - camera_pos).length();
        out.push(WallStrip {
            x,
            half_height: line_height(distance, screen_height) / 2,
            colour: grey(shade(distance, hit.facing)),
        });
    }
}
