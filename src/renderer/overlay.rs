//! Top-down debug overlay.
//!
//! Draws the map, the camera and the current frame's hit points into an
//! existing frame-buffer. Strictly a consumer: it reads the camera pose and
//! the hit array and never feeds anything back into the engine.

use glam::Vec2;

use crate::engine::caster::Hit;
use crate::renderer::{Rgba, rgb};
use crate::world::GridMap;
use crate::world::grid::CELL_WALL;

const WALL_COLOUR: Rgba = rgb(0x00, 0x00, 0xFF);
const HIT_COLOUR: Rgba = rgb(0x00, 0xFF, 0xFF);
const CAMERA_COLOUR: Rgba = rgb(0x00, 0xFF, 0x00);

/// Pixels per map cell such that the whole grid fits with a ~10% margin.
fn render_scale(grid: &GridMap, width: usize, height: usize) -> f32 {
    let sx = width as f32 / 1.1 / grid.width() as f32;
    let sy = height as f32 / 1.1 / grid.height() as f32;
    sx.min(sy)
}

/// Map a world position onto the frame, with the grid centred on the screen
/// midpoint.
fn to_screen(world: Vec2, grid: &GridMap, scale: f32, width: usize, height: usize) -> (i32, i32) {
    let centred = world - Vec2::new(grid.width() as f32, grid.height() as f32) * 0.5;
    let screen = centred * scale + Vec2::new(width as f32, height as f32) * 0.5;
    (screen.x as i32, screen.y as i32)
}

#[inline]
fn put(frame: &mut [Rgba], width: usize, height: usize, x: i32, y: i32, colour: Rgba) {
    if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
        frame[y as usize * width + x as usize] = colour;
    }
}

/// Small filled square so single-pixel markers stay visible at any scale.
fn dot(frame: &mut [Rgba], width: usize, height: usize, x: i32, y: i32, colour: Rgba) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            put(frame, width, height, x + dx, y + dy, colour);
        }
    }
}

/// Render the overlay: wall cells as blocks, one dot per column hit, and the
/// camera position on top.
pub fn draw(
    frame: &mut [Rgba],
    width: usize,
    height: usize,
    grid: &GridMap,
    camera_pos: Vec2,
    hits: &[Option<Hit>],
) {
    let scale = render_scale(grid, width, height);

    for cy in 0..grid.height() as i32 {
        for cx in 0..grid.width() as i32 {
            if grid.cell(cx, cy) != CELL_WALL {
                continue;
            }
            let (x0, y0) = to_screen(Vec2::new(cx as f32, cy as f32), grid, scale, width, height);
            let span = scale as i32;
            for y in y0..y0 + span - 1 {
                for x in x0..x0 + span - 1 {
                    put(frame, width, height, x, y, WALL_COLOUR);
                }
            }
        }
    }

    for hit in hits.iter().flatten() {
        let (x, y) = to_screen(hit.point, grid, scale, width, height);
        put(frame, width, height, x, y, HIT_COLOUR);
    }

    let (cx, cy) = to_screen(camera_pos, grid, scale, width, height);
    dot(frame, width, height, cx, cy, CAMERA_COLOUR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::caster::Facing;
    use glam::vec2;

    const W: usize = 160;
    const H: usize = 120;

    fn blank() -> Vec<Rgba> {
        vec![0; W * H]
    }

    #[test]
    fn camera_in_map_centre_lands_mid_screen() {
        let grid = GridMap::reference();
        let mut frame = blank();
        draw(&mut frame, W, H, &grid, vec2(8.0, 8.0), &[]);
        assert_eq!(frame[(H / 2) * W + W / 2], CAMERA_COLOUR);
    }

    #[test]
    fn wall_cells_paint_blocks() {
        let grid = GridMap::reference();
        let mut frame = blank();
        draw(&mut frame, W, H, &grid, vec2(8.0, 8.0), &[]);
        assert!(frame.iter().any(|&px| px == WALL_COLOUR));
    }

    #[test]
    fn hit_points_paint_dots() {
        let grid = GridMap::reference();
        let mut frame = blank();
        let hits = vec![Some(Hit {
            point: vec2(15.0, 8.5),
            facing: Facing::X,
        })];
        draw(&mut frame, W, H, &grid, vec2(8.0, 8.0), &hits);
        assert!(frame.iter().any(|&px| px == HIT_COLOUR));
    }

    #[test]
    fn positions_outside_the_frame_are_clipped() {
        let grid = GridMap::reference();
        let mut frame = blank();
        // camera far outside the map: every pixel write must clip
        draw(&mut frame, W, H, &grid, vec2(-500.0, -500.0), &[]);
        assert!(frame.iter().all(|&px| px != CAMERA_COLOUR));
    }
}
