//! Grid-line-stepping ray traversal (DDA).
//!
//! Each iteration finds the next integer grid-line ahead of the ray on both
//! axes, steps to whichever crossing is nearer, and samples the cell the ray
//! just entered. A ray either strikes a blocking cell within [`STEP_LIMIT`]
//! crossings or reports no hit.

use glam::Vec2;

use crate::world::GridMap;
use crate::world::grid::CELL_EMPTY;

/// Hard cap on grid-line crossings per ray. Generous against the worst-case
/// diagonal across the reference map, so a closed map can never exhaust it.
pub const STEP_LIMIT: u32 = 100;

/// Nudge applied along the ray before sampling, so a position resting exactly
/// on a grid-line is attributed to the cell being entered, not the one left.
const SAMPLE_NUDGE: f32 = 1e-4;

/// Which axis' grid-line the ray crossed last before stopping.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Facing {
    /// Crossed a vertical line `x = n`; the struck face points along X.
    X,
    /// Crossed a horizontal line `y = n`; the struck face points along Y.
    Y,
}

/// Sub-cell-precision wall intersection.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub point: Vec2,
    pub facing: Facing,
}

/// Next integer grid-line strictly ahead of `coord` in the travel direction.
///
/// A coordinate already sitting on a line yields the line one whole step
/// further — re-detecting the current line would stall the ray.
fn next_grid_line(coord: f32, positive: bool) -> f32 {
    let floor = coord.floor();
    if positive {
        floor + 1.0
    } else if coord == floor {
        floor - 1.0
    } else {
        floor
    }
}

/// Displacement carrying the ray from `pos` to its next vertical grid-line,
/// or `None` when the ray runs parallel to it (`dir.x == 0`) and would
/// otherwise divide by zero.
fn step_to_x_line(pos: Vec2, dir: Vec2) -> Option<Vec2> {
    if dir.x == 0.0 {
        return None;
    }
    let dx = next_grid_line(pos.x, dir.x > 0.0) - pos.x;
    Some(Vec2::new(dx, dx * (dir.y / dir.x)))
}

/// Displacement to the next horizontal grid-line; `None` when `dir.y == 0`.
fn step_to_y_line(pos: Vec2, dir: Vec2) -> Option<Vec2> {
    if dir.y == 0.0 {
        return None;
    }
    let dy = next_grid_line(pos.y, dir.y > 0.0) - pos.y;
    Some(Vec2::new(dy * (dir.x / dir.y), dy))
}

/// Cast a ray from `origin` along `direction` through `grid`.
///
/// `direction` need not be unit length; it is normalized here. A zero-length
/// direction is a caller error. Returns the exact entry point into the first
/// blocking cell (wall or out-of-bounds), or `None` once [`STEP_LIMIT`]
/// crossings pass without one.
pub fn cast(origin: Vec2, direction: Vec2, grid: &GridMap) -> Option<Hit> {
    debug_assert!(direction != Vec2::ZERO, "ray direction must be non-zero");
    let dir = direction.normalize();
    let mut pos = origin;

    for _ in 0..STEP_LIMIT {
        let to_x = step_to_x_line(pos, dir);
        let to_y = step_to_y_line(pos, dir);

        // Step to the nearer candidate crossing; squared lengths avoid the
        // square root. A missing candidate means that axis never crosses.
        let (step, facing) = match (to_x, to_y) {
            (Some(sx), Some(sy)) => {
                if sx.length_squared() <= sy.length_squared() {
                    (sx, Facing::X)
                } else {
                    (sy, Facing::Y)
                }
            }
            (Some(sx), None) => (sx, Facing::X),
            (None, Some(sy)) => (sy, Facing::Y),
            (None, None) => return None,
        };
        pos += step;

        if grid.cell_at(pos + dir * SAMPLE_NUDGE) != CELL_EMPTY {
            return Some(Hit { point: pos, facing });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::GridMap;
    use glam::vec2;

    /// 16×16 closed ring with an all-open interior.
    fn open_arena() -> GridMap {
        let mut rows = String::from("################\n");
        for _ in 0..14 {
            rows.push_str("#..............#\n");
        }
        rows.push_str("################");
        GridMap::from_ascii(&rows).unwrap()
    }

    /// Same ring but with one interior wall cell at (8, 8).
    fn arena_with_pillar() -> GridMap {
        let open = open_arena();
        let mut cells = Vec::with_capacity(256);
        for y in 0..16i32 {
            for x in 0..16i32 {
                cells.push(open.cell(x, y));
            }
        }
        cells[8 * 16 + 8] = 1;
        GridMap::new(16, 16, cells).unwrap()
    }

    #[test]
    fn closed_map_always_hits_from_interior() {
        let grid = GridMap::reference();
        let origin = vec2(7.5, 7.5);
        for i in 0..720 {
            let angle = i as f32 * (std::f32::consts::TAU / 720.0);
            let dir = vec2(angle.cos(), angle.sin());
            assert!(
                cast(origin, dir, &grid).is_some(),
                "ray at angle {angle} escaped a closed map"
            );
        }
    }

    #[test]
    fn gridline_start_advances_to_next_cell() {
        // Origin exactly on the line x = 2; the first crossing must be x = 3,
        // never a re-detection of x = 2.
        let grid = GridMap::from_ascii("####\n#..#\n#..#\n####").unwrap();
        let hit = cast(vec2(2.0, 1.5), vec2(1.0, 0.0), &grid).unwrap();
        assert_eq!(hit.facing, Facing::X);
        assert!((hit.point.x - 3.0).abs() < 1e-5);
        assert!((hit.point.y - 1.5).abs() < 1e-5);
    }

    #[test]
    fn axis_corridor_hits_far_ring_wall() {
        let grid = open_arena();
        let hit = cast(vec2(1.5, 1.5), vec2(1.0, 0.0), &grid).unwrap();
        assert_eq!(hit.facing, Facing::X);
        assert!((hit.point.x - 15.0).abs() < 1e-4);
        assert!((hit.point.y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn vertical_ray_never_divides_by_zero() {
        let grid = open_arena();
        let hit = cast(vec2(1.5, 1.5), vec2(0.0, 1.0), &grid).unwrap();
        assert_eq!(hit.facing, Facing::Y);
        assert!((hit.point.y - 15.0).abs() < 1e-4);
        assert!((hit.point.x - 1.5).abs() < 1e-4);
    }

    #[test]
    fn diagonal_hits_first_interior_wall() {
        let grid = arena_with_pillar();
        let hit = cast(vec2(7.5, 7.5), vec2(1.0, 1.0), &grid).unwrap();
        assert!(hit.point.x >= 8.0 && hit.point.x <= 9.0, "{:?}", hit.point);
        assert!(hit.point.y >= 8.0 && hit.point.y <= 9.0, "{:?}", hit.point);
    }

    #[test]
    fn reference_diagonal_reaches_far_corner() {
        // The reference map's main diagonal is open all the way to the ring.
        let grid = GridMap::reference();
        let hit = cast(vec2(7.5, 7.5), vec2(1.0, 1.0), &grid).unwrap();
        assert!((hit.point.x - 15.0).abs() < 1e-3);
        assert!((hit.point.y - 15.0).abs() < 1e-3);
    }

    #[test]
    fn step_limit_exhaustion_reports_no_hit() {
        // A long, fully open corridor: 100 crossings are not enough to leave
        // the grid, so the cast gives up cleanly.
        let grid = GridMap::new(300, 3, vec![0; 900]).unwrap();
        assert!(cast(vec2(0.5, 1.5), vec2(1.0, 0.0), &grid).is_none());
    }

    #[test]
    fn out_of_bounds_counts_as_blocking() {
        // No ring at all: the ray stops at the map edge, not beyond it.
        let grid = GridMap::new(4, 4, vec![0; 16]).unwrap();
        let hit = cast(vec2(1.5, 1.5), vec2(1.0, 0.0), &grid).unwrap();
        assert!((hit.point.x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn unnormalized_direction_is_accepted() {
        let grid = open_arena();
        let a = cast(vec2(1.5, 1.5), vec2(1.0, 0.0), &grid).unwrap();
        let b = cast(vec2(1.5, 1.5), vec2(25.0, 0.0), &grid).unwrap();
        assert!((a.point - b.point).length() < 1e-5);
    }
}
