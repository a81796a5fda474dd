//! Fixed 2D occupancy grid.
//!
//! Cells are integer codes: `0` empty, `1` wall. Every lookup is
//! bounds-checked and answers [`CELL_OOB`] outside the map instead of
//! panicking, so callers treat the surrounding void as solid.

use glam::Vec2;
use thiserror::Error;

/// Passable cell.
pub const CELL_EMPTY: i8 = 0;
/// Blocking wall cell.
pub const CELL_WALL: i8 = 1;
/// Sentinel answered for any out-of-bounds query.
pub const CELL_OOB: i8 = -1;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("map row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("unknown map glyph {glyph:?} in row {row}")]
    UnknownGlyph { glyph: char, row: usize },
    #[error("{count} cells do not fill a {width}x{height} grid")]
    DimensionMismatch {
        count: usize,
        width: usize,
        height: usize,
    },
}

/// Row-major occupancy grid, immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<i8>,
}

/// The built-in 16×16 map: closed outer wall ring plus a few interior rooms.
const REFERENCE_MAP: &str = "\
################
#..............#
#..####..###...#
#..#..#..#.....#
#..#..####.....#
#..............#
#..............#
#..............#
#..............#
#..#...........#
#..............#
#..#...........#
#..............#
#..#...........#
#..............#
################";

impl GridMap {
    pub fn new(width: usize, height: usize, cells: Vec<i8>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if cells.len() != width * height {
            return Err(MapError::DimensionMismatch {
                count: cells.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse an ASCII map: `#` wall, `.` or space empty, one row per line.
    pub fn from_ascii(text: &str) -> Result<Self, MapError> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (row, line) in text.lines().filter(|l| !l.is_empty()).enumerate() {
            let start = cells.len();
            for glyph in line.chars() {
                cells.push(match glyph {
                    '#' => CELL_WALL,
                    '.' | ' ' => CELL_EMPTY,
                    _ => return Err(MapError::UnknownGlyph { glyph, row }),
                });
            }
            let got = cells.len() - start;
            if row == 0 {
                width = got;
            } else if got != width {
                return Err(MapError::RaggedRow {
                    row,
                    got,
                    expected: width,
                });
            }
            height += 1;
        }

        Self::new(width, height, cells)
    }

    /// The embedded reference map, guaranteed to have a closed wall ring.
    pub fn reference() -> Self {
        Self::from_ascii(REFERENCE_MAP).expect("reference map is well-formed")
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell code at integer coordinates; [`CELL_OOB`] outside the grid.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> i8 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return CELL_OOB;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Cell containing the world-space point `p`.
    ///
    /// A cell spans `[n, n+1)` per axis, so coordinates are floored, not
    /// truncated: `(-0.5, -0.5)` lands in cell `(-1, -1)`.
    #[inline]
    pub fn cell_at(&self, p: Vec2) -> i8 {
        self.cell(p.x.floor() as i32, p.y.floor() as i32)
    }

    /// True when `p` lies in an empty in-bounds cell.
    #[inline]
    pub fn is_open(&self, p: Vec2) -> bool {
        self.cell_at(p) == CELL_EMPTY
    }
}
