//! CPU column renderer.
//!
//! Fills an internal `Vec<u32>` frame-buffer in 0x00RRGGBB format. Every
//! write goes through a bounds check that silently drops out-of-range
//! coordinates, so clipping never panics.

use crate::renderer::{CLEAR_COLOUR, Renderer, Rgba, WallStrip};

/// Software back-end with a scratch buffer reused across frames.
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl Software {
    /// Bounds-checked pixel write; out-of-range coordinates are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, colour: Rgba) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.scratch[y as usize * self.width + x as usize] = colour;
        }
    }

    /// Mutable view of the current frame for passes that draw on top of the
    /// walls (the debug overlay). Valid between `begin_frame` and `end_frame`.
    pub fn frame_mut(&mut self) -> (&mut [Rgba], usize, usize) {
        (&mut self.scratch, self.width, self.height)
    }
}

impl Renderer for Software {
    fn begin_frame(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.scratch.resize(width * height, 0);
        }
        self.scratch.fill(CLEAR_COLOUR);
    }

    fn draw_strip(&mut self, strip: &WallStrip) {
        let mid = (self.height / 2) as i32;
        let x = strip.x as i32;
        for y in (mid - strip.half_height)..(mid + strip.half_height) {
            self.put_pixel(x, y, strip.colour);
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}
