//! Rendering abstraction layer.
//!
//! The engine never touches a pixel buffer directly: it produces a list of
//! [`WallStrip`]s (one per screen column with a hit) and hands them to a type
//! implementing [`Renderer`]. A blanket impl [`RendererExt`] adds `draw_frame`
//! so call-sites stay short.

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Colour every frame is cleared to before drawing.
pub const CLEAR_COLOUR: Rgba = 0x00_202020;

/// Pack an RGB triple into an [`Rgba`] pixel.
#[inline(always)]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Greyscale pixel at the given brightness level.
#[inline(always)]
pub const fn grey(level: u8) -> Rgba {
    rgb(level, level, level)
}

/// One vertical wall slice for a single screen column, centred on the
/// horizontal midline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallStrip {
    pub x: usize,
    pub half_height: i32,
    pub colour: Rgba,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` loans the finished buffer to a user-supplied closure exactly
/// once per frame; software callers typically forward it to
/// `minifb::Window::update_with_buffer`.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one wall strip into the internal buffer.
    fn draw_strip(&mut self, strip: &WallStrip);

    /// Finish the frame and loan the buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, strips: &[WallStrip], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for strip in strips {
            self.draw_strip(strip);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod overlay;
pub mod software;

pub use software::Software;
