//! Drawing surface abstraction.
//!
//! The particle field never touches the DOM. It draws through [`Surface`],
//! which the browser build implements over a `CanvasRenderingContext2d`
//! and tests implement with a recorder.

use glam::DVec2;
use std::fmt;

/// Width and height of the drawing surface; the wrap-around limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `p` lies within `[0, width] × [0, height]`.
    ///
    /// The far edges are included: a particle leaving through the left or
    /// top edge re-enters exactly at `width` / `height`.
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// An sRGB colour with a fractional alpha, formatted as a CSS `rgba()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn from_rgb([r, g, b]: [u8; 3], a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A 2D raster the backdrop paints onto.
pub trait Surface {
    /// Current pixel dimensions.
    fn size(&self) -> Bounds;

    /// Resizes the backing store. Implementations may round to whole pixels,
    /// so read [`Surface::size`] afterwards for the effective bounds.
    fn set_size(&mut self, bounds: Bounds);

    /// Clears the whole surface to transparent.
    fn clear(&mut self);

    fn fill_circle(&mut self, centre: DVec2, radius: f64, color: Rgba);

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64);
}
