//! Custom cursor: an outline that eases toward the pointer each frame.

use crate::render_loop::Animation;
use glam::DVec2;

/// Fraction of the remaining distance the outline covers per frame.
pub const EASING: f64 = 0.12;

/// Something positioned in viewport coordinates (a cursor element).
pub trait Marker {
    fn place(&mut self, at: DVec2);
}

pub struct CursorTrail<M> {
    outline: M,
    pointer: DVec2,
    position: DVec2,
    easing: f64,
}

impl<M: Marker> CursorTrail<M> {
    /// Starts at the origin with the pointer also at the origin.
    pub fn new(outline: M) -> Self {
        Self {
            outline,
            pointer: DVec2::ZERO,
            position: DVec2::ZERO,
            easing: EASING,
        }
    }

    /// Updates the target; the outline catches up over the next frames.
    pub fn point_to(&mut self, pointer: DVec2) {
        self.pointer = pointer;
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }
}

impl<M: Marker> Animation for CursorTrail<M> {
    fn frame(&mut self) {
        self.position += (self.pointer - self.position) * self.easing;
        self.outline.place(self.position);
    }
}
