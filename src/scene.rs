use crate::field::{ParticleField, TickStats};
use crate::render_loop::Animation;
use crate::surface::{Bounds, Surface};

/// A particle field bound to the surface it draws on.
pub struct ParticleScene<S> {
    field: ParticleField,
    surface: S,
    last: TickStats,
}

impl<S: Surface> ParticleScene<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self {
            field,
            surface,
            last: TickStats::default(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Counters from the most recent frame.
    pub fn last_tick(&self) -> TickStats {
        self.last
    }

    /// Resizes the surface, then hands its effective size to the field.
    pub fn resize(&mut self, bounds: Bounds) {
        self.surface.set_size(bounds);
        self.field.resize(self.surface.size());
    }
}

impl<S: Surface> Animation for ParticleScene<S> {
    fn frame(&mut self) {
        self.last = self.field.tick(&mut self.surface);
    }
}
