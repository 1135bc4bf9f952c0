//! The particle field: update, draw and connect every frame.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::{Bounds, Rgba, Surface};
use glam::DVec2;
use rand::Rng;

/// A line between two particles closer than the proximity threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: DVec2,
    pub to: DVec2,
    pub distance: f64,
    pub alpha: f64,
}

/// Counters for one [`ParticleField::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Unordered pairs whose distance was evaluated.
    pub pairs: usize,
    /// Pairs close enough to be connected.
    pub lines: usize,
}

/// Owns the particles and the bounds they wrap around.
pub struct ParticleField {
    bounds: Bounds,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    /// Seeds `config.count` particles over the surface's current size.
    pub fn new<S, R>(surface: &S, config: FieldConfig, rng: &mut R) -> Self
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let bounds = surface.size();
        let particles = (0..config.count)
            .map(|_| Particle::with_config(bounds, &config, rng))
            .collect();
        log::debug!(
            "seeded {} particles over {}x{}",
            config.count,
            bounds.width,
            bounds.height
        );
        Self {
            bounds,
            particles,
            config,
        }
    }

    /// A field over explicit particles.
    pub fn from_particles(bounds: Bounds, particles: Vec<Particle>, config: FieldConfig) -> Self {
        Self {
            bounds,
            particles,
            config,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replaces the bounds. Particles are left where they are; any outside
    /// the new bounds wrap back in on their next update.
    pub fn resize(&mut self, bounds: Bounds) {
        log::debug!(
            "field resized {}x{} -> {}x{}",
            self.bounds.width,
            self.bounds.height,
            bounds.width,
            bounds.height
        );
        self.bounds = bounds;
    }

    /// One frame: clear, move and draw every particle, then connect close
    /// pairs.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickStats {
        surface.clear();

        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.update(bounds);
            particle.draw(surface, self.config.particle_color);
        }

        let mut stats = TickStats::default();
        self.for_each_pair(|pair| {
            stats.pairs += 1;
            if let Some(c) = pair {
                stats.lines += 1;
                surface.stroke_line(
                    c.from,
                    c.to,
                    Rgba::from_rgb(self.config.line_color, c.alpha),
                    self.config.line_width,
                );
            }
        });
        stats
    }

    /// Connections for the current particle positions.
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        self.for_each_pair(|pair| out.extend(pair));
        out
    }

    /// Visits every unordered pair `i < j` once, passing the connection when
    /// the pair is strictly closer than the threshold.
    fn for_each_pair(&self, mut visit: impl FnMut(Option<Connection>)) {
        let threshold = self.config.proximity;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position().distance(b.position());
                let connection = (distance < threshold).then(|| Connection {
                    from: a.position(),
                    to: b.position(),
                    distance,
                    alpha: self.config.line_alpha * (1.0 - distance / threshold),
                });
                visit(connection);
            }
        }
    }
}
