use crate::config::FieldConfig;
use crate::surface::{Bounds, Rgba, Surface};
use glam::DVec2;
use rand::Rng;

/// A single drifting point of the backdrop.
///
/// Velocity, radius and opacity are fixed at creation; only the position
/// changes between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    radius: f64,
    opacity: f64,
}

/// Uniform sample from the half-open `[min, max)`.
///
/// Degenerate ranges (`min == max`, zero-sized bounds) yield `min` instead of
/// panicking the way `gen_range` would.
fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

impl Particle {
    /// A particle with the default visual ranges.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self::with_config(bounds, &FieldConfig::default(), rng)
    }

    pub fn with_config<R: Rng + ?Sized>(bounds: Bounds, config: &FieldConfig, rng: &mut R) -> Self {
        let position = DVec2::new(
            sample(rng, (0.0, bounds.width)),
            sample(rng, (0.0, bounds.height)),
        );
        let velocity = DVec2::new(
            sample(rng, (-config.speed, config.speed)),
            sample(rng, (-config.speed, config.speed)),
        );
        Self {
            position,
            velocity,
            radius: sample(rng, config.radius),
            opacity: sample(rng, config.opacity),
        }
    }

    /// A particle with explicit state.
    pub fn at(position: DVec2, velocity: DVec2, radius: f64, opacity: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Advances one frame, wrapping around the edges of `bounds`.
    pub fn update(&mut self, bounds: Bounds) {
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, bounds.width);
        self.position.y = wrap(self.position.y, bounds.height);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, rgb: [u8; 3]) {
        surface.fill_circle(self.position, self.radius, Rgba::from_rgb(rgb, self.opacity));
    }
}

/// Past the far edge restarts at 0; before 0 restarts at the far edge.
fn wrap(v: f64, extent: f64) -> f64 {
    if v > extent {
        0.0
    } else if v < 0.0 {
        extent
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, RecordingSurface};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const VIEW: Bounds = Bounds::new(800.0, 600.0);

    #[test]
    fn new_samples_within_default_ranges() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..500 {
            let p = Particle::new(VIEW, &mut rng);
            assert!((0.0..800.0).contains(&p.position().x));
            assert!((0.0..600.0).contains(&p.position().y));
            assert!((-1.0..1.0).contains(&p.velocity().x));
            assert!((-1.0..1.0).contains(&p.velocity().y));
            assert!((1.0..4.0).contains(&p.radius()), "radius {}", p.radius());
            assert!((0.2..0.7).contains(&p.opacity()), "opacity {}", p.opacity());
        }
    }

    #[test]
    fn zero_sized_bounds_do_not_panic() {
        let mut rng = SmallRng::seed_from_u64(2);
        let p = Particle::new(Bounds::new(0.0, 0.0), &mut rng);
        assert_eq!(p.position(), DVec2::ZERO);
    }

    #[test]
    fn update_moves_by_velocity() {
        let mut p = Particle::at(DVec2::new(10.0, 20.0), DVec2::new(0.5, -0.25), 2.0, 0.3);
        p.update(VIEW);
        assert_eq!(p.position(), DVec2::new(10.5, 19.75));
    }

    #[test]
    fn crossing_right_edge_resets_to_zero() {
        let mut p = Particle::at(DVec2::new(799.5, 300.0), DVec2::new(1.0, 0.0), 2.0, 0.3);
        p.update(VIEW);
        assert_eq!(p.position().x, 0.0);
    }

    #[test]
    fn crossing_left_edge_resets_to_width() {
        let mut p = Particle::at(DVec2::new(0.25, 300.0), DVec2::new(-0.5, 0.0), 2.0, 0.3);
        p.update(VIEW);
        assert_eq!(p.position().x, 800.0);
    }

    #[test]
    fn vertical_edges_wrap_against_height() {
        let mut down = Particle::at(DVec2::new(5.0, 599.8), DVec2::new(0.0, 0.5), 2.0, 0.3);
        down.update(VIEW);
        assert_eq!(down.position().y, 0.0);

        let mut up = Particle::at(DVec2::new(5.0, 0.1), DVec2::new(0.0, -0.5), 2.0, 0.3);
        up.update(VIEW);
        assert_eq!(up.position().y, 600.0);
    }

    #[test]
    fn resting_on_far_edge_is_not_wrapped() {
        let mut p = Particle::at(DVec2::new(800.0, 600.0), DVec2::ZERO, 2.0, 0.3);
        p.update(VIEW);
        assert_eq!(p.position(), DVec2::new(800.0, 600.0));
    }

    #[test]
    fn draw_fills_circle_with_particle_opacity() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let p = Particle::at(DVec2::new(3.0, 4.0), DVec2::ZERO, 2.5, 0.45);
        p.draw(&mut surface, [255, 255, 255]);
        assert_eq!(
            surface.ops,
            vec![Op::Circle {
                centre: DVec2::new(3.0, 4.0),
                radius: 2.5,
                color: Rgba::from_rgb([255, 255, 255], 0.45),
            }]
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn position_stays_in_bounds(
                seed in any::<u64>(),
                w in 1.0_f64..2000.0,
                h in 1.0_f64..2000.0,
                frames in 1_usize..400,
            ) {
                let bounds = Bounds::new(w, h);
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut p = Particle::new(bounds, &mut rng);
                for _ in 0..frames {
                    p.update(bounds);
                    prop_assert!(bounds.contains(p.position()), "{:?} escaped {:?}", p.position(), bounds);
                }
            }

            #[test]
            fn visual_attributes_never_change(seed in any::<u64>(), frames in 1_usize..200) {
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut p = Particle::new(VIEW, &mut rng);
                let (v, r, o) = (p.velocity(), p.radius(), p.opacity());
                for _ in 0..frames {
                    p.update(VIEW);
                }
                prop_assert_eq!(p.velocity(), v);
                prop_assert_eq!(p.radius(), r);
                prop_assert_eq!(p.opacity(), o);
            }
        }
    }
}
