//! Ambient particle field.
//!
//! Fifty small translucent dots drift upward behind the chart, swaying
//! sideways with their height and wrapping to the bottom edge when they leave
//! the top. The field owns its random source so runs can be seeded.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::color::Rgba;
use crate::render::Canvas;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 50;
/// Diameter range in pixels.
pub const SIZE_RANGE: Range<f32> = 2.0..5.0;
/// Upward drift per frame in pixels.
pub const SPEED_RANGE: Range<f32> = 0.2..0.8;
/// Opacity range.
pub const ALPHA_RANGE: Range<u8> = 100..200;
/// Particle tint (the production accent).
pub const PARTICLE_COLOR: Rgba = Rgba::rgb(232, 180, 76);

const SWAY_FREQUENCY: f32 = 0.01;
const SWAY_AMPLITUDE: f32 = 0.5;

/// A single drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    /// Upward drift per frame.
    pub speed: f32,
    /// Opacity.
    pub alpha: u8,
}

impl Particle {
    fn random(rng: &mut SmallRng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            size: rng.gen_range(SIZE_RANGE),
            speed: rng.gen_range(SPEED_RANGE),
            alpha: rng.gen_range(ALPHA_RANGE),
        }
    }
}

/// The collection of particles plus the bounds they live in.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field of [`PARTICLE_COUNT`] particles using `rng`.
    #[must_use]
    pub fn new(width: u32, height: u32, mut rng: SmallRng) -> Self {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let particles = (0..PARTICLE_COUNT).map(|_| Particle::random(&mut rng, w, h)).collect();
        Self { particles, width: w, height: h, rng }
    }

    /// Create a field from a seed, or from OS entropy when `seed` is `None`.
    #[must_use]
    pub fn seeded(width: u32, height: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::new(width, height, rng)
    }

    /// The particles in creation order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Canvas height the field wraps within.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advance every particle one frame. Returns how many wrapped.
    ///
    /// A particle that moves above the top edge is placed at `y == height`
    /// in the same step, so `y` stays in the closed range `[0, height]`.
    pub fn update(&mut self) -> usize {
        let mut wrapped = 0;
        for p in &mut self.particles {
            p.y -= p.speed;
            p.x += (p.y * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE;

            if p.y < 0.0 {
                p.y = self.height;
                p.x = self.rng.gen_range(0.0..self.width);
                wrapped += 1;
            }
        }
        if wrapped > 0 {
            trace!(wrapped, "particles wrapped to bottom edge");
        }
        wrapped
    }

    /// Draw every particle at its current position.
    pub fn draw(&self, canvas: &mut Canvas) {
        let mut c = canvas.scoped(|s| s.no_stroke());
        for p in &self.particles {
            let mut dot = c.scoped(|s| s.fill(PARTICLE_COLOR.with_alpha(p.alpha)));
            dot.circle(p.x, p.y, p.size);
        }
    }

    /// Draw the field, then advance it one frame.
    pub fn update_and_draw(&mut self, canvas: &mut Canvas) -> usize {
        self.draw(canvas);
        self.update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_attributes_in_range() {
        let field = ParticleField::seeded(1000, 700, Some(7));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..1000.0).contains(&p.x));
            assert!((0.0..700.0).contains(&p.y));
            assert!(SIZE_RANGE.contains(&p.size));
            assert!(SPEED_RANGE.contains(&p.speed));
            assert!(ALPHA_RANGE.contains(&p.alpha));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::seeded(1000, 700, Some(42));
        let b = ParticleField::seeded(1000, 700, Some(42));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_update_drifts_upward_with_sway() {
        let mut field = ParticleField::seeded(1000, 700, Some(3));
        field.particles[0] = Particle { x: 100.0, y: 300.0, size: 3.0, speed: 0.5, alpha: 150 };

        field.update();

        let p = field.particles()[0];
        assert!((p.y - 299.5).abs() < 1e-4);
        let expected_x = 100.0 + (299.5f32 * 0.01).sin() * 0.5;
        assert!((p.x - expected_x).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_resets_to_bottom_same_step() {
        let mut field = ParticleField::seeded(1000, 700, Some(3));
        field.particles[0] = Particle { x: 10.0, y: 0.1, size: 3.0, speed: 0.5, alpha: 150 };

        let wrapped = field.update();

        assert!(wrapped >= 1);
        let p = field.particles()[0];
        assert!((p.y - 700.0).abs() < f32::EPSILON);
        assert!((0.0..1000.0).contains(&p.x));
    }

    #[test]
    fn test_top_edge_is_inclusive() {
        let mut field = ParticleField::seeded(1000, 700, Some(3));
        field.particles[0] = Particle { x: 10.0, y: 0.5, size: 3.0, speed: 0.5, alpha: 150 };

        field.update();

        let p = field.particles()[0];
        assert!(p.y.abs() < f32::EPSILON);
        assert!((p.x - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_draw_leaves_style_untouched() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        let before = *canvas.style();
        let field = ParticleField::seeded(100, 100, Some(1));
        field.draw(&mut canvas);
        assert_eq!(*canvas.style(), before);
        assert!(canvas.framebuffer().pixels().iter().any(|&b| b != 0));
    }
}
