//! Orbiting particle pool.
//!
//! Each particle circles the anchor on its own wobbling radius and carries a
//! decaying offset that the smoothed cursor pushes around.

use crate::config::{ParticleParams, ParticleRanges};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// A single orbiting particle.
///
/// `position` is derived state: it is rewritten from the orbit and the offset
/// on every [`Particle::step`] and never assigned otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub base_radius: f32,
    pub angle: f32,
    pub angular_speed: f32,
    pub size: f32,
    pub opacity: f32,
    pub wobble_angle: f32,
    pub wobble_speed: f32,
    pub wobble_amount: f32,
    pub velocity: Vec2,
    pub offset: Vec2,
    position: Vec2,
}

/// Per-tick damping factors shared by every particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepDamping {
    pub velocity: f32,
    pub offset: f32,
}

impl StepDamping {
    /// Raise the per-baseline-frame factors to `dt` once for the whole pool.
    pub fn for_dt(params: &ParticleParams, dt: f32) -> Self {
        Self {
            velocity: params.velocity_damping.powf(dt),
            offset: params.offset_damping.powf(dt),
        }
    }
}

/// Cursor repulsion shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub radius: f32,
    pub radius_sq: f32,
    pub strength: f32,
}

impl Repulsion {
    pub fn new(radius: f32, strength: f32) -> Self {
        Self {
            radius,
            radius_sq: radius * radius,
            strength,
        }
    }
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, ranges: &ParticleRanges) -> Self {
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            base_radius: rng.gen_range(ranges.base_radius.clone()),
            angle: rng.gen_range(0.0..TAU),
            angular_speed: rng.gen_range(ranges.angular_speed.clone()) * direction,
            size: rng.gen_range(ranges.size.clone()),
            opacity: rng.gen_range(ranges.opacity.clone()),
            wobble_angle: rng.gen_range(0.0..TAU),
            wobble_speed: rng.gen_range(ranges.wobble_speed.clone()),
            wobble_amount: rng.gen_range(ranges.wobble_amount.clone()),
            velocity: Vec2::ZERO,
            offset: Vec2::ZERO,
            position: Vec2::ZERO,
        }
    }

    /// Wobble-perturbed orbit radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.base_radius + self.wobble_amount * self.wobble_angle.sin()
    }

    /// Position on the orbit around `anchor`, without the cursor offset.
    #[inline]
    pub fn orbital_position(&self, anchor: Vec2) -> Vec2 {
        anchor + Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn step(
        &mut self,
        anchor: Vec2,
        cursor: Vec2,
        dt: f32,
        damping: StepDamping,
        repulsion: Repulsion,
    ) {
        // Phases grow without bound; sin/cos wrap for us.
        self.angle += self.angular_speed * dt;
        self.wobble_angle += self.wobble_speed * dt;

        let base = self.orbital_position(anchor);

        let to_cursor = cursor - base;
        let dist_sq = to_cursor.length_squared();
        if dist_sq < repulsion.radius_sq && dist_sq > 0.0 {
            let dist = dist_sq.sqrt();
            let force = (1.0 - dist / repulsion.radius) * repulsion.strength;
            self.velocity -= to_cursor / dist * force * dt;
        }

        self.offset += self.velocity * dt;
        self.velocity *= damping.velocity;
        self.offset *= damping.offset;

        self.position = base + self.offset;
    }
}

/// Fixed-size particle pool, sorted by opacity at creation.
#[derive(Clone, Debug)]
pub struct ParticleSwarm {
    particles: Vec<Particle>,
    repulsion: Repulsion,
}

impl ParticleSwarm {
    pub fn new(params: &ParticleParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = (0..params.count)
            .map(|_| Particle::random(&mut rng, &params.ranges))
            .collect::<Vec<_>>();
        // Opacity never changes after this, so batching can rely on the order.
        particles.sort_by(|a, b| a.opacity.total_cmp(&b.opacity));
        Self {
            particles,
            repulsion: Repulsion::new(params.influence_radius, params.repulsion_strength),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn step(&mut self, anchor: Vec2, cursor: Vec2, dt: f32, damping: StepDamping) {
        for p in &mut self.particles {
            p.step(anchor, cursor, dt, damping, self.repulsion);
        }
    }
}
