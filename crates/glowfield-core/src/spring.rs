//! Damped spring that trails the raw pointer target.

use crate::config::SpringParams;
use crate::constants::OFFSCREEN_SENTINEL;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct CursorSpring {
    pub position: Vec2,
    pub velocity: Vec2,
    params: SpringParams,
}

impl CursorSpring {
    /// Starts at rest on the off-screen sentinel.
    pub fn new(params: SpringParams) -> Self {
        Self {
            position: Vec2::splat(OFFSCREEN_SENTINEL),
            velocity: Vec2::ZERO,
            params,
        }
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Integrate one step of `dt` baseline frames toward `target`.
    ///
    /// Damping is raised to the power of `dt` so that two half steps lose
    /// the same velocity as one full step.
    pub fn step(&mut self, target: Vec2, dt: f32) {
        let force = (target - self.position) * self.params.stiffness;
        self.velocity += force * dt;
        self.velocity *= self.params.damping.powf(dt);
        self.position += self.velocity * dt;
    }
}
