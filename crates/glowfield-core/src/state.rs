//! Per-tick animation driver.
//!
//! [`AnimationState`] owns everything that evolves between frames. The host
//! supplies a [`FrameInput`] snapshot and a surface; one call to
//! [`AnimationState::tick`] runs a whole frame in a fixed order: smooth the
//! cursor, clear, light the grid, move the particles, draw them.

use crate::config::AnimationConfig;
use crate::error::ConfigError;
use crate::grid::illuminate;
use crate::particles::{ParticleSwarm, StepDamping};
use crate::pointer::{PointerState, Viewport};
use crate::render::{draw_grid, draw_particles};
use crate::spring::CursorSpring;
use crate::surface::DrawSurface;
use crate::timing::FrameClock;
use glam::Vec2;

/// Inputs sampled by the host at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub now_ms: f64,
    pub pointer: PointerState,
    pub anchor: Vec2,
    pub viewport: Viewport,
}

/// What a tick did, for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub dt: f32,
    pub grid_batches: usize,
    pub lit_cells: usize,
    pub particle_fills: usize,
}

pub struct AnimationState {
    config: AnimationConfig,
    clock: FrameClock,
    cursor: CursorSpring,
    swarm: ParticleSwarm,
}

impl AnimationState {
    pub fn new(config: AnimationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let swarm = ParticleSwarm::new(&config.particles, seed);
        log::info!(
            "[state] particles={} falloff={:?} cell={}",
            swarm.len(),
            config.grid.falloff,
            config.grid.cell_size
        );
        Ok(Self {
            clock: FrameClock::new(config.timing.clone()),
            cursor: CursorSpring::new(config.spring),
            swarm,
            config,
        })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn cursor(&self) -> &CursorSpring {
        &self.cursor
    }

    pub fn swarm(&self) -> &ParticleSwarm {
        &self.swarm
    }

    /// Run one frame at wall-clock time `input.now_ms`.
    pub fn tick<S: DrawSurface + ?Sized>(
        &mut self,
        input: &FrameInput,
        surface: &mut S,
    ) -> FrameReport {
        let dt = self.clock.tick(input.now_ms);
        self.advance(dt, input, surface)
    }

    /// Run one frame with an explicit `dt`, bypassing the clock.
    pub fn advance<S: DrawSurface + ?Sized>(
        &mut self,
        dt: f32,
        input: &FrameInput,
        surface: &mut S,
    ) -> FrameReport {
        self.cursor.step(input.pointer.target, dt);
        let cursor = self.cursor.position;

        surface.clear(input.viewport.width, input.viewport.height);

        let batches = illuminate(cursor, &self.config.grid);
        draw_grid(surface, &batches);

        let damping = StepDamping::for_dt(&self.config.particles, dt);
        self.swarm.step(input.anchor, cursor, dt, damping);
        let particle_fills = draw_particles(
            surface,
            self.swarm.particles(),
            self.config.particles.opacity_steps,
        );

        FrameReport {
            dt,
            grid_batches: batches.len(),
            lit_cells: batches.iter().map(|b| b.primitives.len()).sum(),
            particle_fills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn input(now_ms: f64, x: f32, y: f32) -> FrameInput {
        let mut pointer = PointerState::default();
        pointer.move_to(x, y);
        FrameInput {
            now_ms,
            pointer,
            anchor: Vec2::new(400.0, 300.0),
            viewport: Viewport::new(800.0, 600.0),
        }
    }

    #[test]
    fn invalid_config_fails_at_construction() {
        let mut config = AnimationConfig::default();
        config.grid.cell_size = 0.0;
        assert!(AnimationState::new(config, 1).is_err());
    }

    #[test]
    fn frame_clears_then_grid_then_particles() {
        let mut state = AnimationState::new(AnimationConfig::default(), 4).unwrap();
        let mut surface = RecordingSurface::new();
        let report = state.tick(&input(0.0, 400.0, 300.0), &mut surface);

        assert_eq!(
            surface.commands.first(),
            Some(&DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            })
        );
        let last_rect = surface
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::FillRects(_)));
        let first_circle = surface
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircles(_)));
        // Cursor starts off-screen and has barely moved: no grid yet.
        assert_eq!(last_rect, None);
        assert!(first_circle.is_some());
        assert_eq!(report.dt, 1.0);
        assert_eq!(report.grid_batches, 0);
        assert_eq!(report.particle_fills, surface.fill_count());
    }

    #[test]
    fn grid_draws_before_particles_once_cursor_arrives() {
        let mut state = AnimationState::new(AnimationConfig::default(), 4).unwrap();
        let mut surface = RecordingSurface::new();
        for _ in 0..150 {
            surface.reset();
            state.advance(1.0, &input(0.0, 400.0, 300.0), &mut surface);
        }
        let last_rect = surface
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::FillRects(_)))
            .unwrap();
        let first_circle = surface
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircles(_)))
            .unwrap();
        assert!(last_rect < first_circle);
    }

    #[test]
    fn clock_drives_dt() {
        let mut state = AnimationState::new(AnimationConfig::default(), 4).unwrap();
        let mut surface = RecordingSurface::new();
        state.tick(&input(0.0, -1000.0, -1000.0), &mut surface);
        let report = state.tick(&input(10_000.0, -1000.0, -1000.0), &mut surface);
        assert_eq!(report.dt, 3.0);
    }
}
