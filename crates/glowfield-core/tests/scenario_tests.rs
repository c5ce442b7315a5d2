// Host-side end-to-end scenarios driving AnimationState through a recording surface.

use glam::Vec2;
use glowfield_core::*;

const ANCHOR: Vec2 = Vec2::new(400.0, 300.0);

fn input_at(x: f32, y: f32) -> FrameInput {
    let mut pointer = PointerState::default();
    pointer.move_to(x, y);
    FrameInput {
        now_ms: 0.0,
        pointer,
        anchor: ANCHOR,
        viewport: Viewport::new(1280.0, 720.0),
    }
}

fn offscreen() -> FrameInput {
    FrameInput {
        pointer: PointerState::default(),
        ..input_at(0.0, 0.0)
    }
}

#[test]
fn cursor_parks_offscreen_then_follows_pointer() {
    let mut state = AnimationState::new(AnimationConfig::default(), 42).unwrap();
    let mut surface = RecordingSurface::new();

    for _ in 0..100 {
        surface.reset();
        let report = state.advance(1.0, &offscreen(), &mut surface);
        assert_eq!(report.grid_batches, 0);
        assert!(!surface
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillRects(_))));
    }
    assert!(state.cursor().position.distance(Vec2::splat(-1000.0)) < 1e-3);

    let target = Vec2::new(500.0, 500.0);
    let mut prev = state.cursor().position.distance(target);
    for _ in 0..200 {
        state.advance(1.0, &input_at(target.x, target.y), &mut surface);
        let d = state.cursor().position.distance(target);
        assert!(d <= prev + 1e-3);
        prev = d;
    }
    assert!(prev < 1.0, "cursor still {prev} away after 200 ticks");
    assert!(state.cursor().velocity.length() < 0.1);
}

#[test]
fn long_pause_steps_like_three_frames() {
    let config = AnimationConfig::default();
    let mut clocked = AnimationState::new(config.clone(), 9).unwrap();
    let mut manual = AnimationState::new(config, 9).unwrap();
    let mut surface = RecordingSurface::new();

    let mut first = input_at(380.0, 310.0);
    clocked.tick(&first, &mut surface);
    first.now_ms = 5000.0;
    let report = clocked.tick(&first, &mut surface);
    assert_eq!(report.dt, 3.0);

    manual.advance(1.0, &input_at(380.0, 310.0), &mut surface);
    manual.advance(3.0, &input_at(380.0, 310.0), &mut surface);

    assert_eq!(clocked.cursor().position, manual.cursor().position);
    assert_eq!(clocked.swarm().particles(), manual.swarm().particles());
}

#[test]
fn far_cursor_leaves_particles_on_their_orbits() {
    let mut state = AnimationState::new(AnimationConfig::default(), 2024).unwrap();
    assert_eq!(state.swarm().len(), 30);
    let mut surface = RecordingSurface::new();
    state.advance(1.0, &offscreen(), &mut surface);

    for p in state.swarm().particles() {
        assert_eq!(p.offset, Vec2::ZERO);
        assert_eq!(p.velocity, Vec2::ZERO);
        let expected = ANCHOR + Vec2::new(p.angle.cos(), p.angle.sin()) * p.radius();
        assert!(p.position().distance(expected) < 1e-4);
    }
}

#[test]
fn particle_radius_stays_positive_over_time() {
    let mut state = AnimationState::new(AnimationConfig::default(), 77).unwrap();
    let mut surface = RecordingSurface::new();
    for i in 0..500 {
        surface.reset();
        let x = 300.0 + (i as f32 * 0.1).sin() * 120.0;
        state.advance(1.0, &input_at(x, 300.0), &mut surface);
        for p in state.swarm().particles() {
            assert!(p.radius() > 0.0);
            assert!(p.position().is_finite());
        }
    }
}

#[test]
fn hovering_near_anchor_pushes_particles() {
    let mut state = AnimationState::new(AnimationConfig::default(), 5).unwrap();
    let mut surface = RecordingSurface::new();
    for _ in 0..120 {
        state.advance(1.0, &input_at(ANCHOR.x, ANCHOR.y), &mut surface);
    }
    let displaced = state
        .swarm()
        .particles()
        .iter()
        .filter(|p| p.offset.length() > 0.5)
        .count();
    assert!(displaced > 0);
}

#[test]
fn both_falloffs_light_a_bounded_number_of_batches() {
    let gaussian = AnimationConfig::default();
    let quadratic = AnimationConfig::default().with_falloff(Falloff::quadratic());
    let mut surface = RecordingSurface::new();

    let mut a = AnimationState::new(gaussian, 1).unwrap();
    let mut b = AnimationState::new(quadratic, 1).unwrap();
    let mut ra = FrameReport::default();
    let mut rb = FrameReport::default();
    for _ in 0..200 {
        ra = a.advance(1.0, &input_at(640.0, 360.0), &mut surface);
        rb = b.advance(1.0, &input_at(640.0, 360.0), &mut surface);
    }
    assert!(ra.lit_cells > 0 && rb.lit_cells > 0);
    assert!(ra.grid_batches <= 40 && rb.grid_batches <= 40);
}

#[test]
fn constrained_tier_uses_smaller_pool() {
    let state = AnimationState::new(AnimationConfig::for_tier(DeviceTier::Constrained), 3).unwrap();
    assert_eq!(state.swarm().len(), 15);
}
