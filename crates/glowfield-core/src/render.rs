//! Draw passes for the grid glow and the particle swarm.

use crate::batch::{level_opacity, quantize_level, Circle, OpacityBatch, Rect};
use crate::particles::Particle;
use crate::surface::DrawSurface;
use smallvec::SmallVec;

/// One fill per opacity batch.
pub fn draw_grid<S: DrawSurface + ?Sized>(surface: &mut S, batches: &[OpacityBatch<Rect>]) {
    for batch in batches {
        surface.set_fill_opacity(batch.opacity);
        surface.fill_rects(&batch.primitives);
    }
}

/// Draw particles already sorted by opacity, flushing a fill whenever the
/// quantized opacity changes. Returns the number of fills issued.
pub fn draw_particles<S: DrawSurface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    opacity_steps: u32,
) -> usize {
    let mut pending: SmallVec<[Circle; 32]> = SmallVec::new();
    let mut current: Option<u32> = None;
    let mut fills = 0;

    for p in particles {
        let level = quantize_level(p.opacity, opacity_steps);
        if current != Some(level) {
            if let Some(prev) = current {
                fills += flush(surface, prev, opacity_steps, &mut pending);
            }
            current = Some(level);
        }
        pending.push(Circle {
            center: p.position(),
            radius: p.size,
        });
    }
    if let Some(last) = current {
        fills += flush(surface, last, opacity_steps, &mut pending);
    }
    fills
}

fn flush<S: DrawSurface + ?Sized>(
    surface: &mut S,
    level: u32,
    opacity_steps: u32,
    pending: &mut SmallVec<[Circle; 32]>,
) -> usize {
    if pending.is_empty() {
        return 0;
    }
    surface.set_fill_opacity(level_opacity(level, opacity_steps));
    surface.fill_circles(&pending[..]);
    pending.clear();
    1
}
