//! Grid illumination around the smoothed cursor.

use crate::batch::{level_opacity, quantize_level, OpacityBatch, Rect};
use crate::config::GridParams;
use crate::constants::{GAUSSIAN_RADIUS_SIGMAS, GAUSSIAN_SIGMA, QUADRATIC_RADIUS};
use crate::pointer::is_near_sentinel;
use fnv::FnvHashMap;
use glam::Vec2;

/// Distance-to-intensity curve for lit cells.
///
/// Both shapes fall to zero at the influence radius but differ in the tail:
/// the Gaussian stays brighter near the edge, the quadratic is cheaper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Falloff {
    /// `exp(-d² / 2σ²)`, cut off at `radius`.
    Gaussian { sigma: f32, radius: f32 },
    /// `t²` with `t = max(0, 1 - d² / radius²)`.
    Quadratic { radius: f32 },
}

impl Default for Falloff {
    fn default() -> Self {
        Self::gaussian(GAUSSIAN_SIGMA)
    }
}

impl Falloff {
    pub fn gaussian(sigma: f32) -> Self {
        Falloff::Gaussian {
            sigma,
            radius: sigma * GAUSSIAN_RADIUS_SIGMAS,
        }
    }

    pub fn quadratic() -> Self {
        Falloff::Quadratic {
            radius: QUADRATIC_RADIUS,
        }
    }

    #[inline]
    pub fn influence_radius(&self) -> f32 {
        match *self {
            Falloff::Gaussian { radius, .. } | Falloff::Quadratic { radius } => radius,
        }
    }

    /// Intensity in `[0, 1]` for a squared distance; zero at or past the radius.
    #[inline]
    pub fn intensity(&self, dist_sq: f32) -> f32 {
        let radius = self.influence_radius();
        let radius_sq = radius * radius;
        if dist_sq >= radius_sq {
            return 0.0;
        }
        match *self {
            Falloff::Gaussian { sigma, .. } => (-dist_sq / (2.0 * sigma * sigma)).exp(),
            Falloff::Quadratic { .. } => {
                let t = (1.0 - dist_sq / radius_sq).max(0.0);
                t * t
            }
        }
    }
}

/// Inclusive range of cells whose centers may be lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellWindow {
    pub start_col: i32,
    pub end_col: i32,
    pub start_row: i32,
    pub end_row: i32,
}

impl CellWindow {
    /// Cells within `radius` of `cursor`; never extends below index 0.
    pub fn around(cursor: Vec2, radius: f32, cell_size: f32) -> Self {
        Self {
            start_col: (((cursor.x - radius) / cell_size).floor() as i32).max(0),
            end_col: ((cursor.x + radius) / cell_size).ceil() as i32,
            start_row: (((cursor.y - radius) / cell_size).floor() as i32).max(0),
            end_row: ((cursor.y + radius) / cell_size).ceil() as i32,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.start_col..=self.end_col)
            .flat_map(move |col| (self.start_row..=self.end_row).map(move |row| (col, row)))
    }

    pub fn len(&self) -> usize {
        let cols = (self.end_col - self.start_col + 1).max(0) as usize;
        let rows = (self.end_row - self.start_row + 1).max(0) as usize;
        cols * rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
pub fn cell_center(col: i32, row: i32, cell_size: f32) -> Vec2 {
    Vec2::new(
        col as f32 * cell_size + cell_size / 2.0,
        row as f32 * cell_size + cell_size / 2.0,
    )
}

/// Unquantized opacity of the cell whose center is `dist_sq` away from the cursor.
#[inline]
pub fn cell_opacity(params: &GridParams, dist_sq: f32) -> f32 {
    params.falloff.intensity(dist_sq) * params.max_opacity
}

/// Lit cells around `cursor`, grouped by quantized opacity and ordered by level.
///
/// Returns nothing while the cursor is parked off-screen.
pub fn illuminate(cursor: Vec2, params: &GridParams) -> Vec<OpacityBatch<Rect>> {
    if is_near_sentinel(cursor, params.offscreen_threshold) {
        return Vec::new();
    }
    let cell = params.cell_size;
    let window = CellWindow::around(cursor, params.falloff.influence_radius(), cell);

    let mut groups: FnvHashMap<u32, Vec<Rect>> = FnvHashMap::default();
    for (col, row) in window.cells() {
        let dist_sq = cursor.distance_squared(cell_center(col, row, cell));
        let opacity = cell_opacity(params, dist_sq);
        if opacity <= params.min_opacity {
            continue;
        }
        let level = quantize_level(opacity, params.opacity_steps);
        if level == 0 {
            continue;
        }
        groups
            .entry(level)
            .or_default()
            .push(Rect::square(col as f32 * cell, row as f32 * cell, cell));
    }

    let mut batches = groups
        .into_iter()
        .map(|(level, primitives)| OpacityBatch {
            level,
            opacity: level_opacity(level, params.opacity_steps),
            primitives,
        })
        .collect::<Vec<_>>();
    batches.sort_by_key(|b| b.level);
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falloffs() -> [Falloff; 2] {
        [Falloff::default(), Falloff::quadratic()]
    }

    #[test]
    fn intensity_is_zero_outside_radius() {
        for f in falloffs() {
            let r = f.influence_radius();
            assert_eq!(f.intensity(r * r), 0.0);
            assert_eq!(f.intensity(r * r * 4.0), 0.0);
            assert_eq!(f.intensity(0.0), 1.0);
        }
    }

    #[test]
    fn intensity_strictly_decreases_inside_radius() {
        for f in falloffs() {
            let r = f.influence_radius();
            let mut prev = f.intensity(0.0);
            let mut d = 1.0;
            while d < r {
                let cur = f.intensity(d * d);
                assert!(cur < prev, "{f:?} not decreasing at d={d}");
                prev = cur;
                d += 1.0;
            }
        }
    }

    #[test]
    fn gaussian_tail_is_brighter_than_quadratic_near_edge() {
        let g = Falloff::default();
        let q = Falloff::quadratic();
        let d: f32 = 350.0;
        assert!(g.intensity(d * d) > q.intensity(d * d));
    }

    #[test]
    fn window_clamps_low_indices() {
        let w = CellWindow::around(Vec2::new(10.0, 10.0), 360.0, 20.0);
        assert_eq!(w.start_col, 0);
        assert_eq!(w.start_row, 0);
        assert_eq!(w.end_col, 19);
        assert_eq!(w.end_row, 19);
        assert_eq!(w.len(), 400);
    }

    #[test]
    fn window_left_of_canvas_is_empty() {
        let w = CellWindow::around(Vec2::new(-450.0, 100.0), 360.0, 20.0);
        assert!(w.is_empty());
        assert_eq!(w.cells().count(), 0);
    }

    #[test]
    fn offscreen_cursor_lights_nothing() {
        let params = GridParams::default();
        assert!(illuminate(Vec2::splat(-1000.0), &params).is_empty());
        assert!(illuminate(Vec2::new(400.0, -600.0), &params).is_empty());
    }

    #[test]
    fn batches_are_distinct_sorted_and_bounded() {
        let params = GridParams::default();
        let batches = illuminate(Vec2::new(500.0, 400.0), &params);
        assert!(!batches.is_empty());
        for pair in batches.windows(2) {
            assert!(pair[0].level < pair[1].level);
        }
        let max_level = quantize_level(params.max_opacity, params.opacity_steps);
        assert!(batches.iter().all(|b| b.level >= 1 && b.level <= max_level));
        let cells: usize = batches.iter().map(|b| b.primitives.len()).sum();
        assert!(cells > 100, "expected hundreds of lit cells, got {cells}");
        assert!(batches.len() < cells);
    }

    #[test]
    fn brightest_batch_sits_under_cursor() {
        let params = GridParams::default();
        let cursor = Vec2::new(510.0, 410.0); // center of cell (25, 20)
        let batches = illuminate(cursor, &params);
        let top = batches.last().map(|b| b.primitives.clone()).unwrap_or_default();
        assert!(top.contains(&Rect::square(500.0, 400.0, 20.0)));
    }
}
