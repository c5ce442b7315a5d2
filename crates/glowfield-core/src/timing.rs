//! Frame-rate independent timing.
//!
//! Wall-clock timestamps become a dimensionless `dt`: 1.0 means one baseline
//! frame elapsed. Every integrator scales its step by this value.

use crate::config::FrameTiming;

/// Convert an elapsed interval into a baseline-frame multiplier, capped at `max`.
#[inline]
pub fn normalize_delta(delta_ms: f64, target_frame_ms: f64, max: f32) -> f32 {
    let multiplier = (delta_ms.max(0.0) / target_frame_ms) as f32;
    multiplier.min(max)
}

#[derive(Clone, Debug)]
pub struct FrameClock {
    timing: FrameTiming,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(timing: FrameTiming) -> Self {
        Self {
            timing,
            last_ms: None,
        }
    }

    /// Advance to `now_ms` and return this tick's `dt`.
    ///
    /// The first tick has no previous timestamp and counts as exactly one
    /// baseline frame.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let Some(last_ms) = self.last_ms.replace(now_ms) else {
            return 1.0;
        };
        let delta_ms = now_ms - last_ms;
        let dt = normalize_delta(
            delta_ms,
            self.timing.target_frame_ms,
            self.timing.max_multiplier,
        );
        if dt >= self.timing.max_multiplier {
            log::debug!("[clock] clamped frame delta {:.1}ms to dt={}", delta_ms, dt);
        }
        dt
    }

    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}
