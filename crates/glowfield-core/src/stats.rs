//! Rolling frame-time samples for the diagnostic overlay.

use crate::constants::STATS_SAMPLE_CAPACITY;
use crate::pointer::Viewport;
use std::collections::VecDeque;
use std::fmt;

/// Bounded ring buffer of per-tick durations in milliseconds.
#[derive(Clone, Debug)]
pub struct FrameStats {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::with_capacity(STATS_SAMPLE_CAPACITY)
    }
}

impl FrameStats {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a sample, evicting the oldest once full.
    pub fn record(&mut self, duration_ms: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(duration_ms);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn average_ms(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f32>() / self.samples.len() as f32)
    }

    pub fn max_ms(&self) -> Option<f32> {
        self.samples.iter().copied().reduce(f32::max)
    }

    pub fn snapshot(&self, viewport: Viewport, particles: usize) -> StatsSnapshot {
        StatsSnapshot {
            average_ms: self.average_ms().unwrap_or(0.0),
            max_ms: self.max_ms().unwrap_or(0.0),
            samples: self.samples.len(),
            viewport,
            particles,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub average_ms: f32,
    pub max_ms: f32,
    pub samples: usize,
    pub viewport: Viewport,
    pub particles: usize,
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {:.2}ms avg / {:.2}ms max ({} samples) | {}x{} | {} particles",
            self.average_ms,
            self.max_ms,
            self.samples,
            self.viewport.width.round(),
            self.viewport.height.round(),
            self.particles
        )
    }
}
