//! Tunable parameters for one animated background instance.
//!
//! Every field has a default taken from [`crate::constants`]; the front-end
//! adjusts the particle count per [`DeviceTier`] and may swap the falloff.

use crate::constants::*;
use crate::device::DeviceTier;
use crate::error::ConfigError;
use crate::grid::Falloff;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameTiming {
    pub target_frame_ms: f64,
    pub max_multiplier: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            target_frame_ms: TARGET_FRAME_MS,
            max_multiplier: MAX_DT_MULTIPLIER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    /// Velocity retained per baseline frame.
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

/// Uniform generation ranges for new particles.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleRanges {
    pub base_radius: Range<f32>,
    /// Magnitude only; each particle picks a direction at random.
    pub angular_speed: Range<f32>,
    pub size: Range<f32>,
    pub opacity: Range<f32>,
    pub wobble_speed: Range<f32>,
    pub wobble_amount: Range<f32>,
}

impl Default for ParticleRanges {
    fn default() -> Self {
        let r = |(min, max): (f32, f32)| min..max;
        Self {
            base_radius: r(PARTICLE_BASE_RADIUS),
            angular_speed: r(PARTICLE_ANGULAR_SPEED),
            size: r(PARTICLE_SIZE),
            opacity: r(PARTICLE_OPACITY),
            wobble_speed: r(PARTICLE_WOBBLE_SPEED),
            wobble_amount: r(PARTICLE_WOBBLE_AMOUNT),
        }
    }
}

impl ParticleRanges {
    fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("base_radius", &self.base_radius),
            ("angular_speed", &self.angular_speed),
            ("size", &self.size),
            ("opacity", &self.opacity),
            ("wobble_speed", &self.wobble_speed),
            ("wobble_amount", &self.wobble_amount),
        ];
        for (field, range) in ranges {
            if range.is_empty() {
                return Err(ConfigError::EmptyRange {
                    field,
                    min: range.start,
                    max: range.end,
                });
            }
        }
        if self.base_radius.start - self.wobble_amount.end <= 0.0 {
            return Err(ConfigError::RadiusCanCollapse {
                base_min: self.base_radius.start,
                wobble_max: self.wobble_amount.end,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub ranges: ParticleRanges,
    pub influence_radius: f32,
    pub repulsion_strength: f32,
    pub velocity_damping: f32,
    pub offset_damping: f32,
    /// Opacity levels used when batching particle fills.
    pub opacity_steps: u32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            ranges: ParticleRanges::default(),
            influence_radius: PARTICLE_INFLUENCE_RADIUS,
            repulsion_strength: PARTICLE_REPULSION_STRENGTH,
            velocity_damping: PARTICLE_VELOCITY_DAMPING,
            offset_damping: PARTICLE_OFFSET_DAMPING,
            opacity_steps: PARTICLE_OPACITY_STEPS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    pub cell_size: f32,
    pub falloff: Falloff,
    pub max_opacity: f32,
    pub min_opacity: f32,
    pub opacity_steps: u32,
    /// The grid pass is skipped while either cursor coordinate is below this.
    pub offscreen_threshold: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            falloff: Falloff::default(),
            max_opacity: GRID_MAX_OPACITY,
            min_opacity: GRID_MIN_OPACITY,
            opacity_steps: GRID_OPACITY_STEPS,
            offscreen_threshold: OFFSCREEN_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationConfig {
    pub timing: FrameTiming,
    pub spring: SpringParams,
    pub particles: ParticleParams,
    pub grid: GridParams,
}

impl AnimationConfig {
    /// Defaults with the particle pool sized for the given device tier.
    pub fn for_tier(tier: DeviceTier) -> Self {
        let mut config = Self::default();
        config.particles.count = tier.particle_count();
        config
    }

    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.grid.falloff = falloff;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("timing.target_frame_ms", self.timing.target_frame_ms)?;
        positive("timing.max_multiplier", self.timing.max_multiplier as f64)?;
        positive("spring.stiffness", self.spring.stiffness as f64)?;
        unit_damping("spring.damping", self.spring.damping)?;

        let p = &self.particles;
        p.ranges.validate()?;
        positive("particles.influence_radius", p.influence_radius as f64)?;
        positive("particles.repulsion_strength", p.repulsion_strength as f64)?;
        unit_damping("particles.velocity_damping", p.velocity_damping)?;
        unit_damping("particles.offset_damping", p.offset_damping)?;
        positive("particles.opacity_steps", p.opacity_steps as f64)?;

        let g = &self.grid;
        positive("grid.cell_size", g.cell_size as f64)?;
        positive("grid.influence_radius", g.falloff.influence_radius() as f64)?;
        positive("grid.max_opacity", g.max_opacity as f64)?;
        positive("grid.opacity_steps", g.opacity_steps as f64)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn unit_damping(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::DampingOutOfRange { field, value })
    }
}
