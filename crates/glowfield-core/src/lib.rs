//! Animation core for the glowfield background: a spring-smoothed cursor,
//! an orbiting particle swarm and a grid glow, rendered through
//! [`DrawSurface`] in opacity-batched fills.
//!
//! Nothing here touches platform APIs; the web front-end feeds pointer,
//! layout and time in, and supplies a canvas-backed surface.

pub mod batch;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod grid;
pub mod particles;
pub mod pointer;
pub mod render;
pub mod spring;
pub mod state;
pub mod stats;
pub mod surface;
pub mod timing;

pub use batch::{fill_style, Circle, OpacityBatch, Rect};
pub use config::{AnimationConfig, FrameTiming, GridParams, ParticleParams, ParticleRanges, SpringParams};
pub use device::{classify, DeviceTier};
pub use error::ConfigError;
pub use grid::Falloff;
pub use particles::{Particle, ParticleSwarm, StepDamping};
pub use pointer::{anchor_center, PointerState, Viewport};
pub use spring::CursorSpring;
pub use state::{AnimationState, FrameInput, FrameReport};
pub use stats::{FrameStats, StatsSnapshot};
pub use surface::{DrawCommand, DrawSurface, Painted, RecordingSurface};
pub use timing::FrameClock;
