use thiserror::Error;

/// Construction-time precondition failures for [`crate::AnimationConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in (0, 1), got {value}")]
    DampingOutOfRange { field: &'static str, value: f32 },

    #[error("{field} range is empty ({min}..{max})")]
    EmptyRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("orbit radius can reach zero: base radius min {base_min} <= wobble amount max {wobble_max}")]
    RadiusCanCollapse { base_min: f32, wobble_max: f32 },
}
