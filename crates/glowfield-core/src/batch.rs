//! Draw primitives and opacity batching.
//!
//! Fill-style changes are the expensive part of a 2D canvas pass, so every
//! primitive is drawn at a quantized opacity and primitives sharing a level
//! go out in a single fill.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Primitives that share one quantized opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityBatch<P> {
    pub level: u32,
    pub opacity: f32,
    pub primitives: Vec<P>,
}

/// Nearest level on a grid of `steps` levels per unit opacity.
#[inline]
pub fn quantize_level(opacity: f32, steps: u32) -> u32 {
    (opacity.max(0.0) * steps as f32).round() as u32
}

#[inline]
pub fn level_opacity(level: u32, steps: u32) -> f32 {
    level as f32 / steps as f32
}

/// CSS fill colour for white at the given alpha.
pub fn fill_style(opacity: f32) -> String {
    format!("rgba(255,255,255,{})", opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_rounds_to_nearest_level() {
        assert_eq!(quantize_level(0.34, 10), 3);
        assert_eq!(quantize_level(0.36, 10), 4);
        assert_eq!(quantize_level(0.1, 400), 40);
        assert_eq!(quantize_level(0.0011, 400), 0);
        assert_eq!(quantize_level(-0.2, 10), 0);
    }

    #[test]
    fn level_maps_back_to_opacity() {
        assert!((level_opacity(40, 400) - 0.1).abs() < 1e-7);
        assert!((level_opacity(5, 10) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn fill_style_is_white_rgba() {
        assert_eq!(fill_style(0.5), "rgba(255,255,255,0.5)");
        assert_eq!(fill_style(2.0), "rgba(255,255,255,1)");
    }
}
