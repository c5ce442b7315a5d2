//! Pointer, anchor and viewport inputs in viewport (CSS pixel) space.

use crate::constants::OFFSCREEN_SENTINEL;
use glam::Vec2;

/// Raw last-known pointer target, written by input events and read once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            target: Vec2::splat(OFFSCREEN_SENTINEL),
        }
    }
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Park the target at the off-screen sentinel; the spring glides there.
    #[inline]
    pub fn leave(&mut self) {
        self.target = Vec2::splat(OFFSCREEN_SENTINEL);
    }

    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.target == Vec2::splat(OFFSCREEN_SENTINEL)
    }
}

/// True when a point sits beyond `threshold` on either axis (cursor has left).
#[inline]
pub fn is_near_sentinel(p: Vec2, threshold: f32) -> bool {
    p.x < threshold || p.y < threshold
}

/// Center of the anchor element's bounding rectangle.
///
/// Zero-sized or non-finite layout means the element is missing or not laid
/// out yet; the center then degrades to the origin.
pub fn anchor_center(left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    let finite = left.is_finite() && top.is_finite() && width.is_finite() && height.is_finite();
    if !finite || width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(left + width / 2.0, top + height / 2.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
