//! 2D immediate-mode drawing contract.
//!
//! The core only ever paints white at varying alpha, so a surface exposes a
//! fill opacity rather than a full colour.

use crate::batch::{Circle, Rect};

pub trait DrawSurface {
    /// Clear `[0, width] x [0, height]` to transparent.
    fn clear(&mut self, width: f32, height: f32);
    /// Set the fill to `rgba(255,255,255,opacity)` for subsequent fills.
    fn set_fill_opacity(&mut self, opacity: f32);
    /// Fill all rectangles as one path.
    fn fill_rects(&mut self, rects: &[Rect]);
    /// Fill all circles as one path.
    fn fill_circles(&mut self, circles: &[Circle]);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    SetFillOpacity(f32),
    FillRects(Vec<Rect>),
    FillCircles(Vec<Circle>),
}

/// A primitive together with the opacity it was filled at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Painted {
    Rect(Rect, f32),
    Circle(Circle, f32),
}

/// Surface that records commands instead of drawing; used headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of fill operations issued.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRects(_) | DrawCommand::FillCircles(_)))
            .count()
    }

    /// Number of fill-style changes issued.
    pub fn style_changes(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::SetFillOpacity(_)))
            .count()
    }

    /// Every filled primitive resolved against the fill opacity active at the time.
    pub fn painted(&self) -> Vec<Painted> {
        let mut opacity = 0.0;
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Clear { .. } => {}
                DrawCommand::SetFillOpacity(o) => opacity = *o,
                DrawCommand::FillRects(rects) => {
                    out.extend(rects.iter().map(|r| Painted::Rect(*r, opacity)))
                }
                DrawCommand::FillCircles(circles) => {
                    out.extend(circles.iter().map(|c| Painted::Circle(*c, opacity)))
                }
            }
        }
        out
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_fill_opacity(&mut self, opacity: f32) {
        self.commands.push(DrawCommand::SetFillOpacity(opacity));
    }

    fn fill_rects(&mut self, rects: &[Rect]) {
        self.commands.push(DrawCommand::FillRects(rects.to_vec()));
    }

    fn fill_circles(&mut self, circles: &[Circle]) {
        self.commands.push(DrawCommand::FillCircles(circles.to_vec()));
    }
}
