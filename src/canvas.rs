use glowfield_core::{fill_style, Circle, DrawSurface, Rect};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`DrawSurface`] over a canvas 2D context. Each fill call builds one path.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    fill_opacity: Option<f32>,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))?;
        Ok(Self {
            ctx,
            fill_opacity: None,
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // Resizing the canvas resets context state, so re-send the fill each frame.
        self.fill_opacity = None;
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    #[allow(deprecated)]
    fn set_fill_opacity(&mut self, opacity: f32) {
        if self.fill_opacity == Some(opacity) {
            return;
        }
        self.fill_opacity = Some(opacity);
        self.ctx
            .set_fill_style(&JsValue::from_str(&fill_style(opacity)));
    }

    fn fill_rects(&mut self, rects: &[Rect]) {
        if rects.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for r in rects {
            self.ctx
                .rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
        }
        self.ctx.fill();
    }

    fn fill_circles(&mut self, circles: &[Circle]) {
        if circles.is_empty() {
            return;
        }
        self.ctx.begin_path();
        for c in circles {
            let (x, y, r) = (c.center.x as f64, c.center.y as f64, c.radius as f64);
            // Start each subpath on the rim so arcs are not joined by lines.
            self.ctx.move_to(x + r, y);
            _ = self.ctx.arc(x, y, r, 0.0, TAU);
        }
        self.ctx.fill();
    }
}
