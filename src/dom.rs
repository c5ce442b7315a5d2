use glam::Vec2;
use glowfield_core::{anchor_center, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels, the space pointer events report in.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Match the canvas backing store to the window so one canvas pixel is one
/// CSS pixel and pointer coordinates need no scaling.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let vp = window_viewport();
    canvas.set_width((vp.width as u32).max(1));
    canvas.set_height((vp.height as u32).max(1));
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

/// Current center of the anchor element, or the origin when it is missing.
pub fn anchor_element_center(anchor: Option<&web::Element>) -> Vec2 {
    match anchor {
        Some(el) => {
            let rect = el.get_bounding_client_rect();
            anchor_center(
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            )
        }
        None => Vec2::ZERO,
    }
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}
