use crate::dom;
use crate::overlay;
use glowfield_core::{AnimationState, FrameInput, FrameStats, PointerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub state: AnimationState,
    pub surface: crate::canvas::CanvasSurface,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub anchor: Option<web::Element>,

    pub pointer: Rc<RefCell<PointerState>>,
    pub stats: FrameStats,
    pub stats_visible: Rc<RefCell<bool>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let tick_start = Instant::now();
        let input = FrameInput {
            now_ms: tick_start.duration_since(self.started).as_secs_f64() * 1000.0,
            // Copy out so the whole tick sees a single pointer snapshot.
            pointer: *self.pointer.borrow(),
            anchor: dom::anchor_element_center(self.anchor.as_ref()),
            viewport: dom::canvas_viewport(&self.canvas),
        };

        let report = self.state.tick(&input, &mut self.surface);
        log::trace!("[frame] {:?}", report);

        self.stats
            .record(tick_start.elapsed().as_secs_f32() * 1000.0);
        if *self.stats_visible.borrow() {
            let snapshot = self
                .stats
                .snapshot(input.viewport, self.state.swarm().len());
            overlay::update_stats(&self.document, &snapshot);
        }
    }
}

/// Drive `frame` from a fixed `setInterval`; the loop lives as long as the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, interval_ms: i32) -> Result<i32, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let tick = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>);
    let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    tick.forget();
    Ok(handle)
}
