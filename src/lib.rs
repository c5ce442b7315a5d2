#![cfg(target_arch = "wasm32")]
use glowfield_core::{classify, AnimationConfig, AnimationState, FrameStats, PointerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;

use constants::{ANCHOR_ID, CANVAS_ID, TICK_INTERVAL_MS};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    // Fail here rather than per frame if the page cannot give us a 2D context.
    let surface = canvas::CanvasSurface::new(&canvas)?;
    wire_canvas_resize(&canvas);

    let anchor = document.get_element_by_id(ANCHOR_ID);
    if anchor.is_none() {
        log::warn!("[init] missing #{}; particles orbit the origin", ANCHOR_ID);
    }

    let viewport = dom::window_viewport();
    let tier = classify(&dom::user_agent(), viewport.width);
    let config = AnimationConfig::for_tier(tier);
    log::info!(
        "[init] tier={:?} particles={} viewport={}x{}",
        tier,
        config.particles.count,
        viewport.width,
        viewport.height
    );
    let state = AnimationState::new(config, random_seed())?;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let stats_visible = Rc::new(RefCell::new(false));

    events::wire_pointer_handlers(&document, pointer.clone());
    events::wire_global_keydown(document.clone(), stats_visible.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        surface,
        document,
        canvas,
        anchor,
        pointer,
        stats: FrameStats::default(),
        stats_visible,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx, TICK_INTERVAL_MS)
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;

    Ok(())
}
