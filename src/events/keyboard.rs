use super::shortcuts::is_stats_toggle;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    stats_visible: &Rc<RefCell<bool>>,
) {
    if !is_stats_toggle(&ev.key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()) {
        return;
    }
    let mut visible = stats_visible.borrow_mut();
    *visible = !*visible;
    if *visible {
        overlay::show(document);
    } else {
        overlay::hide(document);
    }
    log::info!("[keys] stats overlay visible={}", *visible);
    ev.prevent_default();
}

pub fn wire_global_keydown(document: web::Document, stats_visible: Rc<RefCell<bool>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &document, &stats_visible);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
