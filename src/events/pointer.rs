use glowfield_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer handlers only write the raw target; the frame tick reads it.
pub fn wire_pointer_handlers(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    wire_pointermove(pointer.clone());
    wire_mouseleave(document, pointer);
}

fn wire_pointermove(pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer
            .borrow_mut()
            .move_to(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_mouseleave(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        pointer.borrow_mut().leave();
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());

    closure.forget();
}
