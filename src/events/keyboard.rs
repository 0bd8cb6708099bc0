use crate::events::controls;
use crate::state::SharedState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape leaves adjust mode, aborting any drag in progress.
pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    state: &SharedState,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) {
    if ev.key() != "Escape" {
        return;
    }
    let mut s = state.borrow_mut();
    if s.params.adjust_mode {
        controls::set_adjust_mode(&mut s, document, canvas, false);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(
    state: SharedState,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &state, &document, &canvas);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
