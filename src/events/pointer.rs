use crate::dom;
use crate::input;
use crate::state::{AppState, SharedState};
use relief_core::{pick, DragResponse, NodeId, Ray};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: SharedState,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointer(&w, "pointerdown", on_pointer_down);
    wire_pointer(&w, "pointermove", on_pointer_move);
    wire_pointer(&w, "pointerup", on_pointer_up);
    wire_pointer(&w, "pointercancel", on_pointer_up);
    wire_pointer(&w, "pointerleave", on_pointer_leave);
    wire_wheel(&w);
}

type PointerHandler = fn(&PointerWiring, &web::PointerEvent);

fn wire_pointer(w: &PointerWiring, event: &str, handler: PointerHandler) {
    let canvas = &w.canvas;
    let wiring = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        handler(&wiring, &ev);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &PointerWiring) {
    let canvas = &w.canvas;
    let state = w.state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut s = state.borrow_mut();
        if s.rig.is_enabled() {
            s.rig.zoom_by_wheel(ev.delta_y() as f32);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn pointer_ray(w: &PointerWiring, s: &AppState, ev: &web::PointerEvent) -> Ray {
    let px = input::pointer_canvas_px(ev, &w.canvas);
    let ndc = input::canvas_px_to_ndc(px, w.canvas.width() as f32, w.canvas.height() as f32);
    Ray::from_ndc(&s.camera, ndc)
}

/// Nearest enabled scene node under the pointer, from last frame's scene.
fn pick_node(s: &AppState, ray: &Ray) -> Option<NodeId> {
    let scene = s.scene.as_ref()?;
    pick(ray, &scene.pick_targets()).map(|hit| hit.id)
}

fn apply_response(w: &PointerWiring, s: &mut AppState, pointer_id: i32, resp: DragResponse) {
    if let Some(position) = resp.position {
        s.params.position = position;
    }
    if let Some(cursor) = resp.cursor {
        dom::set_cursor(&w.canvas, cursor.css());
    }
    if let Some(call) = s.drag_capture.request(resp.capture, Some(pointer_id)) {
        dom::apply_capture(&w.canvas, call);
    }
}

fn on_pointer_down(w: &PointerWiring, ev: &web::PointerEvent) {
    let mut guard = w.state.borrow_mut();
    let s = &mut *guard;
    let ray = pointer_ray(w, s, ev);
    match pick_node(s, &ray) {
        Some(NodeId::InteractionPlane) => {
            let position = s.params.position;
            let resp = s.drag.pointer_down(&ray, position);
            apply_response(w, s, ev.pointer_id(), resp);
        }
        _ if s.rig.is_enabled() => {
            let px = input::pointer_canvas_px(ev, &w.canvas);
            s.orbit_drag.begin(ev.pointer_id(), px);
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
        _ => {}
    }
    ev.prevent_default();
}

fn on_pointer_move(w: &PointerWiring, ev: &web::PointerEvent) {
    let mut guard = w.state.borrow_mut();
    let s = &mut *guard;
    if s.drag.is_dragging() {
        let ray = pointer_ray(w, s, ev);
        let resp = s.drag.pointer_move(&ray);
        apply_response(w, s, ev.pointer_id(), resp);
        return;
    }
    let px = input::pointer_canvas_px(ev, &w.canvas);
    if let Some(delta) = s.orbit_drag.move_to(ev.pointer_id(), px) {
        let height = w.canvas.height() as f32;
        s.rig.rotate_by_pixels(delta.x, delta.y, height);
        return;
    }
    if !s.params.drag_enabled() {
        return;
    }
    // hover state on the capture plane
    let ray = pointer_ray(w, s, ev);
    let over = pick_node(s, &ray) == Some(NodeId::InteractionPlane);
    if over != s.drag.is_hovering() {
        let resp = if over {
            s.drag.pointer_over()
        } else {
            s.drag.pointer_out()
        };
        apply_response(w, s, ev.pointer_id(), resp);
    }
}

fn on_pointer_up(w: &PointerWiring, ev: &web::PointerEvent) {
    let mut guard = w.state.borrow_mut();
    let s = &mut *guard;
    if s.drag.is_dragging() {
        let resp = s.drag.pointer_up();
        apply_response(w, s, ev.pointer_id(), resp);
        // still over the capture plane: back to the open hand
        if s.drag.is_hovering() {
            dom::set_cursor(&w.canvas, relief_core::CursorRequest::Grab.css());
        }
    }
    if s.orbit_drag.end() {
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }
}

fn on_pointer_leave(w: &PointerWiring, ev: &web::PointerEvent) {
    let mut guard = w.state.borrow_mut();
    let s = &mut *guard;
    if s.drag.is_hovering() && !s.drag.is_dragging() {
        let resp = s.drag.pointer_out();
        apply_response(w, s, ev.pointer_id(), resp);
    }
}
