use crate::backend;
use crate::constants::*;
use crate::dom;
use crate::input;
use crate::state::{AppState, SharedState};
use relief_core::constants::{HEIGHT_MAX, HEIGHT_MIN, ROTATION_MAX_DEGREES, SIZE_MAX, SIZE_MIN};
use relief_core::export::{export_mesh, ExportFormat};
use relief_core::ReliefParams;
use web_sys as web;

fn value_label_id(input_id: &str) -> String {
    format!("{}{}", input_id, VALUE_LABEL_SUFFIX)
}

/// Push the current parameters into the form inputs and their labels.
pub fn sync_form(document: &web::Document, params: &ReliefParams) {
    let fields = [
        (HEIGHT_INPUT_ID, params.height, input::height_label(params.height)),
        (SIZE_INPUT_ID, params.size, input::size_label(params.size)),
        (
            ROTATION_INPUT_ID,
            params.rotation_degrees,
            input::rotation_label(params.rotation_degrees),
        ),
    ];
    for (id, value, label) in fields {
        if let Some(el) = dom::input_by_id(document, id) {
            el.set_value(&value.to_string());
        }
        dom::set_text(document, &value_label_id(id), &label);
    }
    sync_adjust_button(document, params.adjust_mode);
}

fn sync_adjust_button(document: &web::Document, adjust_mode: bool) {
    let label = if adjust_mode {
        ADJUST_LABEL_ACTIVE
    } else {
        ADJUST_LABEL_IDLE
    };
    dom::set_text(document, ADJUST_TOGGLE_ID, label);
}

fn wire_slider(
    document: &web::Document,
    state: &SharedState,
    id: &'static str,
    min: f32,
    max: f32,
    apply: fn(&mut ReliefParams, f32),
    label: fn(f32) -> String,
) {
    let state = state.clone();
    let doc = document.clone();
    dom::add_input_listener(document, id, move |raw| {
        let Some(value) = input::parse_slider(&raw, min, max) else {
            return;
        };
        apply(&mut state.borrow_mut().params, value);
        dom::set_text(&doc, &value_label_id(id), &label(value));
    });
}

/// Enter or leave adjust mode. Leaving mid-drag aborts the drag.
pub fn set_adjust_mode(
    s: &mut AppState,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    on: bool,
) {
    if s.params.adjust_mode == on {
        return;
    }
    s.params.adjust_mode = on;
    if on {
        s.orbit_drag.end();
    } else {
        let resp = s.drag.cancel();
        if let Some(cursor) = resp.cursor {
            dom::set_cursor(canvas, cursor.css());
        }
        if let Some(call) = s.drag_capture.request(resp.capture, None) {
            dom::apply_capture(canvas, call);
        }
    }
    log::info!("[drag] adjust mode {}", if on { "on" } else { "off" });
    sync_adjust_button(document, on);
}

pub fn wire_controls(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    state: &SharedState,
) {
    wire_slider(
        document,
        state,
        HEIGHT_INPUT_ID,
        HEIGHT_MIN,
        HEIGHT_MAX,
        |p, v| p.height = v,
        input::height_label,
    );
    wire_slider(
        document,
        state,
        SIZE_INPUT_ID,
        SIZE_MIN,
        SIZE_MAX,
        |p, v| p.size = v,
        input::size_label,
    );
    wire_slider(
        document,
        state,
        ROTATION_INPUT_ID,
        0.0,
        ROTATION_MAX_DEGREES,
        |p, v| p.rotation_degrees = v,
        input::rotation_label,
    );

    let st = state.clone();
    dom::add_click_listener(document, GENERATE_RELIEF_ID, move || {
        let mut s = st.borrow_mut();
        if !s.params.generated {
            log::info!("[preview] relief generated");
        }
        s.params.generated = true;
    });

    let st = state.clone();
    let doc = document.clone();
    let cv = canvas.clone();
    dom::add_click_listener(document, ADJUST_TOGGLE_ID, move || {
        let mut s = st.borrow_mut();
        let on = !s.params.adjust_mode;
        set_adjust_mode(&mut s, &doc, &cv, on);
    });

    dom::add_click_listener(document, EXPORT_MODEL_ID, move || {
        match export_mesh(ExportFormat::Stl) {
            Ok(bytes) => log::info!("[export] {} bytes", bytes.len()),
            Err(e) => {
                log::warn!("[export] {}", e);
                dom::alert(&e.to_string());
            }
        }
    });

    let st = state.clone();
    dom::add_click_listener(document, AI_GENERATE_ID, move || {
        backend::start_ai_generation(&st);
    });
}
