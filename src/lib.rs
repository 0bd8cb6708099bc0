#![cfg(target_arch = "wasm32")]
use crate::config::AppConfig;
use crate::preview::Preview;
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod backend;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod preview;
mod render;
mod state;
mod texture;

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

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("relief-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Guard against a second start (hot reload, double script include).
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let config = AppConfig::from_attributes(|name| canvas.get_attribute(name));
    log::info!(
        "[config] default depth map {} backend {} clamp {}",
        config.scene.default_depth_map_url,
        config.backend_base_url,
        config.scene.clamp_drag
    );
    let case = config.scene.case;

    wire_canvas_resize(&canvas);

    let state = Rc::new(RefCell::new(AppState::new(config)));
    events::sync_form(&document, &state.borrow().params);
    events::wire_controls(&document, &canvas, &state);
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        state: state.clone(),
    });
    events::wire_global_keydown(state.clone(), document.clone(), canvas.clone());

    let preview = Rc::new(RefCell::new(Preview::new(canvas.clone(), case)));
    preview::wire_retry(&document, preview.clone(), state.clone());

    texture::request_depth_map(&state, None);
    preview::init_gpu(preview.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        preview,
        canvas,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
