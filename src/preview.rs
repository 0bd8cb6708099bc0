//! Error boundary around the 3D preview.
//!
//! A failed GPU init or frame drops the GPU state and shows the error panel;
//! the rest of the page keeps working. Retry rebuilds the GPU state and
//! reloads the depth map, since its texture belonged to the old device.
use crate::constants::PREVIEW_RETRY_ID;
use crate::render::GpuState;
use crate::state::SharedState;
use crate::{dom, overlay, texture};
use relief_core::CaseGeometry;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct Preview {
    canvas: web::HtmlCanvasElement,
    case: CaseGeometry,
    gpu: Option<GpuState>,
    fault: Option<String>,
    initializing: bool,
}

impl Preview {
    pub fn new(canvas: web::HtmlCanvasElement, case: CaseGeometry) -> Self {
        Self {
            canvas,
            case,
            gpu: None,
            fault: None,
            initializing: false,
        }
    }

    pub fn gpu_mut(&mut self) -> Option<&mut GpuState> {
        self.gpu.as_mut()
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    pub fn fault(&mut self, message: String) {
        log::error!("[preview] {}", message);
        self.gpu = None;
        if let Some(document) = dom::window_document() {
            overlay::show_error(&document, &message);
        }
        self.fault = Some(message);
    }

    fn install(&mut self, gpu: GpuState) {
        self.gpu = Some(gpu);
        if self.fault.take().is_some() {
            log::info!("[preview] recovered");
        }
        if let Some(document) = dom::window_document() {
            overlay::hide_error(&document);
        }
    }
}

/// Build GPU state for the preview canvas in the background.
pub fn init_gpu(preview: Rc<RefCell<Preview>>) {
    let (canvas, case) = {
        let mut p = preview.borrow_mut();
        if p.initializing {
            return;
        }
        p.initializing = true;
        (p.canvas.clone(), p.case)
    };
    spawn_local(async move {
        let result = GpuState::new(&canvas, &case).await;
        let mut p = preview.borrow_mut();
        p.initializing = false;
        match result {
            Ok(gpu) => p.install(gpu),
            Err(e) => p.fault(format!("WebGPU init failed: {:#}", e)),
        }
    });
}

pub fn wire_retry(document: &web::Document, preview: Rc<RefCell<Preview>>, state: SharedState) {
    dom::add_click_listener(document, PREVIEW_RETRY_ID, move || {
        if !preview.borrow().is_faulted() {
            return;
        }
        log::info!("[preview] retry");
        let url = state.borrow_mut().reset_textures();
        texture::request_depth_map(&state, url.as_deref());
        init_gpu(preview.clone());
    });
}
