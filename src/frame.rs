use crate::preview::Preview;
use crate::state::SharedState;
use crate::texture;
use relief_core::CameraMode;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: SharedState,
    pub preview: Rc<RefCell<Preview>>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// One display frame: camera controller, orbit rig, texture install,
    /// scene composition, draw.
    pub fn frame(&mut self) {
        let mut state = self.state.borrow_mut();
        let s = &mut *state;
        let width = self.canvas.width();
        let height = self.canvas.height();
        s.camera.set_aspect_from_size(width, height);

        let adjust_mode = s.params.adjust_mode;
        let transition = s.controller.update(adjust_mode, &mut s.camera, &mut s.rig);
        if let Some(CameraMode::TopDown) = transition {
            s.orbit_drag.end();
        }
        s.rig.update(&mut s.camera);

        let mut preview = self.preview.borrow_mut();
        let Some(gpu) = preview.gpu_mut() else {
            s.scene = Some(s.compose());
            return;
        };
        texture::install_pending(s, gpu);
        gpu.sync_depth_texture(s.textures.version(), s.textures.active().map(|t| &t.handle));

        let scene = s.compose();
        gpu.resize_if_needed(width, height);
        let result = gpu.render(&scene, &s.camera);
        s.scene = Some(scene);
        if let Err(e) = result {
            preview.fault(format!("render failed: {:#}", e));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
