use crate::config::AppConfig;
use crate::input::{DragCapture, OrbitDrag};
use crate::texture::{DepthTexture, PendingLoad};
use relief_core::{
    Camera, CameraController, ComposedScene, InteractionPlane, OrbitRig, ReliefParams,
    SceneComposer, TextureSlot,
};
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedState = Rc<RefCell<AppState>>;

/// In-flight AI requests; the trigger stays disabled while either is set.
#[derive(Default, Clone, Copy, Debug)]
pub struct BusyFlags {
    pub generating: bool,
    pub depth_generating: bool,
}

impl BusyFlags {
    pub fn any(&self) -> bool {
        self.generating || self.depth_generating
    }
}

/// Everything the event handlers and the frame loop share. Lives on the
/// main thread behind one `Rc<RefCell<_>>`.
pub struct AppState {
    pub config: AppConfig,
    pub params: ReliefParams,
    pub camera: Camera,
    pub rig: OrbitRig,
    pub controller: CameraController,
    pub composer: SceneComposer,
    pub drag: InteractionPlane,
    /// Pointer captured by the current relief drag.
    pub drag_capture: DragCapture,
    pub orbit_drag: OrbitDrag,
    pub textures: TextureSlot<DepthTexture>,
    /// Last requested depth map; `None` means the configured default.
    pub depth_map_url: Option<String>,
    pub pending_loads: Vec<PendingLoad>,
    /// Scene drawn last frame; pointer picking runs against it.
    pub scene: Option<ComposedScene>,
    pub busy: BusyFlags,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let camera = Camera::default();
        let rig = OrbitRig::default();
        let controller = CameraController::new(&camera, &rig);
        let composer = SceneComposer::new(config.scene.clone());
        let drag = composer.interaction_plane();
        let textures = TextureSlot::new(config.scene.default_depth_map_url.clone());
        Self {
            config,
            params: ReliefParams::default(),
            camera,
            rig,
            controller,
            composer,
            drag,
            drag_capture: DragCapture::default(),
            orbit_drag: OrbitDrag::default(),
            textures,
            depth_map_url: None,
            pending_loads: Vec::new(),
            scene: None,
            busy: BusyFlags::default(),
        }
    }

    pub fn compose(&self) -> ComposedScene {
        self.composer.compose(
            &self.params,
            self.textures.dims(),
            self.textures.active().is_some(),
        )
    }

    /// Forget every GPU-backed texture (device is gone) and reload the
    /// current depth map from scratch.
    pub fn reset_textures(&mut self) -> Option<String> {
        if let Some(handle) = self.textures.clear() {
            handle.release();
        }
        self.pending_loads.clear();
        self.depth_map_url.clone()
    }
}
