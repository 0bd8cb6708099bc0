//! Camera description and the Orbit/TopDown controller.
//!
//! These types avoid platform APIs; the web frontend feeds them pointer
//! input and reads back matrices for rendering and picking.

use crate::constants::*;
use crate::orbit::OrbitRig;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_START_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Camera position plus orbit target; what gets saved across adjust mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Orbit,
    TopDown,
}

/// Two-state camera controller keyed by the adjust-mode flag.
///
/// Runs once per frame before the orbit rig. In `Orbit` it keeps a rolling
/// snapshot of the pose; entering `TopDown` freezes that snapshot and pins
/// the camera above the origin; leaving restores it verbatim.
#[derive(Clone, Debug)]
pub struct CameraController {
    mode: CameraMode,
    saved: CameraPose,
}

impl CameraController {
    pub fn new(camera: &Camera, rig: &OrbitRig) -> Self {
        Self {
            mode: CameraMode::Orbit,
            saved: CameraPose {
                eye: camera.eye,
                target: rig.target(),
            },
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn saved_pose(&self) -> CameraPose {
        self.saved
    }

    /// Advance one frame. Returns the new mode when a transition happened.
    pub fn update(
        &mut self,
        adjust_mode: bool,
        camera: &mut Camera,
        rig: &mut OrbitRig,
    ) -> Option<CameraMode> {
        match (self.mode, adjust_mode) {
            (CameraMode::Orbit, true) => {
                self.saved = CameraPose {
                    eye: camera.eye,
                    target: rig.target(),
                };
                rig.set_enabled(false);
                self.mode = CameraMode::TopDown;
                Self::pin_top_down(camera);
                log::info!(
                    "[camera] top-down; saved eye=({:.2},{:.2},{:.2})",
                    self.saved.eye.x,
                    self.saved.eye.y,
                    self.saved.eye.z
                );
                Some(CameraMode::TopDown)
            }
            (CameraMode::TopDown, true) => {
                Self::pin_top_down(camera);
                None
            }
            (CameraMode::TopDown, false) => {
                camera.eye = self.saved.eye;
                camera.target = self.saved.target;
                camera.up = Vec3::Y;
                rig.set_target(self.saved.target);
                rig.set_enabled(true);
                self.mode = CameraMode::Orbit;
                log::info!("[camera] orbit restored");
                Some(CameraMode::Orbit)
            }
            (CameraMode::Orbit, false) => {
                self.saved = CameraPose {
                    eye: camera.eye,
                    target: rig.target(),
                };
                None
            }
        }
    }

    fn pin_top_down(camera: &mut Camera) {
        camera.eye = TOP_DOWN_EYE;
        camera.up = TOP_DOWN_UP;
        camera.target = Vec3::ZERO;
    }
}
