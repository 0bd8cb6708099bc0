use crate::camera::Camera;
use crate::constants::*;
use glam::{Vec2, Vec3};

/// Damped orbit-around-target camera rig.
///
/// Input only accumulates deltas; [`OrbitRig::update`] consumes them once per
/// frame, re-deriving the spherical offset from the camera's current eye so
/// external writes (the TopDown restore) are picked up. With nothing pending
/// the camera is left untouched.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    target: Vec3,
    enabled: bool,
    damping: f32,
    min_distance: f32,
    max_distance: f32,
    max_polar: f32,
    rotate_speed: f32,
    // pending (theta, phi) in radians
    delta: Vec2,
    zoom: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enabled: true,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            delta: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl OrbitRig {
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any pending motion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.delta = Vec2::ZERO;
            self.zoom = 1.0;
        }
    }

    pub fn is_idle(&self) -> bool {
        self.delta == Vec2::ZERO && self.zoom == 1.0
    }

    /// Pointer drag in canvas pixels; a full-height drag is one turn.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let k = std::f32::consts::TAU * self.rotate_speed / viewport_height;
        self.delta.x -= dx * k;
        self.delta.y -= dy * k;
    }

    /// Wheel input; positive `delta_y` moves away from the target.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if !self.enabled || delta_y == 0.0 {
            return;
        }
        if delta_y > 0.0 {
            self.zoom /= ORBIT_ZOOM_STEP;
        } else {
            self.zoom *= ORBIT_ZOOM_STEP;
        }
    }

    /// Apply one frame of pending motion. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.enabled || self.is_idle() {
            return false;
        }
        let offset = camera.eye - self.target;
        let radius = offset.length().max(ORBIT_EPSILON);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta.x * self.damping;
        phi += self.delta.y * self.damping;
        phi = phi.clamp(ORBIT_EPSILON, self.max_polar);
        let radius = (radius * self.zoom).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        let dir = Vec3::new(sin_phi * theta.sin(), phi.cos(), sin_phi * theta.cos());
        camera.eye = self.target + dir * radius;
        camera.target = self.target;

        self.delta *= 1.0 - self.damping;
        if self.delta.abs().max_element() < ORBIT_EPSILON {
            self.delta = Vec2::ZERO;
        }
        self.zoom = 1.0;
        true
    }
}
