//! User-facing relief parameters and the mappings from form units to
//! world/shader units.

use crate::constants::*;
use glam::Vec2;

/// Relief parameters as owned by the form controls.
///
/// Passed by value into the composer every frame; the core never writes
/// back except for `position` updates emitted during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReliefParams {
    /// Relief centre on the case top plane (`x` = world X, `y` = world Z).
    pub position: Vec2,
    /// Displacement height in millimetres, `[1, 10]`.
    pub height: f32,
    /// Size percentage, `[20, 200]`.
    pub size: f32,
    /// In-plane rotation, `[0, 360]`.
    pub rotation_degrees: f32,
    pub generated: bool,
    pub adjust_mode: bool,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            height: DEFAULT_HEIGHT,
            size: DEFAULT_SIZE,
            rotation_degrees: 0.0,
            generated: false,
            adjust_mode: false,
        }
    }
}

impl ReliefParams {
    pub fn scale(&self) -> f32 {
        size_to_scale(self.size)
    }

    pub fn displacement_scale(&self) -> f32 {
        height_to_displacement(self.height)
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    /// Whether the drag capture surface should exist this frame.
    pub fn drag_enabled(&self) -> bool {
        self.adjust_mode && self.generated
    }
}

/// Linear map of the size percentage onto a world-space scale multiplier.
#[inline]
pub fn size_to_scale(size: f32) -> f32 {
    SCALE_AT_SIZE_MIN + ((size - SIZE_MIN) / (SIZE_MAX - SIZE_MIN)) * SCALE_SPAN
}

/// Displacement magnitude handed to the vertex shader.
#[inline]
pub fn height_to_displacement(height: f32) -> f32 {
    (height / DISPLACEMENT_HEIGHT_DIVISOR) * DISPLACEMENT_GAIN
}
