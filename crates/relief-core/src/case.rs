use crate::constants::*;
use glam::{Vec2, Vec3};
use serde::Deserialize;

/// Fixed-size box standing in for the physical case.
///
/// Centred at the origin; the top face sits at `+thickness / 2`. The XZ
/// footprint doubles as the clip boundary for the relief.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CaseGeometry {
    pub width: f32,
    pub thickness: f32,
    pub height: f32,
}

impl Default for CaseGeometry {
    fn default() -> Self {
        Self {
            width: CASE_WIDTH,
            thickness: CASE_THICKNESS,
            height: CASE_HEIGHT,
        }
    }
}

impl CaseGeometry {
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.thickness, self.height)
    }

    pub fn top_y(&self) -> f32 {
        self.thickness * 0.5
    }

    /// World Y of the relief plane and of the drag capture plane.
    pub fn relief_y(&self) -> f32 {
        self.top_y() + RELIEF_STANDOFF
    }

    /// Half width / half height of the footprint (X, Z).
    pub fn half_footprint(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive footprint test on a world XZ point.
    pub fn contains_footprint(&self, xz: Vec2) -> bool {
        let half = self.half_footprint();
        xz.x.abs() <= half.x && xz.y.abs() <= half.y
    }

    /// Allowed range for the relief centre: footprint minus `margin` per side.
    pub fn relief_bounds(&self, margin: f32) -> ReliefBounds {
        let half = self.half_footprint();
        let inset = (half - Vec2::splat(margin)).max(Vec2::ZERO);
        ReliefBounds {
            min: -inset,
            max: inset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReliefBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ReliefBounds {
    #[inline]
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}
