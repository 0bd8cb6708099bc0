//! Declarative scene assembly.
//!
//! [`SceneComposer::compose`] turns the externally owned parameters plus the
//! current depth-texture dimensions into a [`ComposedScene`]: case body,
//! relief surface, the capture plane (only while dragging is allowed), two
//! lights and the orbit-enable flag. The composer keeps no state beyond its
//! injected configuration.

use crate::case::CaseGeometry;
use crate::constants::*;
use crate::drag::InteractionPlane;
use crate::params::ReliefParams;
use crate::picking::{NodeId, PickShape, PickTarget};
use crate::relief::ReliefSurface;
use crate::texture::{base_plane_size, TextureDims};
use glam::{Mat4, Vec3};
use serde::Deserialize;
use smallvec::SmallVec;

/// Configuration injected at construction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Asset loaded when no depth map URL has been provided.
    pub default_depth_map_url: String,
    pub case: CaseGeometry,
    /// Clamp the relief centre to the case footprint while dragging.
    pub clamp_drag: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            default_depth_map_url: DEFAULT_DEPTH_MAP_URL.to_string(),
            case: CaseGeometry::default(),
            clamp_drag: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseBody {
    pub size: Vec3,
    pub model: Mat4,
    pub color: [f32; 3],
    pub hit_test_enabled: bool,
}

impl CaseBody {
    pub fn pick_target(&self) -> PickTarget {
        let half = self.size * 0.5;
        let center = self.model.transform_point3(Vec3::ZERO);
        PickTarget {
            id: NodeId::CaseBody,
            shape: PickShape::Aabb {
                min: center - half,
                max: center + half,
            },
            hit_test_enabled: self.hit_test_enabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionPlaneNode {
    pub plane_y: f32,
    pub extent: f32,
}

impl InteractionPlaneNode {
    pub fn pick_target(&self) -> PickTarget {
        let half = self.extent * 0.5;
        PickTarget {
            id: NodeId::InteractionPlane,
            shape: PickShape::Rect {
                center: Vec3::new(0.0, self.plane_y, 0.0),
                half_u: Vec3::X * half,
                half_v: Vec3::NEG_Z * half,
            },
            hit_test_enabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSettings {
    pub map_size: u32,
    pub half_extent: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lights {
    pub ambient_intensity: f32,
    pub sun_position: Vec3,
    pub sun_intensity: f32,
    pub shadow: ShadowSettings,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            sun_position: SUN_POSITION,
            sun_intensity: SUN_INTENSITY,
            shadow: ShadowSettings {
                map_size: SHADOW_MAP_SIZE,
                half_extent: SHADOW_HALF_EXTENT,
                near: SHADOW_NEAR,
                far: SHADOW_FAR,
            },
        }
    }
}

impl Lights {
    /// Orthographic light-space matrix of the shadow-casting sun, aimed at the origin.
    pub fn sun_view_projection(&self) -> Mat4 {
        let s = &self.shadow;
        let proj = Mat4::orthographic_rh(
            -s.half_extent,
            s.half_extent,
            -s.half_extent,
            s.half_extent,
            s.near,
            s.far,
        );
        let view = Mat4::look_at_rh(self.sun_position, Vec3::ZERO, Vec3::Y);
        proj * view
    }

    /// Unit vector from the surface toward the sun.
    pub fn sun_direction(&self) -> Vec3 {
        self.sun_position.normalize()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposedScene {
    pub case: CaseBody,
    pub relief: ReliefSurface,
    pub interaction_plane: Option<InteractionPlaneNode>,
    pub lights: Lights,
    pub orbit_enabled: bool,
}

impl ComposedScene {
    pub fn pick_targets(&self) -> SmallVec<[PickTarget; 3]> {
        let mut targets = SmallVec::new();
        targets.push(self.case.pick_target());
        targets.push(self.relief.pick_target());
        if let Some(plane) = &self.interaction_plane {
            targets.push(plane.pick_target());
        }
        targets
    }
}

#[derive(Clone, Debug)]
pub struct SceneComposer {
    config: SceneConfig,
}

impl SceneComposer {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn case(&self) -> &CaseGeometry {
        &self.config.case
    }

    pub fn compose(
        &self,
        params: &ReliefParams,
        depth: Option<TextureDims>,
        textured: bool,
    ) -> ComposedScene {
        let case = &self.config.case;
        let relief = ReliefSurface::new(params, case, base_plane_size(depth), textured);
        let interaction_plane = params.drag_enabled().then(|| InteractionPlaneNode {
            plane_y: case.relief_y(),
            extent: CAPTURE_PLANE_EXTENT,
        });
        ComposedScene {
            case: CaseBody {
                size: case.size(),
                model: Mat4::IDENTITY,
                color: CASE_COLOR,
                hit_test_enabled: !params.adjust_mode,
            },
            relief,
            interaction_plane,
            lights: Lights::default(),
            orbit_enabled: !params.adjust_mode,
        }
    }

    /// Drag controller bound to this scene's capture plane.
    pub fn interaction_plane(&self) -> InteractionPlane {
        let case = &self.config.case;
        let bounds = self
            .config
            .clamp_drag
            .then(|| case.relief_bounds(RELIEF_MARGIN));
        InteractionPlane::new(case.relief_y(), bounds)
    }
}
