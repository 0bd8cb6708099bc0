use crate::case::CaseGeometry;
use crate::params::ReliefParams;
use crate::picking::{NodeId, PickShape, PickTarget};
use crate::shading::SurfaceVariant;
use glam::{Mat4, Vec2, Vec3};

/// Per-frame description of the relief surface.
///
/// The mesh is a unit plane; `model` carries the texture-aspect base size,
/// the size-derived scale, the lay-flat rotation, the in-plane rotation and
/// the translation onto the case top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReliefSurface {
    pub visible: bool,
    pub model: Mat4,
    pub base_size: Vec2,
    pub scale: f32,
    pub displacement_scale: f32,
    pub variant: SurfaceVariant,
    pub hit_test_enabled: bool,
    pub textured: bool,
}

impl ReliefSurface {
    pub fn new(
        params: &ReliefParams,
        case: &CaseGeometry,
        base_size: Vec2,
        textured: bool,
    ) -> Self {
        let scale = params.scale();
        Self {
            visible: params.generated,
            model: relief_model_matrix(
                params.position,
                case.relief_y(),
                base_size * scale,
                params.rotation_radians(),
            ),
            base_size,
            scale,
            displacement_scale: params.displacement_scale(),
            variant: SurfaceVariant::select(params.generated, params.adjust_mode),
            hit_test_enabled: !params.adjust_mode,
            textured,
        }
    }

    /// World-space size of the flat plane.
    pub fn world_size(&self) -> Vec2 {
        self.base_size * self.scale
    }

    /// World position of a local plane point (`[-0.5, 0.5]^2`, before displacement).
    pub fn local_to_world(&self, local: Vec2) -> Vec3 {
        self.model.transform_point3(local.extend(0.0))
    }

    pub fn pick_target(&self) -> PickTarget {
        PickTarget {
            id: NodeId::Relief,
            shape: PickShape::Rect {
                center: self.model.transform_point3(Vec3::ZERO),
                half_u: self.model.transform_vector3(Vec3::X * 0.5),
                half_v: self.model.transform_vector3(Vec3::Y * 0.5),
            },
            hit_test_enabled: self.visible && self.hit_test_enabled,
        }
    }
}

/// Translate onto the top plane, lay flat (local +Z -> world +Y, local +Y ->
/// world -Z), rotate in-plane, then scale the unit plane to `size`.
pub fn relief_model_matrix(position: Vec2, plane_y: f32, size: Vec2, rotation: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(position.x, plane_y, position.y))
        * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
        * Mat4::from_rotation_z(rotation)
        * Mat4::from_scale(Vec3::new(size.x, size.y, 1.0))
}
