//! Screen-to-world rays and the hit-test pass over scene nodes.

use crate::camera::Camera;
use crate::constants::PARALLEL_EPSILON;
use glam::{Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Compute a world-space ray through normalized device coordinates.
    ///
    /// `ndc` is in `[-1, 1]` with +Y up. The far-plane point is unprojected
    /// through the inverse view-projection; the ray starts at the eye.
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inv = camera.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Self::new(camera.eye, p1 - camera.eye)
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection with the infinite plane `y = plane_y`.
    ///
    /// `None` when the ray is parallel to the plane or the plane is behind the origin.
    pub fn intersect_plane_y(&self, plane_y: f32) -> Option<Vec3> {
        if self.direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (plane_y - self.origin.y) / self.direction.y;
        (t >= 0.0).then(|| self.at(t))
    }

    /// Slab test; returns the entry distance (or 0 when starting inside).
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let inv = self.direction.recip();
        let t0 = (min - self.origin) * inv;
        let t1 = (max - self.origin) * inv;
        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();
        if t_near > t_far || t_far < 0.0 {
            return None;
        }
        Some(t_near.max(0.0))
    }

    /// Intersection with a parallelogram given by its centre and two
    /// half-axis vectors; returns the distance along the ray.
    pub fn intersect_rect(&self, center: Vec3, half_u: Vec3, half_v: Vec3) -> Option<f32> {
        let normal = half_u.cross(half_v);
        let denom = normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = normal.dot(center - self.origin) / denom;
        if t < 0.0 {
            return None;
        }
        let d = self.at(t) - center;
        let u = d.dot(half_u) / half_u.length_squared();
        let v = d.dot(half_v) / half_v.length_squared();
        (u.abs() <= 1.0 && v.abs() <= 1.0).then_some(t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeId {
    CaseBody,
    Relief,
    InteractionPlane,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    Aabb { min: Vec3, max: Vec3 },
    Rect {
        center: Vec3,
        half_u: Vec3,
        half_v: Vec3,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickTarget {
    pub id: NodeId,
    pub shape: PickShape,
    pub hit_test_enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub id: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

/// Nearest hit among targets whose `hit_test_enabled` flag is set.
pub fn pick(ray: &Ray, targets: &[PickTarget]) -> Option<PickHit> {
    let mut best = None::<PickHit>;
    for target in targets.iter().filter(|t| t.hit_test_enabled) {
        let t = match target.shape {
            PickShape::Aabb { min, max } => ray.intersect_aabb(min, max),
            PickShape::Rect {
                center,
                half_u,
                half_v,
            } => ray.intersect_rect(center, half_u, half_v),
        };
        if let Some(t) = t {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(PickHit {
                        id: target.id,
                        distance: t,
                        point: ray.at(t),
                    })
                }
            }
        }
    }
    best
}
