//! CPU-side mesh generation for the relief plane and the case body.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Subdivided plane in local XY facing +Z, spanning `[-w/2, w/2] x [-h/2, h/2]`.
///
/// UV `(0, 0)` is the top-left corner (`+Y` edge), matching the row order of
/// decoded images so the texture is not mirrored.
pub fn plane(width: f32, height: f32, segments_x: u32, segments_y: u32) -> MeshData {
    let sx = segments_x.max(1);
    let sy = segments_y.max(1);
    let cols = sx + 1;
    let mut vertices = Vec::with_capacity((cols * (sy + 1)) as usize);
    for iy in 0..=sy {
        let v = iy as f32 / sy as f32;
        let y = height * 0.5 - v * height;
        for ix in 0..=sx {
            let u = ix as f32 / sx as f32;
            let x = u * width - width * 0.5;
            vertices.push(Vertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [u, v],
            });
        }
    }
    let mut indices = Vec::with_capacity((sx * sy * 6) as usize);
    for iy in 0..sy {
        for ix in 0..sx {
            let a = ix + cols * iy;
            let b = ix + cols * (iy + 1);
            let c = (ix + 1) + cols * (iy + 1);
            let d = (ix + 1) + cols * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    MeshData { vertices, indices }
}

/// Axis-aligned box centred at the origin with outward normals per face.
pub fn cuboid(size: Vec3) -> MeshData {
    let h = size * 0.5;
    // (normal, u axis, v axis) per face; corners are n + (+-u) + (+-v)
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let base = vertices.len() as u32;
        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
        for (cu, cv) in corners {
            let p = (n + u * cu + v * cv) * h;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [(cu + 1.0) * 0.5, 1.0 - (cv + 1.0) * 0.5],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}
