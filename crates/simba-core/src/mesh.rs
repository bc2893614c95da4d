//! Unit meshes for the instanced renderer.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Texture coordinates, v = 0 at the top edge of the image.
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u16 {
        self.vertices.push(Vertex {
            position,
            normal,
            uv,
        });
        (self.vertices.len() - 1) as u16
    }
}

/// Closed cylinder, radius 1, height 1, centred on the origin.
///
/// The side wraps the full texture once, seam at +X; caps use a planar map.
pub fn cylinder(segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut m = MeshData::default();
    // side
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (s, c) = (u * TAU).sin_cos();
        m.push([c, -0.5, s], [c, 0.0, s], [u, 1.0]);
        m.push([c, 0.5, s], [c, 0.0, s], [u, 0.0]);
    }
    for i in 0..segments as u16 {
        let b = i * 2;
        m.indices.extend_from_slice(&[b, b + 1, b + 2, b + 1, b + 3, b + 2]);
    }
    // caps
    for (y, ny) in [(0.5f32, 1.0f32), (-0.5, -1.0)] {
        let center = m.push([0.0, y, 0.0], [0.0, ny, 0.0], [0.5, 0.5]);
        let first = m.vertices.len() as u16;
        for i in 0..=segments {
            let a = i as f32 / segments as f32 * TAU;
            let (s, c) = a.sin_cos();
            m.push([c, y, s], [0.0, ny, 0.0], [0.5 + 0.5 * c, 0.5 + 0.5 * s]);
        }
        for i in 0..segments as u16 {
            let (a, b) = (first + i, first + i + 1);
            if ny > 0.0 {
                m.indices.extend_from_slice(&[center, b, a]);
            } else {
                m.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
    m
}

/// UV sphere of radius 1.
pub fn sphere(segments: u32, rings: u32) -> MeshData {
    let (segments, rings) = (segments.max(3), rings.max(2));
    let mut m = MeshData::default();
    for r in 0..=rings {
        let phi = r as f32 / rings as f32 * PI;
        let (sp, cp) = phi.sin_cos();
        for s in 0..=segments {
            let theta = s as f32 / segments as f32 * TAU;
            let (st, ct) = theta.sin_cos();
            let n = [sp * ct, cp, sp * st];
            let uv = [s as f32 / segments as f32, r as f32 / rings as f32];
            m.push(n, n, uv);
        }
    }
    let row = segments as u16 + 1;
    for r in 0..rings as u16 {
        for s in 0..segments as u16 {
            let a = r * row + s;
            let b = a + row;
            m.indices
                .extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    m
}

/// Unit quad in the XZ plane facing +Y.
pub fn plane() -> MeshData {
    let mut m = MeshData::default();
    for (x, z) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
        m.push([x, 0.0, z], [0.0, 1.0, 0.0], [x + 0.5, z + 0.5]);
    }
    m.indices.extend_from_slice(&[0, 2, 1, 0, 3, 2]);
    m
}

/// Billboard corners for point sprites, two triangles.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];
