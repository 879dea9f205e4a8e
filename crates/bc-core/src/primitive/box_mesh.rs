//! Box (rectangular prism) mesh generation

use glam::Vec3;

use super::TriMesh;

/// Generate a box mesh with the given dimensions, centered at the origin
///
/// # Arguments
/// * `size` - [width (x), height (y), depth (z)]
///
/// # Returns
/// 24 vertices (4 per face), 12 triangles. Faces are emitted as
/// +X, -X, +Y, -Y, +Z, -Z.
pub fn generate_box_mesh(size: [f32; 3]) -> TriMesh {
    let half = Vec3::from(size) / 2.0;
    let mut mesh = TriMesh {
        vertices: Vec::with_capacity(24),
        normals: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    for axis in 0..3 {
        for sign in [1.0_f32, -1.0] {
            let mut normal = Vec3::ZERO;
            normal[axis] = sign;

            // u × v must point along the face normal
            let mut u = Vec3::ZERO;
            let mut v = Vec3::ZERO;
            u[(axis + 1) % 3] = 1.0;
            v[(axis + 2) % 3] = 1.0;
            if sign < 0.0 {
                std::mem::swap(&mut u, &mut v);
            }

            let center = normal * half;
            let du = u * half;
            let dv = v * half;
            mesh.push_quad(
                [
                    (center - du - dv).to_array(),
                    (center + du - dv).to_array(),
                    (center + du + dv).to_array(),
                    (center - du + dv).to_array(),
                ],
                normal.to_array(),
            );
        }
    }

    mesh
}
