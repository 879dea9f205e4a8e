//! Cylinder mesh generation
//!
//! A circular profile of `segments` sides extruded along Z. Each side is a
//! flat quad and each cap is a fan around the axis, so the mesh has
//! `4 * segments` triangles.

use std::f32::consts::TAU;

use super::TriMesh;

/// Generate a cylinder mesh centered on the origin, axis along Z
///
/// # Arguments
/// * `radius` - Radius in the XY plane
/// * `height` - Extent along Z
/// * `segments` - Number of sides approximating the circle
pub fn generate_cylinder_mesh(radius: f32, height: f32, segments: u32) -> TriMesh {
    let hz = height / 2.0;
    let mut mesh = TriMesh::new();

    let rim = |i: u32| {
        let theta = (i % segments) as f32 / segments as f32 * TAU;
        (theta.cos(), theta.sin())
    };

    for i in 0..segments {
        let (c0, s0) = rim(i);
        let (c1, s1) = rim(i + 1);
        let (a, b) = ([radius * c0, radius * s0], [radius * c1, radius * s1]);

        // Side faces outward through the middle of the segment
        let mid = (i as f32 + 0.5) / segments as f32 * TAU;
        mesh.push_quad(
            [
                [a[0], a[1], -hz],
                [b[0], b[1], -hz],
                [b[0], b[1], hz],
                [a[0], a[1], hz],
            ],
            [mid.cos(), mid.sin(), 0.0],
        );

        mesh.push_triangle(
            [[0.0, 0.0, hz], [a[0], a[1], hz], [b[0], b[1], hz]],
            [0.0, 0.0, 1.0],
        );
        mesh.push_triangle(
            [[0.0, 0.0, -hz], [b[0], b[1], -hz], [a[0], a[1], -hz]],
            [0.0, 0.0, -1.0],
        );
    }

    mesh
}
