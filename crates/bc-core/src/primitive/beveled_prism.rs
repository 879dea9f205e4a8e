//! Beveled prism mesh generation
//!
//! A rectangular profile extruded along Z whose start and end faces are
//! chamfered. The outline at the bevel's outer edge keeps the full
//! width/height and the end caps are inset by the bevel size, so the solid
//! never grows beyond its `width × height × depth` box.

use glam::Vec3;

use super::TriMesh;
use crate::constants::DEGENERATE_EPSILON;

/// Generate a beveled prism mesh
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z (extrusion axis)
/// * `bevel` - Inset of the end caps and axial length of each bevel.
///   The axial length is clamped to `depth / 2`.
pub fn generate_beveled_prism_mesh(width: f32, height: f32, depth: f32, bevel: f32) -> TriMesh {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;
    let axial = bevel.min(hd);

    let rings = [
        ring(hw - bevel, hh - bevel, -hd),
        ring(hw, hh, -hd + axial),
        ring(hw, hh, hd - axial),
        ring(hw - bevel, hh - bevel, hd),
    ];

    let mut mesh = TriMesh::new();

    // Start cap, facing -Z
    let start = rings[0];
    mesh.push_quad([start[0], start[3], start[2], start[1]], [0.0, 0.0, -1.0]);

    for band in rings.windows(2) {
        let (lower, upper) = (band[0], band[1]);
        if (upper[0][2] - lower[0][2]).abs() <= DEGENERATE_EPSILON {
            // Bevels meet in the middle, no straight band left
            continue;
        }
        for k in 0..4 {
            let next = (k + 1) % 4;
            let corners = [lower[k], lower[next], upper[next], upper[k]];
            mesh.push_quad(corners, quad_normal(&corners));
        }
    }

    // End cap, facing +Z
    let end = rings[3];
    mesh.push_quad([end[0], end[1], end[2], end[3]], [0.0, 0.0, 1.0]);

    mesh
}

/// Rectangle corners at height `z`, counter-clockwise seen from +Z
fn ring(ex: f32, ey: f32, z: f32) -> [[f32; 3]; 4] {
    [[-ex, -ey, z], [ex, -ey, z], [ex, ey, z], [-ex, ey, z]]
}

fn quad_normal(corners: &[[f32; 3]; 4]) -> [f32; 3] {
    let a = Vec3::from(corners[0]);
    let b = Vec3::from(corners[1]);
    let d = Vec3::from(corners[3]);
    (b - a).cross(d - a).normalize_or_zero().to_array()
}
