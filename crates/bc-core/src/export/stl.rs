//! ASCII STL document writer

use std::fmt::Write;

use glam::Vec3;

use crate::body::SolidBody;
use crate::constants::DEGENERATE_EPSILON;

/// Append one body's world-space facets to `out`, returns the facet count
pub(super) fn write_body_facets(out: &mut String, body: &SolidBody) -> usize {
    let mesh = body.mesh();
    let mut count = 0;

    for (tri, world) in mesh.indices.chunks_exact(3).zip(body.world_triangles()) {
        let fallback = || {
            body.transform
                .transform_vector(Vec3::from(mesh.normals[tri[0] as usize]))
                .normalize_or_zero()
        };
        let normal = facet_normal(&world).unwrap_or_else(fallback);
        write_facet(out, normal, &world);
        count += 1;
    }

    count
}

/// Unit normal from the triangle's counter-clockwise winding
///
/// Computed in f64 so edges near `f32::MAX` do not overflow the cross product.
fn facet_normal(tri: &[Vec3; 3]) -> Option<Vec3> {
    let [a, b, c] = tri.map(|v| v.as_dvec3());
    let cross = (b - a).cross(c - a);
    let len = cross.length();
    (len.is_finite() && len > f64::from(DEGENERATE_EPSILON)).then(|| (cross / len).as_vec3())
}

// `{}` on f32 prints the shortest text that parses back to the same value
fn write_facet(out: &mut String, n: Vec3, tri: &[Vec3; 3]) {
    let _ = writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z);
    out.push_str("    outer loop\n");
    for v in tri {
        let _ = writeln!(out, "      vertex {} {} {}", v.x, v.y, v.z);
    }
    out.push_str("    endloop\n");
    out.push_str("  endfacet\n");
}
