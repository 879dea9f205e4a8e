//! Property-based tests for extrusion, chamfer, export and sketch planes

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use proptest::prelude::*;

use bc_cad::{ProfileKind, Sketch, SketchPlane, chamfered, extrude};
use bc_core::{
    ExportOptions, Geometry, ObjectRegistry, SolidBody, Transform, export_mesh_to_string,
};

const TOLERANCE: f32 = 1e-3;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Positive extent large enough to stay clear of the validation threshold
fn arb_positive_dim() -> impl Strategy<Value = f32> {
    0.01f32..100.0
}

fn arb_point() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// Any direction that is not near zero, not necessarily normalized
fn arb_normal() -> impl Strategy<Value = Vec3> {
    (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        .prop_filter("normal must be non-zero", |n| n.length() > 1e-3)
}

fn arb_orientation() -> impl Strategy<Value = Quat> {
    (arb_normal(), -PI..PI).prop_map(|(axis, angle)| Quat::from_axis_angle(axis.normalize(), angle))
}

/// Bevel is a fraction of the largest size the cross-section allows
fn arb_geometry() -> impl Strategy<Value = Geometry> {
    prop_oneof![
        (arb_positive_dim(), arb_positive_dim(), arb_positive_dim()).prop_map(
            |(width, height, depth)| Geometry::Box {
                width,
                height,
                depth
            }
        ),
        (arb_positive_dim(), arb_positive_dim())
            .prop_map(|(radius, height)| Geometry::Cylinder { radius, height }),
        (
            arb_positive_dim(),
            arb_positive_dim(),
            arb_positive_dim(),
            0.01f32..0.99
        )
            .prop_map(|(width, height, depth, fraction)| Geometry::BeveledPrism {
                width,
                height,
                depth,
                bevel: fraction * width.min(height) / 2.0,
            }),
    ]
}

fn arb_body() -> impl Strategy<Value = SolidBody> {
    (arb_geometry(), arb_point(), arb_orientation(), 3u32..48).prop_map(
        |(geometry, position, orientation, segments)| {
            SolidBody::with_segments(
                "body",
                geometry,
                Transform::new(position, orientation),
                segments,
            )
        },
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn circle_extrudes_to_matching_cylinder(
        radius in arb_positive_dim(),
        depth in arb_positive_dim(),
        origin in arb_point(),
        normal in arb_normal(),
        segments in 3u32..64,
    ) {
        let plane = SketchPlane::from_pick(origin, normal).unwrap();
        let mut sketch = Sketch::new(plane);
        sketch.place(ProfileKind::Circle { radius }, origin).unwrap();

        let bodies = extrude(&sketch, depth, segments).unwrap();
        prop_assert_eq!(bodies.len(), 1);
        prop_assert_eq!(
            *bodies[0].geometry(),
            Geometry::Cylinder { radius, height: depth }
        );
        prop_assert_eq!(bodies[0].triangle_count(), 4 * segments as usize);

        // Centered half the depth above the plane, axis along its normal
        let expected = origin + plane.normal * (depth / 2.0);
        let position = bodies[0].transform.position;
        prop_assert!(position.abs_diff_eq(expected, TOLERANCE * (1.0 + expected.length())));
        let axis = bodies[0].transform.transform_vector(Vec3::Z);
        prop_assert!(axis.abs_diff_eq(plane.normal, TOLERANCE));
    }

    #[test]
    fn chamfer_keeps_identity_and_stays_inside_box(
        width in arb_positive_dim(),
        height in arb_positive_dim(),
        depth in arb_positive_dim(),
        fraction in 0.01f32..0.99,
        position in arb_point(),
        orientation in arb_orientation(),
    ) {
        let size = fraction * width.min(height) / 2.0;
        let body = SolidBody::new(
            "block",
            Geometry::Box { width, height, depth },
            Transform::new(position, orientation),
        );

        let result = chamfered(&body, size, 32).unwrap();
        prop_assert_eq!(result.id, body.id);
        prop_assert_eq!(&result.name, &body.name);
        prop_assert_eq!(result.transform, body.transform);
        prop_assert_eq!(
            *result.geometry(),
            Geometry::BeveledPrism { width, height, depth, bevel: size }
        );

        let (min, max) = result.mesh().bounds().unwrap();
        let volume: f32 = (0..3).map(|i| max[i] - min[i]).product();
        prop_assert!(volume <= width * height * depth * (1.0 + 1e-5));
    }

    #[test]
    fn export_writes_one_facet_per_triangle(
        bodies in prop::collection::vec(arb_body(), 1..6),
    ) {
        let mut registry = ObjectRegistry::new();
        registry.add_all(bodies).unwrap();

        let doc = export_mesh_to_string(registry.list(), &ExportOptions::default()).unwrap();
        let expected = registry.total_triangle_count();
        prop_assert_eq!(doc.matches("facet normal").count(), expected);
        prop_assert_eq!(doc.matches("endfacet").count(), expected);
        prop_assert!(!doc.contains("NaN"));
    }

    #[test]
    fn sketch_plane_basis_is_orthonormal(
        origin in arb_point(),
        normal in arb_normal(),
    ) {
        let plane = SketchPlane::from_pick(origin, normal).unwrap();

        for axis in [plane.x_axis, plane.y_axis, plane.normal] {
            prop_assert!((axis.length() - 1.0).abs() < TOLERANCE);
        }
        prop_assert!(plane.x_axis.dot(plane.y_axis).abs() < TOLERANCE);
        prop_assert!(plane.x_axis.dot(plane.normal).abs() < TOLERANCE);
        prop_assert!(plane.y_axis.dot(plane.normal).abs() < TOLERANCE);
        prop_assert!(plane.x_axis.cross(plane.y_axis).abs_diff_eq(plane.normal, TOLERANCE));
        prop_assert!(plane.normal.abs_diff_eq(normal.normalize(), TOLERANCE));
        prop_assert_eq!(plane.origin, origin);

        // Same pick, same basis
        prop_assert_eq!(SketchPlane::from_pick(origin, normal).unwrap(), plane);
    }
}
