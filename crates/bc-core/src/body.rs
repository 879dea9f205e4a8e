//! Solid body definitions

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{CYLINDER_SEGMENTS, MIN_CYLINDER_SEGMENTS};
use crate::error::{CadError, CadResult};
use crate::primitive::{
    TriMesh, generate_beveled_prism_mesh, generate_box_mesh, generate_cylinder_mesh,
};

/// Parametric geometry descriptor of a solid body
///
/// Every variant is centered on its local origin with the extrusion axis
/// along local +Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Rectangular prism
    Box {
        /// Extent along local X
        width: f32,
        /// Extent along local Y
        height: f32,
        /// Extent along local Z
        depth: f32,
    },
    /// Circular prism along local Z
    Cylinder {
        /// Radius in the XY plane
        radius: f32,
        /// Extent along local Z
        height: f32,
    },
    /// Rectangular prism with chamfered start and end faces
    BeveledPrism {
        /// Extent along local X
        width: f32,
        /// Extent along local Y
        height: f32,
        /// Extent along local Z
        depth: f32,
        /// Chamfer size
        bevel: f32,
    },
}

impl Geometry {
    /// Get the type name of this descriptor
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Box { .. } => "Box",
            Geometry::Cylinder { .. } => "Cylinder",
            Geometry::BeveledPrism { .. } => "BeveledPrism",
        }
    }

    /// Local extents [x, y, z] of the descriptor's bounding box
    pub fn bounding_size(&self) -> Vec3 {
        match *self {
            Geometry::Box {
                width,
                height,
                depth,
            }
            | Geometry::BeveledPrism {
                width,
                height,
                depth,
                ..
            } => Vec3::new(width, height, depth),
            Geometry::Cylinder { radius, height } => Vec3::new(radius * 2.0, radius * 2.0, height),
        }
    }

    /// Triangulate the descriptor in local coordinates
    pub fn tessellate(&self, segments: u32) -> TriMesh {
        match *self {
            Geometry::Box {
                width,
                height,
                depth,
            } => generate_box_mesh([width, height, depth]),
            Geometry::Cylinder { radius, height } => {
                generate_cylinder_mesh(radius, height, segments)
            }
            Geometry::BeveledPrism {
                width,
                height,
                depth,
                bevel,
            } => generate_beveled_prism_mesh(width, height, depth, bevel),
        }
    }
}

/// Rigid world transform (no scale)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World position of the local origin
    pub position: Vec3,
    /// Rotation applied before translation
    pub orientation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No rotation, at the world origin
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a transform from a position and an orientation
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Map a local point to world space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.orientation * point + self.position
    }

    /// Rotate a local direction into world space
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.orientation * vector
    }
}

/// A parametric solid tracked by the object registry
///
/// Serialized without its mesh; loading rebuilds the mesh from the
/// descriptor so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord", into = "BodyRecord")]
pub struct SolidBody {
    /// Unique identifier, kept across replacements
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// World transform
    pub transform: Transform,
    geometry: Geometry,
    segments: u32,
    /// Triangulation of `geometry`, always in sync with it
    mesh: TriMesh,
}

/// Serialized form of a [`SolidBody`]
#[derive(Serialize, Deserialize)]
struct BodyRecord {
    id: Uuid,
    name: String,
    transform: Transform,
    geometry: Geometry,
    #[serde(default = "default_segments")]
    segments: u32,
}

fn default_segments() -> u32 {
    CYLINDER_SEGMENTS
}

impl TryFrom<BodyRecord> for SolidBody {
    type Error = CadError;

    fn try_from(record: BodyRecord) -> CadResult<Self> {
        if record.segments < MIN_CYLINDER_SEGMENTS {
            return Err(CadError::InvalidInput(format!(
                "body {} needs at least {} segments, got {}",
                record.id, MIN_CYLINDER_SEGMENTS, record.segments
            )));
        }
        Ok(Self::with_id(
            record.id,
            record.name,
            record.geometry,
            record.transform,
            record.segments,
        ))
    }
}

impl From<SolidBody> for BodyRecord {
    fn from(body: SolidBody) -> Self {
        Self {
            id: body.id,
            name: body.name,
            transform: body.transform,
            geometry: body.geometry,
            segments: body.segments,
        }
    }
}

impl SolidBody {
    /// Create a new body with a fresh id
    pub fn new(name: impl Into<String>, geometry: Geometry, transform: Transform) -> Self {
        Self::with_segments(name, geometry, transform, CYLINDER_SEGMENTS)
    }

    /// Create a new body with a custom cylinder segment count
    pub fn with_segments(
        name: impl Into<String>,
        geometry: Geometry,
        transform: Transform,
        segments: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, geometry, transform, segments)
    }

    /// Create a body with an explicit identity (used by replacements)
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        geometry: Geometry,
        transform: Transform,
        segments: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            transform,
            mesh: geometry.tessellate(segments),
            geometry,
            segments,
        }
    }

    /// Parametric descriptor the mesh is generated from
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Local triangulated mesh
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// Segment count used for curved surfaces
    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Mesh triangles transformed into world space
    pub fn world_triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.mesh.triangles().map(|tri| {
            tri.map(|v| self.transform.transform_point(Vec3::from(v)))
        })
    }

    /// World-space axis-aligned bounding box as (min, max)
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        self.mesh
            .vertices
            .iter()
            .map(|v| self.transform.transform_point(Vec3::from(*v)))
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_bounding_size() {
        let cylinder = Geometry::Cylinder {
            radius: 0.5,
            height: 2.0,
        };
        assert_eq!(cylinder.bounding_size(), Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(cylinder.kind_name(), "Cylinder");
    }

    #[test]
    fn test_world_bounding_box() {
        let body = SolidBody::new(
            "block",
            Geometry::Box {
                width: 4.0,
                height: 1.0,
                depth: 2.0,
            },
            Transform::new(Vec3::new(0.0, 1.0, 0.0), Quat::from_rotation_x(FRAC_PI_2)),
        );
        let (min, max) = body.bounding_box().unwrap();
        let size = max - min;
        // Rotating about X swaps the Y and Z extents
        assert_relative_eq!(size.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(size.y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(size.z, 1.0, epsilon = 1e-5);
        assert_relative_eq!((min + max).y / 2.0, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_mesh_follows_descriptor() {
        let body = SolidBody::with_segments(
            "pin",
            Geometry::Cylinder {
                radius: 1.0,
                height: 1.0,
            },
            Transform::IDENTITY,
            8,
        );
        assert_eq!(body.triangle_count(), 32);
        assert_eq!(body.world_triangles().count(), 32);
    }

    #[test]
    fn test_transform_point() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_z(FRAC_PI_2));
        let p = t.transform_point(Vec3::X);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-6);
        assert!(t.transform_vector(Vec3::X).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_serialized_body_rebuilds_mesh() {
        let body = SolidBody::with_segments(
            "pin",
            Geometry::Cylinder {
                radius: 1.0,
                height: 0.5,
            },
            Transform::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_x(0.3)),
            8,
        );
        let text = ron::to_string(&body).unwrap();
        assert!(!text.contains("mesh"));

        let back: SolidBody = ron::from_str(&text).unwrap();
        assert_eq!(back, body);
        assert_eq!(back.segments(), 8);
        assert_eq!(back.triangle_count(), 32);
    }

    #[test]
    fn test_deserialize_validates_segments() {
        let record = |segments: &str| {
            format!(
                r#"(
                    id: "67e55044-10b1-426f-9247-bb680e5fe0c8",
                    name: "pin",
                    transform: (position: (0.0, 0.0, 0.0), orientation: (0.0, 0.0, 0.0, 1.0)),
                    geometry: Cylinder(radius: 1.0, height: 1.0),
                    {segments}
                )"#
            )
        };

        assert!(ron::from_str::<SolidBody>(&record("segments: 2,")).is_err());

        let body: SolidBody = ron::from_str(&record("")).unwrap();
        assert_eq!(body.segments(), CYLINDER_SEGMENTS);
        assert_eq!(body.mesh(), &body.geometry().tessellate(CYLINDER_SEGMENTS));
    }
}
