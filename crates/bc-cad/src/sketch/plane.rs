//! Sketch plane derivation

use glam::{Mat3, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use bc_core::{CadError, CadResult};

/// A 2D working plane anchored in world space
///
/// The basis is right-handed and orthonormal: `x_axis × y_axis = normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchPlane {
    /// Origin point of the plane
    pub origin: Vec3,
    /// Unit normal of the plane
    pub normal: Vec3,
    /// In-plane X direction
    pub x_axis: Vec3,
    /// In-plane Y direction
    pub y_axis: Vec3,
}

impl SketchPlane {
    /// Derive a plane from a picked surface point and normal
    ///
    /// The basis is the rotation taking world +Z onto `normal` applied to
    /// world X and Y, so the same pick always yields the same plane.
    pub fn from_pick(point: Vec3, normal: Vec3) -> CadResult<Self> {
        if !point.is_finite() {
            return Err(CadError::InvalidInput(format!(
                "picked point must be finite, got {point}"
            )));
        }
        let normal = normal.normalize_or_zero();
        if normal == Vec3::ZERO || !normal.is_finite() {
            return Err(CadError::InvalidInput(
                "picked surface normal must be a finite non-zero vector".into(),
            ));
        }

        let rotation = Quat::from_rotation_arc(Vec3::Z, normal);
        Ok(Self {
            origin: point,
            normal,
            x_axis: (rotation * Vec3::X).normalize(),
            y_axis: normal.cross(rotation * Vec3::X).normalize(),
        })
    }

    /// Create an XY plane (Z normal)
    pub fn xy() -> Self {
        Self {
            origin: Vec3::ZERO,
            normal: Vec3::Z,
            x_axis: Vec3::X,
            y_axis: Vec3::Y,
        }
    }

    /// Orientation taking local X/Y/Z onto the plane's x_axis/y_axis/normal
    pub fn orientation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.x_axis, self.y_axis, self.normal)).normalize()
    }

    /// Project a world point onto the plane, in plane-local coordinates
    pub fn project(&self, point: Vec3) -> Vec2 {
        let offset = point - self.origin;
        Vec2::new(offset.dot(self.x_axis), offset.dot(self.y_axis))
    }

    /// Convert plane-local coordinates to a world point
    pub fn to_world(&self, local: Vec2) -> Vec3 {
        self.origin + self.x_axis * local.x + self.y_axis * local.y
    }

    /// Signed distance of a world point from the plane
    pub fn distance_to(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.normal)
    }
}
