//! Profile shapes placed on a sketch plane

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bc_core::{CadResult, require_positive};

use super::SketchPlane;

/// 2D primitive drawn by a sketch tool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// Circle centered on the placement point
    Circle { radius: f32 },
    /// Rectangle centered on the placement point, width along the plane's X
    Rectangle { width: f32, height: f32 },
}

impl ProfileKind {
    /// Get the display name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            ProfileKind::Circle { .. } => "Circle",
            ProfileKind::Rectangle { .. } => "Rectangle",
        }
    }

    /// Check that every dimension is finite and positive
    pub fn validate(&self) -> CadResult<()> {
        match *self {
            ProfileKind::Circle { radius } => {
                require_positive("radius", radius)?;
            }
            ProfileKind::Rectangle { width, height } => {
                require_positive("width", width)?;
                require_positive("height", height)?;
            }
        }
        Ok(())
    }
}

/// A profile placed on a sketch plane
///
/// Placement is expressed in the owning plane's basis: `center` in plane
/// coordinates and `angle` as a rotation about the plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileShape {
    /// Unique identifier
    pub id: Uuid,
    /// Tool that drew the shape, with its dimensions
    pub kind: ProfileKind,
    /// Center in the plane's (x_axis, y_axis) coordinates
    pub center: Vec2,
    /// Rotation about the plane normal, in radians
    pub angle: f32,
}

impl ProfileShape {
    /// Create a new profile at a plane-local position
    pub fn new(kind: ProfileKind, center: Vec2) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            center,
            angle: 0.0,
        }
    }

    /// World position of the profile center on `plane`
    pub fn world_center(&self, plane: &SketchPlane) -> Vec3 {
        plane.to_world(self.center)
    }

    /// World orientation of the profile on `plane`
    pub fn world_orientation(&self, plane: &SketchPlane) -> Quat {
        plane.orientation() * Quat::from_rotation_z(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::CadError;

    #[test]
    fn test_validate() {
        assert!(ProfileKind::Circle { radius: 0.5 }.validate().is_ok());
        assert!(matches!(
            ProfileKind::Circle { radius: 0.0 }.validate(),
            Err(CadError::InvalidInput(_))
        ));
        assert!(
            ProfileKind::Rectangle {
                width: 1.0,
                height: f32::NAN
            }
            .validate()
            .is_err()
        );
        assert!(
            ProfileKind::Rectangle {
                width: -1.0,
                height: 1.0
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_world_placement() {
        let plane = SketchPlane::xy();
        let mut shape = ProfileShape::new(ProfileKind::Circle { radius: 1.0 }, Vec2::new(2.0, 3.0));
        assert_eq!(shape.world_center(&plane), Vec3::new(2.0, 3.0, 0.0));

        shape.angle = std::f32::consts::FRAC_PI_2;
        let x = shape.world_orientation(&plane) * Vec3::X;
        assert!(x.abs_diff_eq(Vec3::Y, 1e-6));
    }
}
