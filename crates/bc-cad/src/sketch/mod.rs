//! Sketch System
//!
//! A sketch is a set of profile shapes placed on one sketch plane.

mod plane;
mod profile;

pub use plane::SketchPlane;
pub use profile::{ProfileKind, ProfileShape};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use bc_core::CadResult;

/// Distance below which a placement point counts as on the plane
const PLANE_TOLERANCE: f32 = 1e-4;

/// A sketch: one plane and the profiles placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// Unique identifier
    pub id: Uuid,
    /// Plane every profile is expressed in
    pub plane: SketchPlane,
    profiles: Vec<ProfileShape>,
}

impl Sketch {
    /// Create an empty sketch on the given plane
    pub fn new(plane: SketchPlane) -> Self {
        Self {
            id: Uuid::new_v4(),
            plane,
            profiles: Vec::new(),
        }
    }

    /// Profiles in placement order
    pub fn profiles(&self) -> &[ProfileShape] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Place a profile at a world point, projected onto the plane
    pub fn place(&mut self, kind: ProfileKind, point: Vec3) -> CadResult<&ProfileShape> {
        kind.validate()?;
        if !point.is_finite() {
            return Err(bc_core::CadError::InvalidInput(format!(
                "placement point must be finite, got {point}"
            )));
        }
        let offset = self.plane.distance_to(point);
        if offset.abs() > PLANE_TOLERANCE {
            debug!("Placement point is {} off the sketch plane, projecting", offset);
        }

        self.profiles
            .push(ProfileShape::new(kind, self.plane.project(point)));
        Ok(&self.profiles[self.profiles.len() - 1])
    }
}
