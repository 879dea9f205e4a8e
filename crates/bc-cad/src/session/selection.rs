//! Selection controller interface
//!
//! Ray/scene intersection is done outside the core. The session only says
//! what should be intersected and turns the resulting hit into a command.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bc_core::SolidBody;

use crate::sketch::SketchPlane;

/// A pick ray in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest intersection reported by the selection controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickHit {
    pub point: Vec3,
    pub normal: Vec3,
    /// Body that was hit, `None` when the sketch plane was hit
    pub body_id: Option<Uuid>,
}

/// What the selection controller should intersect in the current state
#[derive(Debug, Clone, Copy)]
pub enum PickTarget<'a> {
    /// Nothing is pickable
    Nothing,
    /// Registry bodies (face selection, chamfer target)
    Bodies(&'a [SolidBody]),
    /// The active sketch plane (shape placement)
    SketchPlane(&'a SketchPlane),
}

impl PickTarget<'_> {
    pub fn is_nothing(&self) -> bool {
        matches!(self, PickTarget::Nothing)
    }
}

/// External ray/scene intersection service
pub trait SelectionController {
    /// Return the nearest hit of `ray` against `target`
    fn pick(&self, ray: &Ray, target: &PickTarget<'_>) -> Option<PickHit>;
}
