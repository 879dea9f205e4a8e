//! Commands accepted by the modeling session

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sketch::ProfileKind;

use super::SessionState;

/// A discrete user command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Begin face selection for a new sketch
    StartSketch,
    /// A face was picked; derive the sketch plane from it
    FacePicked { point: Vec3, normal: Vec3 },
    /// Arm a drawing tool
    SelectTool(ProfileKind),
    /// Place the armed tool's shape at a point on the sketch plane
    PlaceShape { point: Vec3 },
    /// Leave sketch mode, keeping placed profiles for extrusion
    FinishSketch,
    /// Extrude the finished sketch's profiles
    Extrude { depth: f32 },
    /// Begin chamfer target selection
    RequestChamferTarget,
    /// A body was picked as chamfer target
    ChamferPicked { body_id: Uuid, size: f32 },
    /// Export every body as a mesh document
    ExportMesh,
    /// Abandon face selection, chamfer selection or the active sketch
    Cancel,
    /// Reinitialize the session and the model
    Reset,
}

impl Command {
    /// Get the name of this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartSketch => "StartSketch",
            Command::FacePicked { .. } => "FacePicked",
            Command::SelectTool(_) => "SelectTool",
            Command::PlaceShape { .. } => "PlaceShape",
            Command::FinishSketch => "FinishSketch",
            Command::Extrude { .. } => "Extrude",
            Command::RequestChamferTarget => "RequestChamferTarget",
            Command::ChamferPicked { .. } => "ChamferPicked",
            Command::ExportMesh => "ExportMesh",
            Command::Cancel => "Cancel",
            Command::Reset => "Reset",
        }
    }
}

/// Result of a successfully applied command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The session moved to a new state
    StateChanged(SessionState),
    /// A tool is armed
    ToolSelected(ProfileKind),
    /// A profile was placed
    ShapePlaced(Uuid),
    /// The command was accepted but had nothing to do
    NoOp,
    /// The sketch was left without any profile
    SketchCancelled,
    /// The sketch was left with profiles ready to extrude
    SketchFinished { profiles: usize },
    /// Bodies created by extrusion
    BodiesAdded(Vec<Uuid>),
    /// A body was replaced in place
    BodyReplaced(Uuid),
    /// The exported mesh document
    Exported(Vec<u8>),
    /// Session and model were reinitialized
    ModelReset,
}
