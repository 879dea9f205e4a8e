//! Session mode state types

use serde::{Deserialize, Serialize};

use crate::sketch::{ProfileKind, Sketch};

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Normal 3D modeling
    #[default]
    Idle,
    /// Waiting for the user to pick the face to sketch on
    AwaitingFaceSelection,
    /// 2D sketching on the active sketch plane
    Sketching,
    /// Waiting for the user to pick the body to chamfer
    AwaitingChamferTarget,
}

impl SessionState {
    /// Get the display name of the state
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::AwaitingFaceSelection => "AwaitingFaceSelection",
            SessionState::Sketching => "Sketching",
            SessionState::AwaitingChamferTarget => "AwaitingChamferTarget",
        }
    }
}

/// The sketch being edited and the armed tool
#[derive(Debug, Clone)]
pub(crate) struct ActiveSketch {
    pub sketch: Sketch,
    pub pending_tool: Option<ProfileKind>,
}

impl ActiveSketch {
    pub fn new(sketch: Sketch) -> Self {
        Self {
            sketch,
            pending_tool: None,
        }
    }
}

/// Session mode; the sketch plane only exists while sketching
#[derive(Debug, Clone, Default)]
pub(crate) enum SessionMode {
    #[default]
    Idle,
    AwaitingFaceSelection,
    Sketching(ActiveSketch),
    AwaitingChamferTarget,
}

impl SessionMode {
    pub fn state(&self) -> SessionState {
        match self {
            SessionMode::Idle => SessionState::Idle,
            SessionMode::AwaitingFaceSelection => SessionState::AwaitingFaceSelection,
            SessionMode::Sketching(_) => SessionState::Sketching,
            SessionMode::AwaitingChamferTarget => SessionState::AwaitingChamferTarget,
        }
    }

    pub fn sketch(&self) -> Option<&ActiveSketch> {
        match self {
            SessionMode::Sketching(active) => Some(active),
            _ => None,
        }
    }

    pub fn sketch_mut(&mut self) -> Option<&mut ActiveSketch> {
        match self {
            SessionMode::Sketching(active) => Some(active),
            _ => None,
        }
    }
}
