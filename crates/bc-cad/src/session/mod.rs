//! Modeling Session
//!
//! The state machine driven by user commands. It owns the object registry,
//! the active sketch (only while sketching) and the finished sketch waiting
//! for extrusion. Every command either fully applies or fails with the
//! session and registry unchanged.
//!
//! ```text
//! Idle --StartSketch--> AwaitingFaceSelection --FacePicked--> Sketching
//! Sketching --SelectTool / PlaceShape--> Sketching
//! Sketching --FinishSketch--> Idle
//! Idle --RequestChamferTarget--> AwaitingChamferTarget --ChamferPicked--> Idle
//! ```

mod command;
mod mode;
mod selection;
mod viewport;

pub use command::{Command, CommandOutcome};
pub use mode::SessionState;
pub use selection::{PickHit, PickTarget, Ray, SelectionController};
pub use viewport::{NullViewport, ViewToken, ViewportHost};

use glam::Vec3;
use tracing::{debug, info, warn};
use uuid::Uuid;

use bc_core::{CadError, CadResult, ModelConfig, ObjectRegistry, export_mesh};

use crate::feature::{chamfer, extrude_into};
use crate::sketch::{ProfileKind, ProfileShape, Sketch, SketchPlane};
use mode::{ActiveSketch, SessionMode};

const WELCOME: &str = "Welcome! Click 'Start Sketch' to begin.";

fn rejected(command: &'static str, state: SessionState) -> CadError {
    CadError::InvalidTransition {
        command,
        state: state.name(),
    }
}

/// Build the registry holding only the configured main block
fn initial_registry(config: &ModelConfig) -> CadResult<ObjectRegistry> {
    let mut registry = ObjectRegistry::new();
    let id = registry.add(config.main_block())?;
    registry.designate_main(id)?;
    Ok(registry)
}

/// A single-user modeling session
pub struct ModelingSession {
    config: ModelConfig,
    registry: ObjectRegistry,
    mode: SessionMode,
    /// Sketch left with profiles, waiting for `Extrude`
    finished: Option<Sketch>,
    saved_view: Option<ViewToken>,
    viewport: Box<dyn ViewportHost>,
    status: String,
}

impl ModelingSession {
    /// Create a headless session
    pub fn new(config: ModelConfig) -> CadResult<Self> {
        Self::with_viewport(config, Box::new(NullViewport))
    }

    /// Create a session driving the given viewport
    pub fn with_viewport(config: ModelConfig, viewport: Box<dyn ViewportHost>) -> CadResult<Self> {
        config.validate()?;
        let registry = initial_registry(&config)?;
        Ok(Self {
            config,
            registry,
            mode: SessionMode::Idle,
            finished: None,
            saved_view: None,
            viewport,
            status: WELCOME.to_string(),
        })
    }

    // ============== Queries ==============

    pub fn state(&self) -> SessionState {
        self.mode.state()
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Status line describing the last accepted command
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The sketch plane, present only while sketching
    pub fn active_plane(&self) -> Option<&SketchPlane> {
        self.mode.sketch().map(|active| &active.sketch.plane)
    }

    pub fn active_sketch(&self) -> Option<&Sketch> {
        self.mode.sketch().map(|active| &active.sketch)
    }

    pub fn pending_tool(&self) -> Option<ProfileKind> {
        self.mode.sketch().and_then(|active| active.pending_tool)
    }

    /// Sketch waiting for extrusion
    pub fn finished_sketch(&self) -> Option<&Sketch> {
        self.finished.as_ref()
    }

    /// Profiles of the active sketch, or of the finished one when idle
    pub fn placed_profiles(&self) -> &[ProfileShape] {
        self.active_sketch()
            .or(self.finished.as_ref())
            .map(Sketch::profiles)
            .unwrap_or_default()
    }

    pub fn extrusion_available(&self) -> bool {
        self.finished.as_ref().is_some_and(|sketch| !sketch.is_empty())
    }

    /// View saved on entering the sketch, restored on leaving it
    pub fn saved_view(&self) -> Option<&ViewToken> {
        self.saved_view.as_ref()
    }

    // ============== Picking ==============

    /// What a pick ray should be intersected with in the current state
    pub fn pick_target(&self) -> PickTarget<'_> {
        match &self.mode {
            SessionMode::Idle => PickTarget::Nothing,
            SessionMode::AwaitingFaceSelection | SessionMode::AwaitingChamferTarget => {
                PickTarget::Bodies(self.registry.list())
            }
            SessionMode::Sketching(active) => PickTarget::SketchPlane(&active.sketch.plane),
        }
    }

    /// Turn a selection hit into the command the current state expects
    pub fn command_for_hit(&self, hit: &PickHit, chamfer_size: f32) -> Option<Command> {
        match self.mode {
            SessionMode::Idle => None,
            SessionMode::AwaitingFaceSelection => Some(Command::FacePicked {
                point: hit.point,
                normal: hit.normal,
            }),
            SessionMode::Sketching(_) => Some(Command::PlaceShape { point: hit.point }),
            SessionMode::AwaitingChamferTarget => hit.body_id.map(|body_id| {
                Command::ChamferPicked {
                    body_id,
                    size: chamfer_size,
                }
            }),
        }
    }

    /// Pick with `controller` and apply the resulting command, if any
    pub fn handle_pick(
        &mut self,
        controller: &dyn SelectionController,
        ray: &Ray,
        chamfer_size: f32,
    ) -> CadResult<CommandOutcome> {
        let command = {
            let target = self.pick_target();
            if target.is_nothing() {
                return Ok(CommandOutcome::NoOp);
            }
            controller
                .pick(ray, &target)
                .and_then(|hit| self.command_for_hit(&hit, chamfer_size))
        };

        match command {
            Some(command) => self.apply(command),
            None => Ok(CommandOutcome::NoOp),
        }
    }

    // ============== Commands ==============

    /// Apply one command
    pub fn apply(&mut self, command: Command) -> CadResult<CommandOutcome> {
        let name = command.name();
        let result = match command {
            Command::StartSketch => self.start_sketch(),
            Command::FacePicked { point, normal } => self.face_picked(point, normal),
            Command::SelectTool(kind) => self.select_tool(kind),
            Command::PlaceShape { point } => self.place_shape(point),
            Command::FinishSketch => self.finish_sketch(),
            Command::Extrude { depth } => self.extrude(depth),
            Command::RequestChamferTarget => self.request_chamfer_target(),
            Command::ChamferPicked { body_id, size } => self.chamfer_picked(body_id, size),
            Command::ExportMesh => self.export_mesh().map(CommandOutcome::Exported),
            Command::Cancel => self.cancel(),
            Command::Reset => self.reset(),
        };

        if let Err(e) = &result {
            warn!("{} rejected: {}", name, e);
        }
        result
    }

    pub fn start_sketch(&mut self) -> CadResult<CommandOutcome> {
        if !matches!(self.mode, SessionMode::Idle) {
            return Err(rejected("StartSketch", self.state()));
        }

        if let Some(previous) = self.finished.take() {
            debug!("Discarding {} unextruded profiles", previous.len());
        }
        self.mode = SessionMode::AwaitingFaceSelection;
        self.status = "Select a face on any model to begin your sketch.".into();
        info!("Awaiting face selection");
        Ok(CommandOutcome::StateChanged(SessionState::AwaitingFaceSelection))
    }

    pub fn face_picked(&mut self, point: Vec3, normal: Vec3) -> CadResult<CommandOutcome> {
        if !matches!(self.mode, SessionMode::AwaitingFaceSelection) {
            return Err(rejected("FacePicked", self.state()));
        }
        let plane = SketchPlane::from_pick(point, normal)?;

        self.saved_view = Some(self.viewport.save_view());
        self.viewport.set_navigation_enabled(false);
        self.viewport.frame(
            plane.origin + plane.normal * self.config.sketch_view_distance,
            plane.origin,
        );

        info!(
            "Entered sketch mode at {} (normal {})",
            plane.origin, plane.normal
        );
        debug!("Sketch basis x={} y={}", plane.x_axis, plane.y_axis);
        self.mode = SessionMode::Sketching(ActiveSketch::new(Sketch::new(plane)));
        self.status = "Sketch Mode: Select a tool to define dimensions.".into();
        Ok(CommandOutcome::StateChanged(SessionState::Sketching))
    }

    pub fn select_tool(&mut self, kind: ProfileKind) -> CadResult<CommandOutcome> {
        let state = self.state();
        let active = self
            .mode
            .sketch_mut()
            .ok_or_else(|| rejected("SelectTool", state))?;
        kind.validate()?;
        active.pending_tool = Some(kind);

        self.status = match kind {
            ProfileKind::Circle { radius } => {
                format!("Radius set to {radius}. Click surface to place.")
            }
            ProfileKind::Rectangle { width, height } => {
                format!("Rectangle set to {width}x{height}. Click surface.")
            }
        };
        debug!("Selected {} tool", kind.name());
        Ok(CommandOutcome::ToolSelected(kind))
    }

    pub fn place_shape(&mut self, point: Vec3) -> CadResult<CommandOutcome> {
        let state = self.state();
        let active = self
            .mode
            .sketch_mut()
            .ok_or_else(|| rejected("PlaceShape", state))?;
        let Some(kind) = active.pending_tool else {
            debug!("No tool selected, placement ignored");
            return Ok(CommandOutcome::NoOp);
        };

        let shape = *active.sketch.place(kind, point)?;
        active.pending_tool = None;

        info!("Placed {} at {}", kind.name(), shape.center);
        self.status = "Shape placed. Select another tool or Finish.".into();
        Ok(CommandOutcome::ShapePlaced(shape.id))
    }

    pub fn finish_sketch(&mut self) -> CadResult<CommandOutcome> {
        match std::mem::take(&mut self.mode) {
            SessionMode::Sketching(active) => {
                self.leave_sketch_view();
                if active.sketch.is_empty() {
                    info!("Sketch cancelled");
                    self.status = "Sketch cancelled.".into();
                    return Ok(CommandOutcome::SketchCancelled);
                }

                let profiles = active.sketch.len();
                info!("Sketch finished with {} profiles", profiles);
                self.finished = Some(active.sketch);
                self.status = "Sketch finished. Ready to extrude.".into();
                Ok(CommandOutcome::SketchFinished { profiles })
            }
            SessionMode::AwaitingFaceSelection => {
                info!("Face selection cancelled");
                self.status = "Sketch cancelled.".into();
                Ok(CommandOutcome::SketchCancelled)
            }
            other => {
                let state = other.state();
                self.mode = other;
                Err(rejected("FinishSketch", state))
            }
        }
    }

    pub fn extrude(&mut self, depth: f32) -> CadResult<CommandOutcome> {
        if !matches!(self.mode, SessionMode::Idle) {
            return Err(rejected("Extrude", self.state()));
        }
        let Some(sketch) = self.finished.as_ref() else {
            return Err(CadError::EmptyModel(
                "there are no sketch elements to extrude".into(),
            ));
        };

        let ids = extrude_into(
            &mut self.registry,
            sketch,
            depth,
            self.config.cylinder_segments,
        )?;
        self.finished = None;
        self.status = "Extrusion complete. You can now sketch on the new shapes.".into();
        Ok(CommandOutcome::BodiesAdded(ids))
    }

    pub fn request_chamfer_target(&mut self) -> CadResult<CommandOutcome> {
        if !matches!(self.mode, SessionMode::Idle) {
            return Err(rejected("RequestChamferTarget", self.state()));
        }
        self.mode = SessionMode::AwaitingChamferTarget;
        self.status = "Select a rectangular object to apply chamfer.".into();
        info!("Awaiting chamfer target");
        Ok(CommandOutcome::StateChanged(SessionState::AwaitingChamferTarget))
    }

    pub fn chamfer_picked(&mut self, body_id: Uuid, size: f32) -> CadResult<CommandOutcome> {
        if !matches!(self.mode, SessionMode::AwaitingChamferTarget) {
            return Err(rejected("ChamferPicked", self.state()));
        }
        let body = chamfer(
            &mut self.registry,
            body_id,
            size,
            self.config.cylinder_segments,
        )?;
        self.mode = SessionMode::Idle;
        self.status = format!("Chamfer of size {size} applied.");
        Ok(CommandOutcome::BodyReplaced(body.id))
    }

    /// Export the whole registry as a mesh document
    pub fn export_mesh(&mut self) -> CadResult<Vec<u8>> {
        let bytes = export_mesh(self.registry.list(), &self.config.export)?;
        self.status = format!("Model exported as {}", self.config.export.file_name);
        Ok(bytes)
    }

    pub fn cancel(&mut self) -> CadResult<CommandOutcome> {
        match std::mem::take(&mut self.mode) {
            SessionMode::Idle => Ok(CommandOutcome::NoOp),
            SessionMode::Sketching(active) => {
                self.leave_sketch_view();
                info!("Sketch abandoned, {} profiles discarded", active.sketch.len());
                self.status = "Sketch cancelled.".into();
                Ok(CommandOutcome::SketchCancelled)
            }
            SessionMode::AwaitingFaceSelection | SessionMode::AwaitingChamferTarget => {
                self.status = "Cancelled.".into();
                Ok(CommandOutcome::StateChanged(SessionState::Idle))
            }
        }
    }

    /// Reinitialize the session and the model
    pub fn reset(&mut self) -> CadResult<CommandOutcome> {
        let registry = initial_registry(&self.config)?;
        if matches!(self.mode, SessionMode::Sketching(_)) {
            self.leave_sketch_view();
        }

        self.mode = SessionMode::Idle;
        self.finished = None;
        self.registry = registry;
        self.status = WELCOME.to_string();
        info!("Model reset");
        Ok(CommandOutcome::ModelReset)
    }

    fn leave_sketch_view(&mut self) {
        self.viewport.set_navigation_enabled(true);
        if let Some(token) = self.saved_view.take() {
            self.viewport.restore_view(&token);
        }
    }
}
