//! Sketch Session and Feature Operations
//!
//! This crate provides:
//! - Sketch planes derived from picked faces, and profile placement on them
//! - Extrusion of sketch profiles into solid bodies
//! - Chamfering of box bodies
//! - The modeling session state machine driven by user commands

pub mod feature;
pub mod session;
pub mod sketch;

// Re-exports for convenience
pub use feature::{chamfer, chamfered, extrude, extrude_into, extrude_profile};
pub use session::{
    Command, CommandOutcome, ModelingSession, NullViewport, PickHit, PickTarget, Ray,
    SelectionController, SessionState, ViewToken, ViewportHost,
};
pub use sketch::{ProfileKind, ProfileShape, Sketch, SketchPlane};
