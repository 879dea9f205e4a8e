//! Solid Body Model
//!
//! This crate provides:
//! - Parametric solid bodies (box, cylinder, beveled prism) with world transforms
//! - Primitive tessellation into triangulated meshes
//! - The object registry holding every body of the model
//! - ASCII mesh document export
//! - Model configuration and the shared error taxonomy

pub mod body;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod primitive;
pub mod registry;

// Re-exports for convenience
pub use body::{Geometry, SolidBody, Transform};
pub use config::{ConfigError, ModelConfig};
pub use error::{CadError, CadResult, require_positive};
pub use export::{ExportOptions, export_mesh, export_mesh_to_string};
pub use primitive::TriMesh;
pub use registry::ObjectRegistry;
