//! Global constants for bc-core

/// Default number of segments for cylinder mesh generation
pub const CYLINDER_SEGMENTS: u32 = 32;

/// Minimum number of segments a cylinder can be tessellated with
pub const MIN_CYLINDER_SEGMENTS: u32 = 3;

/// Default size of the initial main block [width, height, depth]
pub const BASE_BLOCK_SIZE: [f32; 3] = [4.0, 1.0, 4.0];

/// Name given to the initial main block
pub const MAIN_BLOCK_NAME: &str = "mainBlock";

/// Name given to bodies created by extrusion
pub const EXTRUSION_NAME: &str = "extrusion";

/// Distance from the sketch plane at which the viewport frames a new sketch
pub const SKETCH_VIEW_DISTANCE: f32 = 8.0;

/// Default file name for the exported mesh document
pub const DEFAULT_EXPORT_FILE: &str = "cad_model.stl";

/// Default solid name written to the mesh document header
pub const DEFAULT_SOLID_NAME: &str = "exported";

/// Below this length a triangle normal is considered degenerate
pub const DEGENERATE_EPSILON: f32 = 1e-12;
