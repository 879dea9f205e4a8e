//! Mesh document export
//!
//! Merges every body's world-space triangles into a single ASCII
//! stereolithography document, bodies in registry order and triangles in
//! mesh order.

mod options;
mod stl;

use tracing::info;

use crate::body::SolidBody;
use crate::error::{CadError, CadResult};

pub use options::ExportOptions;

/// Approximate size of one facet record, used to pre-size the buffer
const FACET_BYTES: usize = 256;

/// Export bodies to an ASCII mesh document
pub fn export_mesh(bodies: &[SolidBody], options: &ExportOptions) -> CadResult<Vec<u8>> {
    export_mesh_to_string(bodies, options).map(String::into_bytes)
}

/// Export bodies to an ASCII mesh document as a string
pub fn export_mesh_to_string(bodies: &[SolidBody], options: &ExportOptions) -> CadResult<String> {
    if bodies.is_empty() {
        return Err(CadError::EmptyModel("model is empty, nothing to export".into()));
    }

    let name = options.header_name();
    let triangles: usize = bodies.iter().map(SolidBody::triangle_count).sum();
    let mut out = String::with_capacity(triangles * FACET_BYTES);

    out.push_str("solid ");
    out.push_str(&name);
    out.push('\n');

    let mut facets = 0;
    for body in bodies {
        facets += stl::write_body_facets(&mut out, body);
    }

    out.push_str("endsolid ");
    out.push_str(&name);
    out.push('\n');

    info!("Exported {} bodies as {} facets", bodies.len(), facets);
    Ok(out)
}
