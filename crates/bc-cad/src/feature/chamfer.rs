//! Chamfering of box bodies
//!
//! The box's width × height rectangle is re-extruded along its depth axis
//! with a symmetric bevel on the start and end faces. The replacement keeps
//! the same id, name and transform as the box.

use tracing::info;
use uuid::Uuid;

use bc_core::{CadError, CadResult, Geometry, ObjectRegistry, SolidBody, require_positive};

/// Build the chamfered replacement of a box body
pub fn chamfered(body: &SolidBody, size: f32, segments: u32) -> CadResult<SolidBody> {
    let Geometry::Box {
        width,
        height,
        depth,
    } = *body.geometry()
    else {
        return Err(CadError::UnsupportedGeometry(format!(
            "chamfer is only supported for rectangular objects, {} is a {}",
            body.name,
            body.geometry().kind_name()
        )));
    };

    require_positive("chamfer size", size)?;
    let limit = width.min(height) / 2.0;
    if size >= limit {
        return Err(CadError::InvalidInput(format!(
            "chamfer size must be smaller than {limit}, got {size}"
        )));
    }

    let geometry = Geometry::BeveledPrism {
        width,
        height,
        depth,
        bevel: size,
    };
    Ok(SolidBody::with_id(
        body.id,
        body.name.clone(),
        geometry,
        body.transform,
        segments,
    ))
}

/// Replace the registry body `body_id` with its chamfered equivalent
///
/// Returns the new body. The registry swap is the only mutation.
pub fn chamfer(
    registry: &mut ObjectRegistry,
    body_id: Uuid,
    size: f32,
    segments: u32,
) -> CadResult<SolidBody> {
    let body = registry.get(body_id).ok_or(CadError::NotFound(body_id))?;
    let replacement = chamfered(body, size, segments)?;
    registry.replace(body_id, replacement.clone())?;
    info!("Chamfer of size {} applied to {}", size, replacement.name);
    Ok(replacement)
}
