//! Extrusion of sketch profiles into solid bodies

use tracing::info;
use uuid::Uuid;

use bc_core::constants::EXTRUSION_NAME;
use bc_core::{CadError, CadResult, Geometry, ObjectRegistry, SolidBody, Transform, require_positive};

use crate::sketch::{ProfileKind, ProfileShape, Sketch, SketchPlane};

/// Extrude every profile of `sketch` by `depth` along the plane normal
///
/// Bodies are returned in profile order; nothing is registered.
pub fn extrude(sketch: &Sketch, depth: f32, segments: u32) -> CadResult<Vec<SolidBody>> {
    if sketch.is_empty() {
        return Err(CadError::EmptyModel(
            "there are no sketch elements to extrude".into(),
        ));
    }
    require_positive("extrusion depth", depth)?;

    Ok(sketch
        .profiles()
        .iter()
        .map(|profile| extrude_profile(&sketch.plane, profile, depth, segments))
        .collect())
}

/// Extrude one profile
///
/// The body's centroid sits at the profile center offset by `depth / 2`
/// along the plane normal, with the profile's orientation.
pub fn extrude_profile(
    plane: &SketchPlane,
    profile: &ProfileShape,
    depth: f32,
    segments: u32,
) -> SolidBody {
    let geometry = match profile.kind {
        ProfileKind::Circle { radius } => Geometry::Cylinder {
            radius,
            height: depth,
        },
        ProfileKind::Rectangle { width, height } => Geometry::Box {
            width,
            height,
            depth,
        },
    };

    let position = profile.world_center(plane) + plane.normal * (depth / 2.0);
    let transform = Transform::new(position, profile.world_orientation(plane));
    SolidBody::with_segments(EXTRUSION_NAME, geometry, transform, segments)
}

/// Extrude a sketch and register every resulting body in one batch
pub fn extrude_into(
    registry: &mut ObjectRegistry,
    sketch: &Sketch,
    depth: f32,
    segments: u32,
) -> CadResult<Vec<Uuid>> {
    let bodies = extrude(sketch, depth, segments)?;
    let ids = registry.add_all(bodies)?;
    info!(
        "Extruded {} profiles by {} from sketch {}",
        ids.len(),
        depth,
        sketch.id
    );
    Ok(ids)
}
