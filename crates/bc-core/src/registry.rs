//! Object registry
//!
//! The authoritative, ordered collection of solid bodies in the model.
//! Every mutation is a single step: readers never see a half-applied batch
//! or a replacement where both the old and the new body are present.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::body::SolidBody;
use crate::error::{CadError, CadResult};

/// Ordered collection of solid bodies with an optional main body
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    bodies: Vec<SolidBody>,
    main: Option<Uuid>,
}

impl ObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bodies in the model
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the model has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Check if a body with this ID is registered
    pub fn contains(&self, id: Uuid) -> bool {
        self.index_of(id).is_some()
    }

    /// Get a body by ID
    pub fn get(&self, id: Uuid) -> Option<&SolidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Bodies in insertion order
    pub fn list(&self) -> &[SolidBody] {
        &self.bodies
    }

    /// Sum of the triangle counts of every body
    pub fn total_triangle_count(&self) -> usize {
        self.bodies.iter().map(SolidBody::triangle_count).sum()
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// Add a body at the end of the iteration order
    pub fn add(&mut self, body: SolidBody) -> CadResult<Uuid> {
        if self.contains(body.id) {
            return Err(CadError::InvalidInput(format!(
                "body {} is already registered",
                body.id
            )));
        }
        let id = body.id;
        debug!("Registered body {} ({})", body.name, id);
        self.bodies.push(body);
        Ok(id)
    }

    /// Add several bodies at once; either all are added or none
    pub fn add_all(&mut self, bodies: Vec<SolidBody>) -> CadResult<Vec<Uuid>> {
        let mut seen = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            if self.contains(body.id) || !seen.insert(body.id) {
                return Err(CadError::InvalidInput(format!(
                    "body {} is already registered",
                    body.id
                )));
            }
        }

        let ids: Vec<Uuid> = bodies.iter().map(|b| b.id).collect();
        debug!("Registered {} bodies", ids.len());
        self.bodies.extend(bodies);
        Ok(ids)
    }

    /// Remove a body; clears the main designation if it pointed at it
    pub fn remove_by_id(&mut self, id: Uuid) -> CadResult<SolidBody> {
        let index = self.index_of(id).ok_or(CadError::NotFound(id))?;
        if self.main == Some(id) {
            self.main = None;
        }
        Ok(self.bodies.remove(index))
    }

    /// Swap `old_id` for `new_body` in place, keeping its position in the
    /// iteration order and transferring the main designation.
    ///
    /// Returns the body that was replaced.
    pub fn replace(&mut self, old_id: Uuid, new_body: SolidBody) -> CadResult<SolidBody> {
        let index = self.index_of(old_id).ok_or(CadError::NotFound(old_id))?;
        if new_body.id != old_id && self.contains(new_body.id) {
            return Err(CadError::InvalidInput(format!(
                "body {} is already registered",
                new_body.id
            )));
        }

        let new_id = new_body.id;
        let old = std::mem::replace(&mut self.bodies[index], new_body);
        if self.main == Some(old_id) {
            self.main = Some(new_id);
        }
        debug!("Replaced body {} with {}", old_id, new_id);
        Ok(old)
    }

    /// Mark a live body as the main body
    pub fn designate_main(&mut self, id: Uuid) -> CadResult<()> {
        if !self.contains(id) {
            return Err(CadError::NotFound(id));
        }
        self.main = Some(id);
        Ok(())
    }

    /// The main body, if one is designated
    pub fn main(&self) -> Option<&SolidBody> {
        self.main.and_then(|id| self.get(id))
    }

    /// ID of the main body, if one is designated
    pub fn main_id(&self) -> Option<Uuid> {
        self.main
    }

    /// Remove every body
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.main = None;
    }
}
