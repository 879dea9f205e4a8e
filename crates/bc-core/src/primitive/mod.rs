//! Primitive mesh generation for solid body descriptors
//!
//! Generates vertices, normals, and indices for basic shapes:
//! - Box (rectangular prism)
//! - Cylinder (with end caps)
//! - Beveled prism (box with chamfered end faces)
//!
//! All meshes are centered on the local origin with the extrusion axis along
//! +Z, and every triangle is wound counter-clockwise when seen from outside.

mod beveled_prism;
mod box_mesh;
mod cylinder;

pub use beveled_prism::generate_beveled_prism_mesh;
pub use box_mesh::generate_box_mesh;
pub use cylinder::generate_cylinder_mesh;

use serde::{Deserialize, Serialize};

/// Triangulated mesh in local coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    /// Vertex positions
    pub vertices: Vec<[f32; 3]>,
    /// Vertex normals (one per vertex)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (3 indices per triangle)
    pub indices: Vec<u32>,
}

impl TriMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as vertex position triples
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Append a flat quad with its own four vertices (two triangles)
    pub(crate) fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(corner);
            self.normals.push(normal);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Append a flat triangle with its own three vertices
    pub(crate) fn push_triangle(&mut self, corners: [[f32; 3]; 3], normal: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(corner);
            self.normals.push(normal);
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Local axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        Some((min, max))
    }
}
