//! Mesh accumulation sink handed to widgets during a populate pass

use super::data::RenderMesh;
use super::vertex::UIVertex;
use crate::foundation::math::{Vec2, Vec4};

/// Accumulates vertices and triangles while a widget populates its mesh
///
/// The host owns one helper per rebuild, passes it to the widget, then
/// takes the finished [`RenderMesh`] out of it. Indices are not checked
/// against the vertex count when added.
#[derive(Debug, Default)]
pub struct VertexHelper {
    vertices: Vec<UIVertex>,
    indices: Vec<u32>,
}

impl VertexHelper {
    /// Create an empty helper
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all accumulated geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Number of vertices added so far
    pub fn current_vert_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices added so far
    pub fn current_index_count(&self) -> usize {
        self.indices.len()
    }

    /// Append a vertex
    pub fn add_vert(&mut self, position: Vec2, color: Vec4, uv: Vec2) {
        self.vertices.push(UIVertex::new(position, color, uv));
    }

    /// Append a triangle referencing previously added vertices
    pub fn add_triangle(&mut self, idx0: u32, idx1: u32, idx2: u32) {
        self.indices.extend_from_slice(&[idx0, idx1, idx2]);
    }

    /// Vertices added so far
    pub fn vertices(&self) -> &[UIVertex] {
        &self.vertices
    }

    /// Indices added so far
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Copy the accumulated geometry into a mesh, keeping the helper intact
    pub fn fill_mesh(&self) -> RenderMesh {
        RenderMesh {
            vertices: self.vertices.clone(),
            indices: self.indices.clone(),
        }
    }

    /// Consume the helper and return the accumulated geometry
    pub fn into_mesh(self) -> RenderMesh {
        RenderMesh {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_clear() {
        let mut helper = VertexHelper::new();
        let white = Vec4::new(1.0, 1.0, 1.0, 1.0);

        helper.add_vert(Vec2::new(0.0, 0.0), white, Vec2::new(0.0, 0.0));
        helper.add_vert(Vec2::new(1.0, 0.0), white, Vec2::new(1.0, 0.0));
        helper.add_vert(Vec2::new(0.0, 1.0), white, Vec2::new(0.0, 1.0));
        helper.add_triangle(0, 1, 2);

        assert_eq!(helper.current_vert_count(), 3);
        assert_eq!(helper.current_index_count(), 3);
        assert_eq!(helper.vertices()[1].position, [1.0, 0.0]);
        assert_eq!(helper.vertices()[2].uv, [0.0, 1.0]);

        helper.clear();
        assert_eq!(helper.current_vert_count(), 0);
        assert_eq!(helper.current_index_count(), 0);
    }

    #[test]
    fn test_mesh_output() {
        let mut helper = VertexHelper::new();
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);

        for i in 0..3 {
            helper.add_vert(Vec2::new(i as f32, 0.0), red, Vec2::zeros());
        }
        helper.add_triangle(2, 1, 0);

        let copied = helper.fill_mesh();
        let mesh = helper.into_mesh();
        assert_eq!(copied, mesh);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices, vec![2, 1, 0]);
        assert_eq!(mesh.vertices[0].color, [1.0, 0.0, 0.0, 1.0]);

        // 8 floats per vertex, 3 vertices
        assert_eq!(mesh.vertex_bytes().len(), 3 * 8 * 4);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = VertexHelper::new().into_mesh();
        assert!(mesh.is_empty());
        assert_eq!(mesh, RenderMesh::empty());
    }
}
