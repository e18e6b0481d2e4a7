//! Backend-agnostic UI mesh data

use super::vertex::UIVertex;

/// Indexed triangle mesh produced by a widget
///
/// Handed to the renderer after a populate pass; widgets do not keep it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMesh {
    /// Vertex buffer contents
    pub vertices: Vec<UIVertex>,

    /// Triangle list, three indices per triangle
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// Create an empty mesh
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the mesh has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer as raw bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
