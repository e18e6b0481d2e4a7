//! Vertex types for UI rendering

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{Vec2, Vec4};

/// Vertex data for textured, tinted UI geometry
///
/// Laid out for direct upload: 8 floats, 32 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct UIVertex {
    /// Position in widget-local units
    pub position: [f32; 2],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
    /// Texture coordinates
    pub uv: [f32; 2],
}

impl UIVertex {
    /// Create a vertex from math types
    pub fn new(position: Vec2, color: Vec4, uv: Vec2) -> Self {
        Self {
            position: [position.x, position.y],
            color: [color.x, color.y, color.z, color.w],
            uv: [uv.x, uv.y],
        }
    }

    /// Position as a vector
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }
}
