//! UI rendering module
//!
//! Backend-agnostic mesh output of UI widgets

pub mod data;
pub mod vertex;
pub mod vertex_helper;

// Re-export commonly used types
pub use data::RenderMesh;
pub use vertex::UIVertex;
pub use vertex_helper::VertexHelper;
