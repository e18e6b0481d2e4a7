//! UI System Module
//!
//! Keeps widget logic separate from the host that renders and dispatches
//! input.
//!
//! Architecture:
//! - backend: the `UIGraphic` capability trait a host drives
//! - widgets/: image widgets (plain and shape-accurate)
//! - rendering/: backend-agnostic mesh output

pub mod backend;
pub mod widgets;
pub mod rendering;

#[cfg(test)]
mod tests;

pub use backend::UIGraphic;

// Re-export widgets
pub use widgets::{ImageType, MeshFit, RectTransform, TightImage, UIImage};

// Re-export rendering types
pub use rendering::{RenderMesh, UIVertex, VertexHelper};
