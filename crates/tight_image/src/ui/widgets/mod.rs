//! UI widgets module
//!
//! Contains the image widget types

pub mod core;
pub mod image;
pub mod tight_image;

// Re-export core types
pub use self::core::{ImageType, RectTransform};

// Re-export widget types
pub use image::UIImage;
pub use tight_image::{build_tight_mesh, MeshFit, TightImage};
