//! Rendering collaborators used by the UI layer

pub mod camera;

pub use camera::UICamera;
