//! Asset types consumed by widgets

pub mod sprite;

pub use sprite::{SpriteError, SpriteGeometry};
