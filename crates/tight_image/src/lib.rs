//! # Tight Image
//!
//! Sprite image widget for a UI layer that renders the sprite's own
//! triangulated mesh and hit tests against that mesh instead of the
//! widget's bounding rectangle.
//!
//! ## Features
//!
//! - **Tight meshes**: sprite vertices scaled into the widget frame, with
//!   optional aspect preservation
//! - **Shape hit testing**: pointer hits only count on visible triangles
//! - **Host agnostic**: widgets expose the [`UIGraphic`] trait and produce
//!   plain vertex/index data
//! - **Data driven**: sprites and widget settings load from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tight_image::prelude::*;
//!
//! let sprite = SpriteGeometry::new(
//!     vec![Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0)],
//!     vec![Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.5), Vec2::new(0.5, 1.0), Vec2::new(0.0, 0.5)],
//!     vec![0, 1, 2, 0, 2, 3],
//! );
//!
//! let mut image = TightImage::new(RectTransform::centered(100.0, 100.0));
//! image.set_sprite(Arc::new(sprite));
//!
//! // Layout pass
//! let mesh = image.rebuild();
//! assert_eq!(mesh.vertices.len(), 4);
//!
//! // Input pass: the frame corner is transparent
//! assert!(image.is_raycast_location_valid(Vec2::new(0.0, 0.0), None));
//! assert!(!image.is_raycast_location_valid(Vec2::new(45.0, 45.0), None));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod input;
pub mod render;
pub mod ui;

pub use ui::backend::UIGraphic;

/// Common imports for widget users
pub mod prelude {
    pub use crate::{
        assets::{SpriteError, SpriteGeometry},
        config::{Config, ConfigError, ImageConfig},
        foundation::math::{Bounds2, Rect, Vec2, Vec4},
        render::UICamera,
        ui::{
            ImageType, MeshFit, RectTransform, RenderMesh, TightImage, UIGraphic, UIImage,
            VertexHelper,
        },
    };
}
