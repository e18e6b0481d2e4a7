//! Sprite geometry assets
//!
//! A sprite here is the tight mesh a packer produced for a texture region:
//! vertices and UVs in sprite-local space, a triangle list, and the bounds
//! box the geometry was authored against.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::foundation::math::{Bounds2, Vec2};

/// Errors describing malformed sprite geometry
#[derive(Error, Debug)]
pub enum SpriteError {
    /// Vertex and UV arrays must line up one to one
    #[error("UV count {uvs} does not match vertex count {vertices}")]
    UvCountMismatch {
        /// Number of vertices
        vertices: usize,
        /// Number of UVs
        uvs: usize,
    },

    /// Triangle list length must be a multiple of three
    #[error("Triangle index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),

    /// A triangle references a vertex that does not exist
    #[error("Triangle index {index} at position {position} is out of range for {vertices} vertices")]
    IndexOutOfRange {
        /// Offending index value
        index: u32,
        /// Position of the index within the triangle list
        position: usize,
        /// Number of vertices
        vertices: usize,
    },

    /// Bounds must have a non-zero, finite extent on both axes
    #[error("Degenerate sprite bounds: size {width} x {height}")]
    DegenerateBounds {
        /// Bounds width
        width: f32,
        /// Bounds height
        height: f32,
    },

    /// Loading the asset file failed
    #[error("Failed to load sprite: {0}")]
    Load(#[from] ConfigError),
}

/// Tight mesh of a sprite in sprite-local space
///
/// Owned by the asset side and never mutated by widgets. Widgets share it
/// through `Arc` so swapping sprites is cheap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteGeometry {
    /// Vertex positions in sprite-local units
    pub vertices: Vec<Vec2>,
    /// Texture coordinates, one per vertex
    pub uv: Vec<Vec2>,
    /// Triangle list, three vertex indices per triangle
    pub triangles: Vec<u32>,
    /// Bounding box in sprite-local units
    pub bounds: Bounds2,
}

impl SpriteGeometry {
    /// Create sprite geometry with bounds computed from the vertices
    pub fn new(vertices: Vec<Vec2>, uv: Vec<Vec2>, triangles: Vec<u32>) -> Self {
        let bounds = Bounds2::from_points(&vertices);
        Self {
            vertices,
            uv,
            triangles,
            bounds,
        }
    }

    /// Replace the bounds, e.g. with the full texture rect the mesh was cut from
    pub fn with_bounds(mut self, bounds: Bounds2) -> Self {
        self.bounds = bounds;
        self
    }

    /// Rectangular sprite of the given size centered on the origin
    ///
    /// Two triangles with UVs spanning the whole texture.
    pub fn quad(width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        Self::new(
            vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Check the geometry is well formed
    ///
    /// Widgets never call this on the build path; asset loading does.
    pub fn validate(&self) -> Result<(), SpriteError> {
        if self.uv.len() != self.vertices.len() {
            return Err(SpriteError::UvCountMismatch {
                vertices: self.vertices.len(),
                uvs: self.uv.len(),
            });
        }

        if self.triangles.len() % 3 != 0 {
            return Err(SpriteError::IncompleteTriangle(self.triangles.len()));
        }

        if let Some((position, &index)) = self
            .triangles
            .iter()
            .enumerate()
            .find(|(_, &index)| index as usize >= self.vertices.len())
        {
            return Err(SpriteError::IndexOutOfRange {
                index,
                position,
                vertices: self.vertices.len(),
            });
        }

        let size = self.bounds.size;
        let usable = |extent: f32| extent != 0.0 && extent.is_finite();
        if !usable(size.x) || !usable(size.y) {
            return Err(SpriteError::DegenerateBounds {
                width: size.x,
                height: size.y,
            });
        }

        Ok(())
    }

    /// Load sprite geometry from a TOML or RON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let sprite = Self::load_from_file(path)?;
        sprite.validate()?;

        log::debug!(
            "Loaded sprite {}: {} vertices, {} triangles",
            path.display(),
            sprite.vertex_count(),
            sprite.triangle_count()
        );
        Ok(sprite)
    }
}

impl Config for SpriteGeometry {}
