//! Tight image widget
//!
//! An image that draws its sprite's own triangulated mesh instead of a
//! rectangle, and accepts pointer hits only on that mesh. Transparent
//! corners of an irregular sprite stop swallowing clicks.
//!
//! Only [`ImageType::Simple`] images with a sprite take this path; every
//! other configuration behaves exactly like [`UIImage`].

use std::sync::Arc;

use super::core::{ImageType, RectTransform};
use super::image::UIImage;
use crate::assets::SpriteGeometry;
use crate::foundation::math::{Bounds2, Rect, Vec2, Vec4};
use crate::input::collision::point_in_triangles;
use crate::render::UICamera;
use crate::ui::backend::UIGraphic;
use crate::ui::rendering::VertexHelper;

/// Mapping from sprite-local space into widget-local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshFit {
    /// Per-axis scale
    pub scale: Vec2,
    /// Offset added after scaling
    pub translation: Vec2,
}

impl MeshFit {
    /// Fit sprite bounds into a frame
    ///
    /// Scales each axis so the bounds fill `frame`, or both axes by the
    /// smaller factor when `preserve_aspect` is set, then moves the bounds
    /// center onto `frame_center`.
    ///
    /// Zero-sized bounds are not guarded: the division yields infinite or
    /// NaN scale and those values flow into every mapped vertex.
    pub fn compute(bounds: &Bounds2, frame: &Rect, frame_center: Vec2, preserve_aspect: bool) -> Self {
        let mut scale = frame.size().component_div(&bounds.size);

        if preserve_aspect {
            let uniform = scale.x.min(scale.y);
            scale = Vec2::new(uniform, uniform);
        }

        let translation = frame_center - bounds.center.component_mul(&scale);

        Self { scale, translation }
    }

    /// Map a sprite-local point into widget-local space
    pub fn apply(&self, point: Vec2) -> Vec2 {
        point.component_mul(&self.scale) + self.translation
    }
}

/// Emit a sprite's mesh fitted into a frame and return the mapped positions
///
/// Every sprite vertex becomes one output vertex, in order, carrying its UV
/// and `color`; the triangle list is copied unchanged. Missing UVs (a
/// malformed sprite) are emitted as zero. A trailing partial triangle is
/// dropped instead of failing the build. The helper is not cleared.
pub fn build_tight_mesh(
    sprite: &SpriteGeometry,
    frame: &Rect,
    frame_center: Vec2,
    preserve_aspect: bool,
    color: Vec4,
    to_fill: &mut VertexHelper,
) -> Vec<Vec2> {
    let fit = MeshFit::compute(&sprite.bounds, frame, frame_center, preserve_aspect);

    let mut positions = Vec::with_capacity(sprite.vertices.len());
    for (i, vertex) in sprite.vertices.iter().enumerate() {
        let position = fit.apply(*vertex);
        let uv = sprite.uv.get(i).copied().unwrap_or_default();

        to_fill.add_vert(position, color, uv);
        positions.push(position);
    }

    let triangles = sprite.triangles.chunks_exact(3);
    if !triangles.remainder().is_empty() {
        log::warn!(
            "Dropping {} trailing index(es) that do not form a triangle",
            triangles.remainder().len()
        );
    }

    for triangle in triangles {
        to_fill.add_triangle(triangle[0], triangle[1], triangle[2]);
    }

    positions
}

/// Image widget with shape-accurate mesh and hit testing
///
/// Keeps the widget-local vertex positions of its most recent build. Hit
/// tests read them together with the active sprite's current triangle list,
/// so a sprite swap takes effect for hit testing only after the next
/// populate pass.
#[derive(Debug, Clone, Default)]
pub struct TightImage {
    image: UIImage,
    scaled_vertices: Vec<Vec2>,
}

impl TightImage {
    /// Create a tight image with default image settings
    pub fn new(transform: RectTransform) -> Self {
        Self::from_image(UIImage::new(transform))
    }

    /// Wrap an already configured image
    pub fn from_image(image: UIImage) -> Self {
        Self {
            image,
            scaled_vertices: Vec::new(),
        }
    }

    /// Underlying image settings
    pub fn image(&self) -> &UIImage {
        &self.image
    }

    /// Mutable image settings; changes apply on the next populate pass
    pub fn image_mut(&mut self) -> &mut UIImage {
        &mut self.image
    }

    /// Assign the sprite
    pub fn set_sprite(&mut self, sprite: Arc<SpriteGeometry>) {
        self.image.sprite = Some(sprite);
    }

    /// Change the fill color
    pub fn set_color(&mut self, color: Vec4) {
        self.image.color = color;
    }

    /// Widget-local vertex positions from the most recent build
    pub fn scaled_vertices(&self) -> &[Vec2] {
        &self.scaled_vertices
    }

    /// Sprite driving the tight path, if this image takes it
    fn tight_sprite(&self) -> Option<&Arc<SpriteGeometry>> {
        match self.image.image_type {
            ImageType::Simple => self.image.active_sprite(),
            _ => None,
        }
    }

    /// Whether a widget-local point lies on the cached mesh
    ///
    /// Triangles whose indices fall outside the cache (sprite changed since
    /// the last build, or no build yet) are skipped.
    pub fn contains_local_point(&self, local: Vec2) -> bool {
        self.image
            .active_sprite()
            .is_some_and(|sprite| point_in_triangles(&self.scaled_vertices, &sprite.triangles, local))
    }
}

impl UIGraphic for TightImage {
    fn populate_mesh(&mut self, to_fill: &mut VertexHelper) {
        let Some(sprite) = self.tight_sprite().cloned() else {
            self.image.populate_mesh(to_fill);
            return;
        };

        to_fill.clear();

        let frame = self.image.pixel_adjusted_rect();
        let frame_center = self.image.transform.rect.center();

        // Fully built before it replaces the previous cache
        let scaled = build_tight_mesh(
            &sprite,
            &frame,
            frame_center,
            self.image.preserve_aspect,
            self.image.color,
            to_fill,
        );
        self.scaled_vertices = scaled;

        log::debug!(
            "TightImage populated {} vertices / {} triangles into {:?}",
            self.scaled_vertices.len(),
            sprite.triangle_count(),
            frame
        );
    }

    fn is_raycast_location_valid(&self, screen_point: Vec2, camera: Option<&UICamera>) -> bool {
        if self.tight_sprite().is_none() {
            return self.image.is_raycast_location_valid(screen_point, camera);
        }

        if !self.image.raycast_target {
            return false;
        }

        match self.image.transform.screen_point_to_local(screen_point, camera) {
            Some(local) => self.contains_local_point(local),
            None => {
                log::trace!("Screen point {:?} has no local projection", screen_point);
                false
            }
        }
    }
}
