//! Image widget - a sprite drawn as a single rectangle

use std::sync::Arc;

use super::core::{ImageType, RectTransform};
use crate::assets::SpriteGeometry;
use crate::config::ImageConfig;
use crate::foundation::math::{Bounds2, Rect, Vec2, Vec4};
use crate::render::UICamera;
use crate::ui::backend::UIGraphic;
use crate::ui::rendering::VertexHelper;

/// UI image component - a sprite stretched over the widget frame
///
/// Draws one quad and hit tests against its frame rectangle. Every image
/// type renders the same quad here; sliced, tiled and filled layouts are
/// left to renderers that need them.
#[derive(Debug, Clone)]
pub struct UIImage {
    /// Frame placement on the canvas
    pub transform: RectTransform,

    /// Sprite assigned to the image
    pub sprite: Option<Arc<SpriteGeometry>>,

    /// Temporary replacement for `sprite` (e.g. a pressed-state sprite)
    pub override_sprite: Option<Arc<SpriteGeometry>>,

    /// Fill color (RGBA)
    pub color: Vec4,

    /// Sprite layout mode
    pub image_type: ImageType,

    /// Scale uniformly instead of stretching to the frame
    pub preserve_aspect: bool,

    /// Snap the frame to whole canvas pixels before sizing
    pub pixel_perfect: bool,

    /// Whether the image takes part in raycasts
    pub raycast_target: bool,
}

impl Default for UIImage {
    fn default() -> Self {
        Self::new(RectTransform::default())
    }
}

impl UIImage {
    /// Create a white, sprite-less image with default settings
    pub fn new(transform: RectTransform) -> Self {
        Self::from_config(transform, &ImageConfig::default())
    }

    /// Create an image from serialized settings
    pub fn from_config(transform: RectTransform, config: &ImageConfig) -> Self {
        Self {
            transform,
            sprite: None,
            override_sprite: None,
            color: config.color,
            image_type: config.image_type,
            preserve_aspect: config.preserve_aspect,
            pixel_perfect: config.pixel_perfect,
            raycast_target: config.raycast_target,
        }
    }

    /// Assign the sprite
    pub fn with_sprite(mut self, sprite: Arc<SpriteGeometry>) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Sprite actually drawn: the override if set, otherwise the sprite
    pub fn active_sprite(&self) -> Option<&Arc<SpriteGeometry>> {
        self.override_sprite.as_ref().or(self.sprite.as_ref())
    }

    /// Frame used for sizing, snapped when the image is pixel perfect
    pub fn pixel_adjusted_rect(&self) -> Rect {
        self.transform.pixel_adjusted_rect(self.pixel_perfect)
    }

    /// Rectangle the quad covers
    ///
    /// With preserve aspect the frame shrinks along one axis to match the
    /// sprite's bounds ratio, staying centered.
    pub fn drawing_rect(&self) -> Rect {
        let rect = self.pixel_adjusted_rect();

        match self.active_sprite() {
            Some(sprite) if self.preserve_aspect => fit_aspect(rect, sprite.bounds.size),
            _ => rect,
        }
    }

    fn populate_quad(&self, to_fill: &mut VertexHelper) {
        to_fill.clear();

        let rect = self.drawing_rect();
        let (uv_min, uv_max) = match self.active_sprite() {
            Some(sprite) if !sprite.uv.is_empty() => {
                let outer = Bounds2::from_points(&sprite.uv);
                (outer.min(), outer.max())
            }
            _ => (Vec2::zeros(), Vec2::new(1.0, 1.0)),
        };

        let (min, max) = (rect.min(), rect.max());
        to_fill.add_vert(min, self.color, uv_min);
        to_fill.add_vert(Vec2::new(min.x, max.y), self.color, Vec2::new(uv_min.x, uv_max.y));
        to_fill.add_vert(max, self.color, uv_max);
        to_fill.add_vert(Vec2::new(max.x, min.y), self.color, Vec2::new(uv_max.x, uv_min.y));

        to_fill.add_triangle(0, 1, 2);
        to_fill.add_triangle(2, 3, 0);
    }
}

/// Shrink `rect` along one axis so it has the aspect ratio of `size`
fn fit_aspect(rect: Rect, size: Vec2) -> Rect {
    if size.x <= 0.0 || size.y <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return rect;
    }

    let sprite_ratio = size.x / size.y;
    let rect_ratio = rect.width / rect.height;

    let fitted = if sprite_ratio > rect_ratio {
        Vec2::new(rect.width, rect.width / sprite_ratio)
    } else {
        Vec2::new(rect.height * sprite_ratio, rect.height)
    };

    Rect::from_center_size(rect.center(), fitted)
}

impl UIGraphic for UIImage {
    fn populate_mesh(&mut self, to_fill: &mut VertexHelper) {
        self.populate_quad(to_fill);
        log::trace!("UIImage populated quad over {:?}", self.drawing_rect());
    }

    fn is_raycast_location_valid(&self, screen_point: Vec2, camera: Option<&UICamera>) -> bool {
        if !self.raycast_target {
            return false;
        }

        self.transform
            .screen_point_to_local(screen_point, camera)
            .is_some_and(|local| self.transform.rect.contains(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quad_covers_frame() {
        let mut image = UIImage::new(RectTransform::centered(100.0, 50.0));
        let mesh = image.rebuild();

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(mesh.vertices[0].position, [-50.0, -25.0]);
        assert_eq!(mesh.vertices[2].position, [50.0, 25.0]);
        assert_eq!(mesh.vertices[2].uv, [1.0, 1.0]);
    }

    #[test]
    fn test_override_sprite_wins() {
        let base = Arc::new(SpriteGeometry::quad(1.0, 1.0));
        let pressed = Arc::new(SpriteGeometry::quad(2.0, 1.0));

        let mut image = UIImage::default().with_sprite(Arc::clone(&base));
        assert!(Arc::ptr_eq(image.active_sprite().unwrap(), &base));

        image.override_sprite = Some(Arc::clone(&pressed));
        assert!(Arc::ptr_eq(image.active_sprite().unwrap(), &pressed));
    }

    #[test]
    fn test_preserve_aspect_quad() {
        let mut image = UIImage::new(RectTransform::centered(200.0, 100.0))
            .with_sprite(Arc::new(SpriteGeometry::quad(1.0, 1.0)));
        image.preserve_aspect = true;

        let rect = image.drawing_rect();
        assert_relative_eq!(rect.width, 100.0);
        assert_relative_eq!(rect.height, 100.0);
        assert_relative_eq!(rect.center(), Vec2::zeros());
    }

    #[test]
    fn test_rect_hit_test() {
        let image = UIImage::new(RectTransform::centered(100.0, 100.0));

        assert!(image.is_raycast_location_valid(Vec2::new(45.0, -45.0), None));
        assert!(!image.is_raycast_location_valid(Vec2::new(55.0, 0.0), None));
    }

    #[test]
    fn test_non_raycast_target_never_hits() {
        let mut image = UIImage::new(RectTransform::centered(100.0, 100.0));
        image.raycast_target = false;

        assert!(!image.is_raycast_location_valid(Vec2::zeros(), None));
    }
}
