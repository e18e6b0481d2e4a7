//! Core UI widget primitives
//!
//! Shared types used by image widgets: how a sprite is laid out and where a
//! widget's frame sits on the canvas.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Rect, Rotation2, Vec2};
use crate::render::UICamera;

/// How an image lays its sprite out inside the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageType {
    /// Whole sprite scaled into the frame
    #[default]
    Simple,
    /// Nine-slice layout with fixed borders
    Sliced,
    /// Sprite repeated across the frame
    Tiled,
    /// Partially filled, e.g. for progress bars
    Filled,
}

/// Placement of a widget's frame on the canvas
///
/// `rect` is expressed in widget-local units relative to the widget origin
/// (the pivot). The origin sits at `position` on the canvas; local space is
/// scaled by `scale` and then rotated by `rotation` radians.
#[derive(Debug, Clone, PartialEq)]
pub struct RectTransform {
    /// Frame in widget-local units
    pub rect: Rect,

    /// Canvas position of the widget origin
    pub position: Vec2,

    /// Rotation around the origin in radians
    pub rotation: f32,

    /// Per-axis scale applied before rotation
    pub scale: Vec2,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self::new(Rect::new(-50.0, -50.0, 100.0, 100.0))
    }
}

impl RectTransform {
    /// Unrotated, unscaled transform at the canvas origin
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Frame of the given size centered on the widget origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Rect::from_center_size(Vec2::zeros(), Vec2::new(width, height)))
    }

    /// Set the canvas position of the widget origin
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the per-axis scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Map a widget-local point to the canvas
    pub fn local_to_canvas(&self, local: Vec2) -> Vec2 {
        self.position + Rotation2::new(self.rotation) * local.component_mul(&self.scale)
    }

    /// Map a canvas point into widget-local space
    ///
    /// Returns `None` when either scale axis is zero.
    pub fn canvas_to_local(&self, canvas: Vec2) -> Option<Vec2> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            return None;
        }

        let unrotated = Rotation2::new(self.rotation).inverse_transform_vector(&(canvas - self.position));
        Some(unrotated.component_div(&self.scale))
    }

    /// Project a screen-pixel position into widget-local space
    ///
    /// Without a camera the canvas is a screen-space overlay and screen
    /// pixels are canvas units.
    pub fn screen_point_to_local(&self, screen_point: Vec2, camera: Option<&UICamera>) -> Option<Vec2> {
        let canvas = match camera {
            Some(camera) => camera.screen_to_canvas(screen_point)?,
            None => screen_point,
        };

        self.canvas_to_local(canvas)
    }

    /// Frame snapped to whole canvas pixels
    ///
    /// Only unrotated frames are snapped; anything else, or a frame that
    /// cannot be mapped back into local space, is returned unchanged.
    pub fn pixel_adjusted_rect(&self, pixel_perfect: bool) -> Rect {
        if !pixel_perfect || self.rotation != 0.0 {
            return self.rect;
        }

        let snap = |local: Vec2| {
            let canvas = self.local_to_canvas(local);
            self.canvas_to_local(Vec2::new(canvas.x.round(), canvas.y.round()))
        };

        match (snap(self.rect.min()), snap(self.rect.max())) {
            (Some(a), Some(b)) => Rect::from_min_max(a.inf(&b), a.sup(&b)),
            _ => self.rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_local_canvas_mapping() {
        let transform = RectTransform::centered(100.0, 50.0)
            .with_position(Vec2::new(200.0, 100.0))
            .with_scale(Vec2::new(2.0, 2.0));

        let canvas = transform.local_to_canvas(Vec2::new(10.0, -5.0));
        assert_relative_eq!(canvas, Vec2::new(220.0, 90.0));

        let local = transform.canvas_to_local(canvas).unwrap();
        assert_relative_eq!(local, Vec2::new(10.0, -5.0), epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_mapping() {
        let transform = RectTransform::centered(10.0, 10.0).with_rotation(FRAC_PI_2);

        let canvas = transform.local_to_canvas(Vec2::new(1.0, 0.0));
        assert_relative_eq!(canvas, Vec2::new(0.0, 1.0), epsilon = 1e-6);

        let local = transform.canvas_to_local(Vec2::new(0.0, 1.0)).unwrap();
        assert_relative_eq!(local, Vec2::new(1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_zero_scale_has_no_local_point() {
        let transform = RectTransform::default().with_scale(Vec2::new(0.0, 1.0));
        assert!(transform.canvas_to_local(Vec2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_screen_point_without_camera() {
        let transform = RectTransform::centered(100.0, 100.0).with_position(Vec2::new(300.0, 200.0));

        let local = transform.screen_point_to_local(Vec2::new(310.0, 190.0), None).unwrap();
        assert_relative_eq!(local, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_screen_point_with_camera() {
        let camera = UICamera::for_window(800.0, 600.0);
        let transform = RectTransform::centered(100.0, 100.0);

        // Window center is the canvas origin, which is the widget origin
        let local = transform
            .screen_point_to_local(Vec2::new(400.0, 300.0), Some(&camera))
            .unwrap();
        assert_relative_eq!(local, Vec2::zeros());
    }

    #[test]
    fn test_pixel_adjusted_rect() {
        let transform = RectTransform::new(Rect::new(-10.3, -5.6, 20.4, 11.0))
            .with_position(Vec2::new(0.0, 0.0));

        let unsnapped = transform.pixel_adjusted_rect(false);
        assert_eq!(unsnapped, transform.rect);

        let snapped = transform.pixel_adjusted_rect(true);
        assert_relative_eq!(snapped.x, -10.0, epsilon = 1e-5);
        assert_relative_eq!(snapped.y, -6.0, epsilon = 1e-5);
        assert_relative_eq!(snapped.width, 20.0, epsilon = 1e-5);
        assert_relative_eq!(snapped.height, 11.0, epsilon = 1e-5);
    }

    #[test]
    fn test_rotated_rect_is_not_snapped() {
        let transform = RectTransform::new(Rect::new(-10.3, -5.6, 20.4, 11.0)).with_rotation(0.3);
        assert_eq!(transform.pixel_adjusted_rect(true), transform.rect);
    }
}
