//! # UI Camera
//!
//! Orthographic 2D camera used by world-space and camera-space canvases to
//! map between screen pixels and canvas units.
//!
//! Screen and canvas space share axis orientation. A canvas without a camera
//! (screen-space overlay) treats screen pixels as canvas units directly.

use crate::foundation::math::{Rect, Vec2};

/// Orthographic camera looking at a UI canvas
///
/// # Coordinate System
/// - `position` is the canvas point shown at the center of the viewport
/// - `zoom` is the number of screen pixels per canvas unit
/// - `viewport` is the screen-pixel rectangle the camera renders into
#[derive(Debug, Clone, PartialEq)]
pub struct UICamera {
    /// Canvas point at the viewport center
    pub position: Vec2,

    /// Screen pixels per canvas unit
    pub zoom: f32,

    /// Screen-pixel rectangle the camera draws into
    pub viewport: Rect,
}

impl UICamera {
    /// Create a camera covering the given viewport, centered on `position`
    pub fn new(position: Vec2, zoom: f32, viewport: Rect) -> Self {
        Self {
            position,
            zoom,
            viewport,
        }
    }

    /// Camera whose viewport matches a window of the given size at zoom 1
    ///
    /// The canvas origin lands on the window center.
    pub fn for_window(width: f32, height: f32) -> Self {
        Self::new(Vec2::zeros(), 1.0, Rect::new(0.0, 0.0, width, height))
    }

    /// Move the camera to look at a different canvas point
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        log::trace!("UI camera position updated to: {:?}", position);
    }

    /// Change the zoom factor
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
        log::trace!("UI camera zoom updated to: {}", zoom);
    }

    /// Convert a screen-pixel position to canvas units
    ///
    /// Returns `None` when the zoom is zero or not finite, since no canvas
    /// point maps to the screen in that case.
    pub fn screen_to_canvas(&self, screen_point: Vec2) -> Option<Vec2> {
        if self.zoom == 0.0 || !self.zoom.is_finite() {
            return None;
        }

        Some((screen_point - self.viewport.center()) / self.zoom + self.position)
    }

    /// Convert a canvas position to screen pixels
    pub fn canvas_to_screen(&self, canvas_point: Vec2) -> Vec2 {
        (canvas_point - self.position) * self.zoom + self.viewport.center()
    }
}

impl Default for UICamera {
    fn default() -> Self {
        Self::for_window(1920.0, 1080.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_camera_centers_canvas_origin() {
        let camera = UICamera::for_window(800.0, 600.0);

        let canvas = camera.screen_to_canvas(Vec2::new(400.0, 300.0)).unwrap();
        assert_relative_eq!(canvas, Vec2::zeros());

        let canvas = camera.screen_to_canvas(Vec2::new(0.0, 0.0)).unwrap();
        assert_relative_eq!(canvas, Vec2::new(-400.0, -300.0));
    }

    #[test]
    fn test_zoom_and_pan() {
        let mut camera = UICamera::for_window(800.0, 600.0);
        camera.set_position(Vec2::new(100.0, 50.0));
        camera.set_zoom(2.0);

        let canvas = camera.screen_to_canvas(Vec2::new(500.0, 300.0)).unwrap();
        assert_relative_eq!(canvas, Vec2::new(150.0, 50.0));

        let screen = camera.canvas_to_screen(canvas);
        assert_relative_eq!(screen, Vec2::new(500.0, 300.0));
    }

    #[test]
    fn test_zero_zoom_has_no_mapping() {
        let mut camera = UICamera::default();
        camera.set_zoom(0.0);

        assert!(camera.screen_to_canvas(Vec2::new(10.0, 10.0)).is_none());
    }
}
