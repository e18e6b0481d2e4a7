//! Math utilities and types
//!
//! Provides the 2D math types used by the UI layer: vectors, rectangles
//! and bounding boxes.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Rotation2, Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// Axis-aligned rectangle described by its minimum corner and size
///
/// Used for widget frames. Width and height may be zero (degenerate frame);
/// negative sizes are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the minimum corner
    pub x: f32,
    /// Y coordinate of the minimum corner
    pub y: f32,
    /// Width along X
    pub width: f32,
    /// Height along Y
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its minimum corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle of the given size centered on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x * 0.5,
            y: center.y - size.y * 0.5,
            width: size.x,
            height: size.y,
        }
    }

    /// Create the rectangle spanning two corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Minimum corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Check whether a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        crate::input::collision::point_in_rect(
            point.x,
            point.y,
            self.x,
            self.y,
            self.width,
            self.height,
        )
    }
}

/// Axis-aligned bounding box described by center and size
///
/// This is the layout of sprite bounds: the box a sprite's geometry occupies
/// in sprite-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds2 {
    /// Center of the box
    pub center: Vec2,
    /// Full size of the box (not half extents)
    pub size: Vec2,
}

impl Bounds2 {
    /// Create bounds from center and size
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Smallest box containing every point; zero-sized at the origin when empty
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let (min, max) = iter.fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });

        Self {
            center: (min + max) * 0.5,
            size: max - min,
        }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        self.center + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_center_and_corners() {
        let rect = Rect::new(-50.0, -25.0, 100.0, 50.0);
        assert_eq!(rect.center(), Vec2::new(0.0, 0.0));
        assert_eq!(rect.min(), Vec2::new(-50.0, -25.0));
        assert_eq!(rect.max(), Vec2::new(50.0, 25.0));

        let centered = Rect::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0));
        assert_eq!(centered, Rect::new(8.0, 9.0, 4.0, 2.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(rect.contains(Vec2::new(10.0, 0.0)));
        assert!(!rect.contains(Vec2::new(10.5, 5.0)));
    }

    #[test]
    fn test_bounds_from_points() {
        let points = [
            Vec2::new(-1.0, 2.0),
            Vec2::new(3.0, -2.0),
            Vec2::new(0.5, 0.5),
        ];
        let bounds = Bounds2::from_points(&points);

        assert_relative_eq!(bounds.center, Vec2::new(1.0, 0.0));
        assert_relative_eq!(bounds.size, Vec2::new(4.0, 4.0));
        assert_relative_eq!(bounds.min(), Vec2::new(-1.0, -2.0));
        assert_relative_eq!(bounds.max(), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_bounds_from_no_points() {
        let bounds = Bounds2::from_points(&[]);
        assert_eq!(bounds, Bounds2::default());
    }
}
