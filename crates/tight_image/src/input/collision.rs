//! Collision detection for input processing
//!
//! Hit testing primitives used to decide what the user clicked on:
//! rectangles for plain widgets, triangles for shape-accurate widgets.

use crate::foundation::math::Vec2;

/// Check if a point is inside a rectangular region
///
/// # Arguments
/// * `point_x` - X coordinate of the point
/// * `point_y` - Y coordinate of the point
/// * `rect_x` - X coordinate of rectangle's minimum corner
/// * `rect_y` - Y coordinate of rectangle's minimum corner
/// * `rect_width` - Width of the rectangle
/// * `rect_height` - Height of the rectangle
///
/// # Returns
/// `true` if the point is inside the rectangle (edges inclusive)
pub fn point_in_rect(
    point_x: f32,
    point_y: f32,
    rect_x: f32,
    rect_y: f32,
    rect_width: f32,
    rect_height: f32,
) -> bool {
    point_x >= rect_x &&
    point_x <= rect_x + rect_width &&
    point_y >= rect_y &&
    point_y <= rect_y + rect_height
}

/// Barycentric point-in-triangle test
///
/// Solves `P - A = u * (C - A) + v * (B - A)` with Cramer's rule and accepts
/// the point when `u` and `v` lie in `[0, 1]` and `u + v <= 1`. Points on an
/// edge count as inside.
///
/// A zero-area triangle makes the determinant zero. No guard is applied: the
/// resulting NaN/infinite coordinates fail the range checks, so the point is
/// reported outside.
pub fn point_in_triangle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);

    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    if !(0.0..=1.0).contains(&u) {
        return false;
    }

    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
    if !(0.0..=1.0).contains(&v) {
        return false;
    }

    u + v <= 1.0
}

/// Check whether a point lies inside any triangle of an indexed mesh
///
/// `indices` is consumed three at a time; a trailing partial triangle is
/// ignored. Triangles referencing a vertex outside `vertices` are skipped,
/// which happens when the index list is newer than the vertex data.
pub fn point_in_triangles(vertices: &[Vec2], indices: &[u32], point: Vec2) -> bool {
    let mut skipped = 0usize;

    for triangle in indices.chunks_exact(3) {
        let corners = (
            vertices.get(triangle[0] as usize),
            vertices.get(triangle[1] as usize),
            vertices.get(triangle[2] as usize),
        );

        match corners {
            (Some(&a), Some(&b), Some(&c)) => {
                if point_in_triangle(a, b, c, point) {
                    return true;
                }
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!(
            "Hit test skipped {} triangle(s) referencing vertices beyond the {} available",
            skipped,
            vertices.len()
        );
    }

    false
}
