//! Input handling
//!
//! Hit testing lives here: deciding whether a pointer position lands on a
//! widget is an input concern, not a rendering one.

pub mod collision;

pub use collision::{point_in_rect, point_in_triangle, point_in_triangles};
