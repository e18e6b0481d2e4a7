//! UI Graphic Trait
//!
//! The capability interface a host UI system drives. The host calls
//! [`UIGraphic::populate_mesh`] from its layout/redraw pass and
//! [`UIGraphic::is_raycast_location_valid`] from its input dispatch; the
//! widget never calls the host back.

use crate::foundation::math::Vec2;
use crate::render::UICamera;
use crate::ui::rendering::{RenderMesh, VertexHelper};

/// Widget that produces a mesh and answers pointer hit queries
pub trait UIGraphic {
    /// Fill `to_fill` with this widget's geometry
    ///
    /// Called whenever the widget's visual state changes (layout, sprite,
    /// color). Implementations clear the helper before adding geometry.
    fn populate_mesh(&mut self, to_fill: &mut VertexHelper);

    /// Whether a pointer at `screen_point` counts as hitting this widget
    ///
    /// `camera` is the camera of the canvas the widget lives on, or `None`
    /// for a screen-space overlay canvas.
    fn is_raycast_location_valid(&self, screen_point: Vec2, camera: Option<&UICamera>) -> bool;

    /// Run a populate pass into a fresh helper and return the mesh
    fn rebuild(&mut self) -> RenderMesh {
        let mut helper = VertexHelper::new();
        self.populate_mesh(&mut helper);
        helper.into_mesh()
    }
}
