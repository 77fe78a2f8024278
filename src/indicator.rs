//! The width indicator: a live ring showing the brush size under the cursor.

use crate::surfaces::SurfacePair;
use crate::tool_state::ToolState;

/// Redraws the preview overlay on every pointer move, dragging or not, so
/// the user can size the brush before committing any ink.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidthIndicator;

impl WidthIndicator {
    pub fn new() -> Self {
        Self
    }

    /// Clears the preview surface and draws one ring at `(x, y)` with
    /// radius = half the brush width, in the current stroke color.
    pub fn on_pointer_move(
        &self,
        state: &ToolState,
        surfaces: &mut SurfacePair,
        x: f32,
        y: f32,
    ) {
        surfaces.preview_ring(x, y, state.line_width / 2.0, state.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::{CANVAS_HEIGHT, CANVAS_WIDTH};

    #[test]
    fn ring_radius_is_half_the_brush_width() {
        let indicator = WidthIndicator::new();
        let mut state = ToolState::default();
        state.line_width = 20.0;
        let mut surfaces = SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();

        indicator.on_pointer_move(&state, &mut surfaces, 100.0, 100.0);

        // On the radius-10 circle.
        assert!(surfaces.preview().pixel(110, 100).unwrap().alpha() > 0);
        assert!(surfaces.preview().pixel(90, 100).unwrap().alpha() > 0);
        // Well inside and well outside stay empty.
        assert_eq!(surfaces.preview().pixel(100, 100).unwrap().alpha(), 0);
        assert_eq!(surfaces.preview().pixel(130, 100).unwrap().alpha(), 0);
    }

    #[test]
    fn runs_regardless_of_drag_state() {
        let indicator = WidthIndicator::new();
        let mut state = ToolState::default();
        state.line_width = 10.0;
        assert!(!state.is_dragging);
        let mut surfaces = SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
        let ink_before = surfaces.ink().data().to_vec();

        indicator.on_pointer_move(&state, &mut surfaces, 50.0, 50.0);

        assert!(surfaces.preview().pixel(55, 50).unwrap().alpha() > 0);
        assert_eq!(surfaces.ink().data(), ink_before.as_slice());
    }
}
