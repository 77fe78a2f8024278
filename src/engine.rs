//! The stroke engine: turns drag events into ink segments.
//!
//! All of its state lives in [`ToolState`]; the engine itself only carries
//! behavior, which keeps it trivially testable against a bare surface pair.

use crate::surfaces::SurfacePair;
use crate::tool_state::ToolState;

/// Appends line segments to the ink surface while a drag is in progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrokeEngine;

impl StrokeEngine {
    pub fn new() -> Self {
        Self
    }

    /// Begins a new stroke: raises the drag flag so subsequent moves ink.
    ///
    /// `last_position` is intentionally left untouched; it was cleared by
    /// the previous drag-end, which is what guarantees the new stroke does
    /// not connect to the old one.
    pub fn on_drag_start(&self, state: &mut ToolState) {
        log::trace!("stroke begin");
        state.is_dragging = true;
    }

    /// Handles one drag-move at surface-local `(x, y)`.
    ///
    /// No-op while not dragging. The first move of a stroke only anchors
    /// the path (a click without movement never stamps a dot); every later
    /// move commits the segment from the last point immediately.
    pub fn on_drag_move(&self, state: &mut ToolState, surfaces: &mut SurfacePair, x: f32, y: f32) {
        if !state.is_dragging {
            return;
        }
        if let Some(last) = state.last_position {
            surfaces.commit_segment(last, (x, y), state.color(), state.line_width);
        }
        state.last_position = Some((x, y));
    }

    /// Ends the stroke: lowers the drag flag and clears the last point.
    ///
    /// Invoked for pointer-up and for the pointer leaving the canvas alike;
    /// clearing `last_position` here is what keeps a later stroke from
    /// connecting to a stale point.
    pub fn on_drag_end(&self, state: &mut ToolState) {
        log::trace!("stroke end");
        state.is_dragging = false;
        state.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::{CANVAS_HEIGHT, CANVAS_WIDTH};

    fn setup() -> (StrokeEngine, ToolState, SurfacePair) {
        (
            StrokeEngine::new(),
            ToolState::default(),
            SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap(),
        )
    }

    #[test]
    fn moves_without_drag_are_no_ops() {
        let (engine, mut state, mut surfaces) = setup();
        let before = surfaces.ink().data().to_vec();

        engine.on_drag_move(&mut state, &mut surfaces, 100.0, 100.0);
        engine.on_drag_move(&mut state, &mut surfaces, 200.0, 200.0);

        assert_eq!(surfaces.ink().data(), before.as_slice());
        assert!(state.last_position.is_none());
    }

    #[test]
    fn first_move_anchors_without_inking() {
        let (engine, mut state, mut surfaces) = setup();
        let before = surfaces.ink().data().to_vec();

        engine.on_drag_start(&mut state);
        engine.on_drag_move(&mut state, &mut surfaces, 100.0, 100.0);

        assert_eq!(surfaces.ink().data(), before.as_slice());
        assert_eq!(state.last_position, Some((100.0, 100.0)));
    }

    #[test]
    fn second_move_commits_a_segment() {
        let (engine, mut state, mut surfaces) = setup();
        state.line_width = 4.0;

        engine.on_drag_start(&mut state);
        engine.on_drag_move(&mut state, &mut surfaces, 100.0, 100.0);
        engine.on_drag_move(&mut state, &mut surfaces, 200.0, 100.0);

        let c = surfaces.ink().pixel(150, 100).unwrap().demultiply();
        assert_eq!((c.red(), c.green(), c.blue()), (0, 0, 0));
        assert_eq!(state.last_position, Some((200.0, 100.0)));
    }

    #[test]
    fn drag_end_clears_drag_state() {
        let (engine, mut state, mut surfaces) = setup();

        engine.on_drag_start(&mut state);
        engine.on_drag_move(&mut state, &mut surfaces, 100.0, 100.0);
        engine.on_drag_end(&mut state);

        assert!(!state.is_dragging);
        assert!(state.last_position.is_none());
    }

    #[test]
    fn drag_without_moves_leaves_no_mark() {
        let (engine, mut state, mut surfaces) = setup();
        let before = surfaces.ink().data().to_vec();

        engine.on_drag_start(&mut state);
        engine.on_drag_end(&mut state);

        assert_eq!(surfaces.ink().data(), before.as_slice());
    }
}
