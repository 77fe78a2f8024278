//! Pointer input: translating raw egui input into canvas-local events.
//!
//! The canvas is two stacked surfaces, so events are captured once against
//! the shared container rect and every coordinate is made relative to its
//! top-left corner; both surfaces therefore always see identical positions.

use egui::{Context, Rect};

mod router;
pub use router::{dispatch, CanvasCommand, InputRouter, RouterState};

/// A pointer event over the canvas, with surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed inside the canvas.
    Down { x: f32, y: f32 },
    /// Primary button released inside the canvas.
    Up,
    /// Pointer moved while hovering the canvas.
    Move { x: f32, y: f32 },
    /// Pointer left the canvas area (with or without a release).
    Leave,
}

/// Converts egui's per-frame pointer snapshot into [`PointerEvent`]s.
///
/// Tracks whether the pointer was inside the canvas on the previous frame
/// so that crossing the edge produces a `Leave` event.
#[derive(Debug, Default)]
pub struct InputHandler {
    was_inside: bool,
    last_local: Option<(f32, f32)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this frame's pointer state and returns the events it implies,
    /// in the order they should be routed.
    pub fn poll(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let inside = hover.is_some_and(|pos| canvas_rect.contains(pos));

            if self.was_inside && !inside {
                events.push(PointerEvent::Leave);
                self.last_local = None;
            }

            if inside {
                // hover is Some here by construction.
                if let Some(pos) = hover {
                    let local = pos - canvas_rect.min;
                    let (x, y) = (local.x, local.y);

                    if input.pointer.primary_pressed() {
                        events.push(PointerEvent::Down { x, y });
                    }
                    if self.last_local != Some((x, y)) {
                        events.push(PointerEvent::Move { x, y });
                        self.last_local = Some((x, y));
                    }
                    if input.pointer.primary_released() {
                        events.push(PointerEvent::Up);
                    }
                }
            }

            self.was_inside = inside;
        });

        events
    }
}
