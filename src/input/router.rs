//! The input router: an explicit Idle/Dragging state machine.
//!
//! `route` is a pure transition: it takes an event, advances the machine,
//! and returns the commands to run. Rendering effects happen only in
//! [`dispatch`], which keeps the decision logic testable without surfaces.

use crate::engine::StrokeEngine;
use crate::indicator::WidthIndicator;
use crate::surfaces::SurfacePair;
use crate::tool_state::ToolState;

use super::PointerEvent;

/// The router's two states. `Dragging` spans pointer-down to pointer-up or
/// pointer-leave, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterState {
    #[default]
    Idle,
    Dragging,
}

/// Side-effecting commands produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    /// Begin a new stroke on the ink surface.
    BeginStroke,
    /// Extend the current stroke to `(x, y)`. A no-op in the engine while
    /// no stroke is active.
    StrokeTo { x: f32, y: f32 },
    /// Finalize the current stroke.
    EndStroke,
    /// Redraw the width-indicator ring at `(x, y)`. Always emitted for a
    /// move, dragging or not.
    ShowIndicator { x: f32, y: f32 },
}

/// Routes pointer events into stroke and indicator commands.
#[derive(Debug, Default)]
pub struct InputRouter {
    state: RouterState,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Advances the state machine for one event and returns the commands
    /// to execute, in order. Total over all (state, event) pairs; an event
    /// that makes no sense in the current state routes to nothing.
    pub fn route(&mut self, event: PointerEvent) -> Vec<CanvasCommand> {
        match (self.state, event) {
            (RouterState::Idle, PointerEvent::Down { .. }) => {
                self.state = RouterState::Dragging;
                vec![CanvasCommand::BeginStroke]
            }
            // Leaving the canvas ends the drag exactly like a release does.
            (RouterState::Dragging, PointerEvent::Up | PointerEvent::Leave) => {
                self.state = RouterState::Idle;
                vec![CanvasCommand::EndStroke]
            }
            (_, PointerEvent::Move { x, y }) => {
                vec![
                    CanvasCommand::StrokeTo { x, y },
                    CanvasCommand::ShowIndicator { x, y },
                ]
            }
            _ => Vec::new(),
        }
    }
}

/// Executes routed commands against the engine, indicator, and surfaces.
pub fn dispatch(
    commands: Vec<CanvasCommand>,
    engine: &StrokeEngine,
    indicator: &WidthIndicator,
    state: &mut ToolState,
    surfaces: &mut SurfacePair,
) {
    for command in commands {
        match command {
            CanvasCommand::BeginStroke => engine.on_drag_start(state),
            CanvasCommand::StrokeTo { x, y } => engine.on_drag_move(state, surfaces, x, y),
            CanvasCommand::EndStroke => engine.on_drag_end(state),
            CanvasCommand::ShowIndicator { x, y } => {
                indicator.on_pointer_move(state, surfaces, x, y)
            }
        }
    }
}
