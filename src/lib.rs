#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod engine;
pub mod error;
pub mod export;
pub mod indicator;
pub mod input;
pub mod panels;
pub mod surfaces;
pub mod tool_state;

pub use app::InkboardApp;
pub use engine::StrokeEngine;
pub use indicator::WidthIndicator;
pub use input::{dispatch, CanvasCommand, InputHandler, InputRouter, PointerEvent, RouterState};
pub use surfaces::{SurfacePair, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use tool_state::ToolState;
