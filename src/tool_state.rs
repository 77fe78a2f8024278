//! Shared brush settings and drag tracking.
//!
//! One `ToolState` instance is owned by the app and threaded through the
//! stroke engine, the width indicator, and the input router. The UI panels
//! are the only writers of `color` and `line_width`; the stroke engine owns
//! the drag flag and the last-point tracking.

use egui::Color32;

use crate::color::{self, BACKGROUND_COLOR, DEFAULT_COLOR};

/// Current brush configuration plus the transient drag state of the stroke
/// engine.
///
/// The color is kept as a `#RRGGBB` string and validated at the mutator
/// boundary, so readers can treat it as always well-formed. Only the brush
/// settings are persisted; drag state never survives a restart.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ToolState {
    /// Active stroke color as `#RRGGBB`. Always a valid hex color.
    color: String,
    /// Brush width in surface units. Bounds are enforced by the width
    /// controls, not here.
    pub line_width: f32,
    /// True only between drag-start and the next drag-end.
    #[serde(skip)]
    pub is_dragging: bool,
    /// Last point of the stroke in progress, in surface-local coordinates.
    /// `None` means the next drag-move anchors a fresh path instead of
    /// continuing one. Cleared exactly at drag-end; drag-start leaves it
    /// untouched.
    #[serde(skip)]
    pub last_position: Option<(f32, f32)>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            line_width: 1.0,
            is_dragging: false,
            last_position: None,
        }
    }
}

impl ToolState {
    /// The active stroke color as a `#RRGGBB` string.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the stroke color from a hex string.
    ///
    /// A malformed value is rejected (keeping the previous color) so the
    /// validity invariant holds no matter what a caller hands in.
    pub fn set_color(&mut self, hex: &str) {
        match color::parse_hex(hex) {
            Ok(rgb) => self.color = color::format_hex(rgb),
            Err(err) => log::warn!("ignoring color change: {err}"),
        }
    }

    /// Sets the stroke color from channel bytes (what the color picker
    /// widget produces).
    pub fn set_color_rgb(&mut self, rgb: [u8; 3]) {
        self.color = color::format_hex(rgb);
    }

    /// Switches to eraser mode: painting with the background color.
    /// One-shot, not a toggle; picking any color leaves eraser mode again.
    pub fn apply_eraser(&mut self) {
        self.color = BACKGROUND_COLOR.to_owned();
    }

    /// The active color as an egui color, for the picker widget.
    pub fn color32(&self) -> Color32 {
        match color::parse_hex(&self.color) {
            Ok([r, g, b]) => Color32::from_rgb(r, g, b),
            // Unreachable while the invariant holds; fall back to the default.
            Err(_) => Color32::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_startup_state() {
        let state = ToolState::default();
        assert_eq!(state.color(), "#000000");
        assert_eq!(state.line_width, 1.0);
        assert!(!state.is_dragging);
        assert!(state.last_position.is_none());
    }

    #[test]
    fn set_color_normalizes_case() {
        let mut state = ToolState::default();
        state.set_color("#ff00aa");
        assert_eq!(state.color(), "#FF00AA");
    }

    #[test]
    fn set_color_rejects_malformed_values() {
        let mut state = ToolState::default();
        state.set_color("#FF0000");
        state.set_color("not-a-color");
        assert_eq!(state.color(), "#FF0000");
    }

    #[test]
    fn eraser_paints_with_background() {
        let mut state = ToolState::default();
        state.apply_eraser();
        assert_eq!(state.color(), BACKGROUND_COLOR);
    }

    #[test]
    fn color32_round_trip() {
        let mut state = ToolState::default();
        state.set_color_rgb([10, 20, 30]);
        assert_eq!(state.color32(), Color32::from_rgb(10, 20, 30));
    }
}
