//! The stacked pair of raster surfaces behind the canvas.
//!
//! The ink surface accumulates committed stroke segments and is only ever
//! reset by the explicit clear action. The preview surface is rewritten on
//! every pointer move: a full clear followed by a single indicator ring.
//! The two are independent buffers; skipping the clear on the preview is
//! what produces the stale-circle artifact this split exists to avoid.

use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::{self, BACKGROUND_COLOR};
use crate::error::CanvasError;

/// Width of the drawable area in surface units (= pixels).
pub const CANVAS_WIDTH: u32 = 600;
/// Height of the drawable area in surface units (= pixels).
pub const CANVAS_HEIGHT: u32 = 600;

/// Persistent ink surface plus transient preview overlay, same dimensions.
///
/// Revision counters are bumped on every mutation so the app only re-uploads
/// a texture when the underlying pixels actually changed.
pub struct SurfacePair {
    ink: Pixmap,
    preview: Pixmap,
    ink_revision: u64,
    preview_revision: u64,
}

impl SurfacePair {
    /// Creates both surfaces: the ink surface filled with the background
    /// color, the preview surface fully transparent.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let ink = Pixmap::new(width, height)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;
        let preview = Pixmap::new(width, height)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;

        let mut pair = Self {
            ink,
            preview,
            ink_revision: 0,
            preview_revision: 0,
        };
        pair.clear_ink();
        Ok(pair)
    }

    /// Rasterizes one straight stroke segment onto the ink surface with
    /// round caps and joins. Committed immediately; there is no batching.
    pub fn commit_segment(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        hex_color: &str,
        width: f32,
    ) {
        if width <= 0.0 {
            log::warn!("skipping segment with non-positive width {width}");
            return;
        }
        let Some(paint) = solid_paint(hex_color) else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let Some(path) = pb.finish() else {
            // Degenerate (non-finite) coordinates produce no path.
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.ink
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        self.ink_revision += 1;
    }

    /// Replaces the preview overlay with a single ring: centered at the
    /// pointer, `radius` = half the brush width, outlined 1 unit thick.
    ///
    /// The clear happens unconditionally, before the ring is drawn, so
    /// exactly one ring is ever visible.
    pub fn preview_ring(&mut self, x: f32, y: f32, radius: f32, hex_color: &str) {
        self.preview.fill(Color::TRANSPARENT);
        self.preview_revision += 1;

        if radius <= 0.0 {
            return;
        }
        let Some(paint) = solid_paint(hex_color) else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.push_circle(x, y, radius);
        let Some(path) = pb.finish() else {
            return;
        };

        // The ring outline stays 1 unit thick no matter how wide the brush
        // it represents is.
        let stroke = Stroke {
            width: 1.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.preview
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Resets the ink surface to the blank background fill. The preview
    /// overlay is deliberately left alone.
    pub fn clear_ink(&mut self) {
        let [r, g, b] = color::parse_hex(BACKGROUND_COLOR)
            .unwrap_or([255, 255, 255]);
        self.ink.fill(Color::from_rgba8(r, g, b, 255));
        self.ink_revision += 1;
    }

    pub fn width(&self) -> u32 {
        self.ink.width()
    }

    pub fn height(&self) -> u32 {
        self.ink.height()
    }

    /// Read access to the ink pixels (display upload, export, tests).
    pub fn ink(&self) -> &Pixmap {
        &self.ink
    }

    /// Read access to the preview pixels.
    pub fn preview(&self) -> &Pixmap {
        &self.preview
    }

    pub fn ink_revision(&self) -> u64 {
        self.ink_revision
    }

    pub fn preview_revision(&self) -> u64 {
        self.preview_revision
    }
}

/// Builds an opaque anti-aliased paint from a `#RRGGBB` string.
///
/// Colors reaching this point were validated by the tool state; a malformed
/// one is logged and dropped rather than treated as a fault.
fn solid_paint(hex_color: &str) -> Option<Paint<'static>> {
    let [r, g, b] = match color::parse_hex(hex_color) {
        Ok(rgb) => rgb,
        Err(err) => {
            log::warn!("refusing to draw: {err}");
            return None;
        }
    };
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(r, g, b, 255));
    paint.anti_alias = true;
    Some(paint)
}
