use std::path::Path;

use egui::{Color32, ColorImage, Rect, TextureHandle, TextureOptions};
use tiny_skia::Pixmap;

use crate::engine::StrokeEngine;
use crate::error::CanvasError;
use crate::export;
use crate::indicator::WidthIndicator;
use crate::input::{dispatch, InputHandler, InputRouter};
use crate::panels;
use crate::surfaces::{SurfacePair, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::tool_state::ToolState;

/// The application: one tool state threaded through the stroke engine, the
/// width indicator, and the input router, plus the surface pair they draw
/// on and the textures mirroring it on screen.
pub struct InkboardApp {
    tool_state: ToolState,
    surfaces: SurfacePair,
    engine: StrokeEngine,
    indicator: WidthIndicator,
    router: InputRouter,
    input: InputHandler,
    ink_texture: Option<TextureHandle>,
    preview_texture: Option<TextureHandle>,
    uploaded_ink_revision: Option<u64>,
    uploaded_preview_revision: Option<u64>,
    save_status: Option<String>,
}

impl InkboardApp {
    /// Called once before the first frame. Restores the brush settings from
    /// storage if there are any; the surfaces always start blank.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, CanvasError> {
        let tool_state: ToolState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Ok(Self {
            tool_state,
            surfaces: SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT)?,
            engine: StrokeEngine::new(),
            indicator: WidthIndicator::new(),
            router: InputRouter::new(),
            input: InputHandler::new(),
            ink_texture: None,
            preview_texture: None,
            uploaded_ink_revision: None,
            uploaded_preview_revision: None,
            save_status: None,
        })
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn tool_state_mut(&mut self) -> &mut ToolState {
        &mut self.tool_state
    }

    /// Switches to painting with the background color.
    pub fn apply_eraser(&mut self) {
        self.tool_state.apply_eraser();
    }

    /// Resets the ink surface to the blank background. The preview overlay
    /// is not part of this action.
    pub fn clear_canvas(&mut self) {
        log::debug!("clearing ink surface");
        self.surfaces.clear_ink();
    }

    /// Writes the current ink surface to a JPEG file in the working
    /// directory.
    pub fn export_drawing(&mut self) {
        match export::save_jpeg(self.surfaces.ink(), Path::new(export::EXPORT_FILE)) {
            Ok(()) => {
                self.save_status = Some(format!("Saved {}", export::EXPORT_FILE));
            }
            Err(err) => {
                log::error!("export failed: {err}");
                self.save_status = Some(format!("Save failed: {err}"));
            }
        }
    }

    pub fn save_status(&self) -> Option<&str> {
        self.save_status.as_deref()
    }

    /// Translates this frame's pointer input over the canvas rect into
    /// events, routes each one, and runs the resulting commands to
    /// completion before the next event is considered.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        for event in self.input.poll(ctx, canvas_rect) {
            let commands = self.router.route(event);
            dispatch(
                commands,
                &self.engine,
                &self.indicator,
                &mut self.tool_state,
                &mut self.surfaces,
            );
        }
    }

    /// Draws the two surfaces stacked in the canvas rect: ink below,
    /// preview overlay on top.
    pub(crate) fn paint_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect) {
        self.upload_textures(ctx);

        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        if let Some(texture) = &self.ink_texture {
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        if let Some(texture) = &self.preview_texture {
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }

    /// Re-uploads a surface to its texture only when its revision moved.
    fn upload_textures(&mut self, ctx: &egui::Context) {
        let ink_revision = self.surfaces.ink_revision();
        if self.uploaded_ink_revision != Some(ink_revision) {
            let image = surface_image(self.surfaces.ink());
            match &mut self.ink_texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.ink_texture =
                        Some(ctx.load_texture("ink_surface", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_ink_revision = Some(ink_revision);
        }

        let preview_revision = self.surfaces.preview_revision();
        if self.uploaded_preview_revision != Some(preview_revision) {
            let image = surface_image(self.surfaces.preview());
            match &mut self.preview_texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.preview_texture =
                        Some(ctx.load_texture("preview_surface", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_preview_revision = Some(preview_revision);
        }
    }
}

/// A pixmap's pixels as an egui image. Both are premultiplied RGBA, so this
/// is a plain copy.
fn surface_image(pixmap: &Pixmap) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    )
}

impl eframe::App for InkboardApp {
    /// Called by the framework to save state before shutdown. Only the
    /// brush settings persist; ink never survives the session.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.tool_state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
