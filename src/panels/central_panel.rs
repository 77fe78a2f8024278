use crate::app::InkboardApp;
use crate::surfaces::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// The canvas area: a fixed-size region showing the ink surface with the
/// preview overlay stacked on top. Input is captured against this single
/// rect so both surfaces receive identical local coordinates.
pub fn central_panel(app: &mut InkboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let desired = egui::vec2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, canvas_rect);
        app.paint_canvas(ctx, &painter, canvas_rect);

        // Thin border so the white canvas reads against the panel background.
        painter.rect_stroke(
            canvas_rect,
            0.0,
            ui.visuals().widgets.noninteractive.bg_stroke,
        );
    });
}
