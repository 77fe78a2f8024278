use crate::app::InkboardApp;

/// The tool controls: color picker, width controls, eraser/clear triggers,
/// and the export button. These only ever write into the tool state or fire
/// whole-surface actions; the per-move drawing path never runs through here.
pub fn tools_panel(app: &mut InkboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            // The picker emits a finalized color, stored back as hex.
            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.tool_state().color32();
                let response = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
                if response.changed() {
                    app.tool_state_mut()
                        .set_color_rgb([color.r(), color.g(), color.b()]);
                }
            });

            ui.separator();

            // Slider and numeric field edit the same value, so the two
            // controls can never disagree about the current width.
            ui.label("Line width:");
            ui.add(egui::Slider::new(
                &mut app.tool_state_mut().line_width,
                1.0..=50.0,
            ));
            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut app.tool_state_mut().line_width)
                        .range(1.0..=50.0)
                        .speed(1.0),
                );
                ui.label(format!("{:.0} px", app.tool_state().line_width));
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Eraser").clicked() {
                    app.apply_eraser();
                }
                if ui.button("Clear").clicked() {
                    app.clear_canvas();
                }
            });

            ui.separator();

            if ui.button("Save as JPEG").clicked() {
                app.export_drawing();
            }
            if let Some(status) = app.save_status() {
                ui.label(status);
            }
        });
}
