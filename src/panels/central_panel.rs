use crate::SketchPadApp;

pub fn central_panel(app: &mut SketchPadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(app.config().canvas_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_canvas_input(ctx, canvas_rect);

        // Render the canvas
        painter.rect_filled(canvas_rect, 0.0, egui::Color32::WHITE);
        app.paint_canvas(&painter, canvas_rect.min);
        painter.rect_stroke(canvas_rect, 0.0, ui.visuals().widgets.noninteractive.bg_stroke);
    });
}
