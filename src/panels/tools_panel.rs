use crate::SketchPadApp;
use crate::color::{HUE_RANGE, hue_to_color};
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut SketchPadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.separator();

            // Tool selection
            ui.horizontal(|ui| {
                for tool in ToolKind::ALL {
                    let selected = app.tools().tool == tool;
                    if ui.selectable_label(selected, tool.name()).clicked() {
                        app.select_tool(tool);
                    }
                }
            });

            ui.separator();

            // Marker width: presets plus a slider
            ui.horizontal(|ui| {
                let (thin, thick) = (app.config().thin_width, app.config().thick_width);
                let width = app.tools().stroke_width;
                if ui.selectable_label(width == thin, "Thin").clicked() {
                    app.select_tool(ToolKind::Stroke);
                    app.set_stroke_width(thin);
                }
                if ui.selectable_label(width == thick, "Thick").clicked() {
                    app.select_tool(ToolKind::Stroke);
                    app.set_stroke_width(thick);
                }
            });
            let mut width = app.tools().stroke_width;
            let range = app.config().min_width..=app.config().max_width;
            if ui
                .add(egui::Slider::new(&mut width, range).text("Width"))
                .changed()
            {
                app.set_stroke_width(width);
            }

            // Hue slider with a swatch of the resulting color
            let mut hue = app.tools().hue;
            ui.horizontal(|ui| {
                let (swatch, _) =
                    ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, hue_to_color(hue));
                if ui
                    .add(egui::Slider::new(&mut hue, HUE_RANGE).text("Hue"))
                    .changed()
                {
                    app.set_hue(hue);
                }
            });

            ui.separator();

            // Stickers
            ui.label("Stickers");
            let mut picked = None;
            ui.horizontal_wrapped(|ui| {
                for sticker in app.stickers() {
                    let selected =
                        app.tools().tool == ToolKind::Sticker && app.tools().sticker == *sticker;
                    let button = egui::Button::new(egui::RichText::new(sticker).size(20.0))
                        .selected(selected);
                    if ui.add(button).clicked() {
                        picked = Some(sticker.clone());
                    }
                }
            });
            if let Some(sticker) = picked {
                log::info!("Sticker selected from UI: {sticker}");
                app.select_sticker(&sticker);
            }
            ui.horizontal(|ui| {
                let field = ui.add(
                    egui::TextEdit::singleline(&mut app.custom_sticker)
                        .hint_text("Custom sticker")
                        .desired_width(100.0),
                );
                let submitted =
                    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    app.add_custom_sticker();
                }
            });

            ui.separator();

            // Undo/Redo section
            let history = app.controller().document().history();
            let can_undo = history.can_undo();
            let can_redo = history.can_redo();
            let dragging = app.controller().state().is_dragging();
            let can_clear = app.can_clear();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(can_undo && !dragging, egui::Button::new("Undo"))
                    .clicked()
                {
                    app.undo();
                }
                if ui
                    .add_enabled(can_redo && !dragging, egui::Button::new("Redo"))
                    .clicked()
                {
                    app.redo();
                }
                if ui
                    .add_enabled(can_clear, egui::Button::new("Clear"))
                    .clicked()
                {
                    app.clear();
                }
            });

            let history = app.controller().document().history();
            ui.horizontal(|ui| {
                ui.label(format!("Commands: {}", history.committed().len()));
                ui.label(format!("Redo: {}", history.redo_buffer().len()));
            });
            ui.label(format!("State: {}", app.controller().state().name()));

            ui.separator();

            if ui.button("Export PNG").clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
}
