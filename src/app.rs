use egui::{Painter, Pos2, Rect};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::PadConfig;
use crate::controller::InputController;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::surface::DisplayList;
use crate::tools::{ToolKind, ToolSettings};

/// The drawing pad application.
#[derive(Debug)]
pub struct SketchPadApp {
    config: PadConfig,
    tools: ToolSettings,
    stickers: Vec<String>,
    /// Text field backing the "custom sticker" input
    pub(crate) custom_sticker: String,
    controller: InputController,
    input: InputHandler,
    canvas: Arc<Mutex<DisplayList>>,
    status: Option<String>,
}

impl Default for SketchPadApp {
    fn default() -> Self {
        Self::with_config(PadConfig::default())
    }
}

impl SketchPadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PadConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: PadConfig) -> Self {
        let canvas = Arc::new(Mutex::new(DisplayList::new()));
        let controller = InputController::new();
        controller.subscribe(Box::new(Renderer::new(canvas.clone())));

        Self {
            tools: ToolSettings::from_config(&config),
            stickers: config.stickers.clone(),
            custom_sticker: String::new(),
            controller,
            input: InputHandler::new(Rect::from_min_size(Pos2::ZERO, config.canvas_size())),
            canvas,
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.tools.tool != tool {
            log::info!("Tool selected: {}", tool.name());
            self.tools.tool = tool;
            self.tools_changed();
        }
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.tools.sticker = glyph.to_owned();
        self.tools.tool = ToolKind::Sticker;
        self.tools_changed();
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.tools.stroke_width = width.clamp(self.config.min_width, self.config.max_width);
        self.tools_changed();
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.tools.hue = hue;
        self.tools_changed();
    }

    /// Adds the text of the custom sticker field as a sticker and selects it.
    ///
    /// Returns `false` when the field is blank.
    pub fn add_custom_sticker(&mut self) -> bool {
        let glyph = self.custom_sticker.trim().to_owned();
        if glyph.is_empty() {
            return false;
        }
        if !self.stickers.contains(&glyph) {
            self.stickers.push(glyph.clone());
        }
        self.custom_sticker.clear();
        self.select_sticker(&glyph);
        true
    }

    pub fn undo(&mut self) {
        self.controller.undo();
    }

    pub fn redo(&mut self) {
        self.controller.redo();
    }

    /// Whether there is anything to clear and no drag in progress.
    pub fn can_clear(&self) -> bool {
        let history = self.controller.document().history();
        (history.can_undo() || history.can_redo()) && !self.controller.state().is_dragging()
    }

    pub fn clear(&mut self) {
        self.controller.clear();
    }

    /// Writes the drawing out as an upscaled PNG and records the outcome.
    pub fn export(&mut self) {
        let commands = self.controller.document().history().committed();
        self.status = Some(match crate::export::export(commands, &self.config) {
            Ok(target) => format!("Exported to {target}"),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    /// Feeds this frame's pointer input over `canvas_rect` to the controller.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let events = self.input.process_input(ctx);
        if events.is_empty() {
            return;
        }
        let snapshot = self.tools.snapshot();
        for event in events {
            self.controller.handle_input(event, &snapshot);
        }
    }

    pub(crate) fn paint_canvas(&self, painter: &Painter, origin: Pos2) {
        self.canvas.lock().paint(painter, origin);
    }

    fn tools_changed(&mut self) {
        let snapshot = self.tools.snapshot();
        self.controller.tool_changed(&snapshot);
    }
}

impl eframe::App for SketchPadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    #[test]
    fn test_custom_sticker_is_added_once_and_selected() {
        let mut app = SketchPadApp::default();
        let before = app.stickers().len();

        app.custom_sticker = "  🐸 ".to_owned();
        assert!(app.add_custom_sticker());
        app.custom_sticker = "🐸".to_owned();
        assert!(app.add_custom_sticker());

        assert_eq!(app.stickers().len(), before + 1);
        assert_eq!(app.tools().tool, ToolKind::Sticker);
        assert_eq!(app.tools().sticker, "🐸");
        assert!(app.custom_sticker.is_empty());
    }

    #[test]
    fn test_blank_custom_sticker_is_rejected() {
        let mut app = SketchPadApp::default();
        app.custom_sticker = "   ".to_owned();
        assert!(!app.add_custom_sticker());
    }

    #[test]
    fn test_clear_is_unavailable_while_dragging() {
        let mut app = SketchPadApp::default();
        assert!(!app.can_clear());

        let snapshot = app.tools().snapshot();
        let pos = Pos2::new(10.0, 10.0);
        app.controller.handle_input(InputEvent::PointerDown { pos }, &snapshot);
        assert!(app.controller().state().is_dragging());
        assert!(!app.can_clear());

        app.controller.handle_input(InputEvent::PointerUp { pos }, &snapshot);
        assert!(app.can_clear());
    }

    #[test]
    fn test_stroke_width_is_clamped() {
        let mut app = SketchPadApp::default();
        app.set_stroke_width(1000.0);
        assert_eq!(app.tools().stroke_width, app.config().max_width);
    }
}
