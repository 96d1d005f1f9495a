use egui::{Color32, Pos2};

use super::Render;
use crate::surface::Surface;

/// Color used to fill sticker glyphs.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// An emoji (or any short text) stamped onto the canvas.
///
/// Dragging a sticker moves it; the glyph and its size never change.
#[derive(Clone, Debug, PartialEq)]
pub struct StickerCommand {
    position: Pos2,
    glyph: String,
    size: f32,
}

impl StickerCommand {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn extend(&mut self, pos: Pos2) {
        self.position = pos;
    }
}

impl Render for StickerCommand {
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_text(&self.glyph, self.position, self.size, STICKER_COLOR);
    }
}
