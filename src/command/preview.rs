use egui::{Color32, Pos2, Stroke};

use super::{Render, STICKER_COLOR};
use crate::surface::Surface;

/// Line width of the ring drawn by a stroke preview.
pub const PREVIEW_RING_WIDTH: f32 = 1.0;

/// Ring showing where, and how wide, a stroke would start.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePreview {
    pub position: Pos2,
    pub radius: f32,
    pub color: Color32,
    pub width: f32,
}

/// The sticker that would be stamped at the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct StickerPreview {
    pub position: Pos2,
    pub glyph: String,
    pub size: f32,
}

/// Transient rendering of the current tool at the pointer position.
///
/// Never stored in the history; a fresh one is built for every pointer move.
#[derive(Clone, Debug, PartialEq)]
pub enum CursorPreview {
    Stroke(StrokePreview),
    Sticker(StickerPreview),
}

impl CursorPreview {
    pub fn position(&self) -> Pos2 {
        match self {
            Self::Stroke(preview) => preview.position,
            Self::Sticker(preview) => preview.position,
        }
    }
}

impl Render for CursorPreview {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(preview) => surface.stroke_circle(
                preview.position,
                preview.radius,
                Stroke::new(preview.width, preview.color),
            ),
            Self::Sticker(preview) => {
                surface.fill_text(&preview.glyph, preview.position, preview.size, STICKER_COLOR)
            }
        }
    }
}
