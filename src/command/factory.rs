//! Builds commands and previews from a [`ToolSnapshot`].

use egui::Pos2;

use super::{
    CursorPreview, DisplayCommand, PREVIEW_RING_WIDTH, StickerCommand, StickerPreview,
    StrokeCommand, StrokePreview,
};
use crate::tools::ToolSnapshot;

/// Creates the display command the snapshotted tool draws, starting at `pos`.
pub fn create_command(snapshot: &ToolSnapshot, pos: Pos2) -> DisplayCommand {
    match snapshot {
        ToolSnapshot::Stroke { width, color } => {
            DisplayCommand::Stroke(StrokeCommand::new(pos, *color, *width))
        }
        ToolSnapshot::Sticker { glyph, size } => {
            DisplayCommand::Sticker(StickerCommand::new(pos, glyph.clone(), *size))
        }
    }
}

/// Creates the cursor preview for the snapshotted tool at `pos`.
pub fn create_preview(snapshot: &ToolSnapshot, pos: Pos2) -> CursorPreview {
    match snapshot {
        ToolSnapshot::Stroke { width, color } => CursorPreview::Stroke(StrokePreview {
            position: pos,
            radius: width / 2.0,
            color: *color,
            width: PREVIEW_RING_WIDTH,
        }),
        ToolSnapshot::Sticker { glyph, size } => CursorPreview::Sticker(StickerPreview {
            position: pos,
            glyph: glyph.clone(),
            size: *size,
        }),
    }
}
