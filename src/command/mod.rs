//! Display commands: the replayable units a drawing is made of.

mod factory;
mod history;
mod preview;
mod sticker;
mod stroke;

use egui::Pos2;

use crate::surface::Surface;

pub use factory::{create_command, create_preview};
pub use history::CommandHistory;
pub use preview::{CursorPreview, PREVIEW_RING_WIDTH, StickerPreview, StrokePreview};
pub use sticker::{STICKER_COLOR, StickerCommand};
pub use stroke::StrokeCommand;

/// Anything that can draw its current state into a [`Surface`].
pub trait Render {
    fn render(&self, surface: &mut dyn Surface);
}

/// A persisted, replayable unit of drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayCommand {
    Stroke(StrokeCommand),
    Sticker(StickerCommand),
}

impl DisplayCommand {
    /// Incorporates a new drag sample.
    ///
    /// Strokes append the point; stickers move to it.
    pub fn extend(&mut self, pos: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.extend(pos),
            Self::Sticker(sticker) => sticker.extend(pos),
        }
    }

    /// Human readable label, used by the history listing.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "Stroke",
            Self::Sticker(_) => "Sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&StrokeCommand> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerCommand> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}

impl Render for DisplayCommand {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }
}
