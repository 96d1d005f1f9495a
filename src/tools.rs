//! Tool selection state owned by the UI, and the snapshot commands are built from.

use egui::Color32;

use crate::color::hue_to_color;
use crate::config::PadConfig;

/// The tools a user can draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Stroke,
    Sticker,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::Stroke, ToolKind::Sticker];

    pub fn name(self) -> &'static str {
        match self {
            Self::Stroke => "Marker",
            Self::Sticker => "Sticker",
        }
    }
}

/// Current tool parameters, as edited in the tools panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub tool: ToolKind,
    pub stroke_width: f32,
    /// Hue slider position, in degrees
    pub hue: f32,
    pub sticker: String,
    pub sticker_size: f32,
}

impl ToolSettings {
    pub fn from_config(config: &PadConfig) -> Self {
        Self {
            tool: ToolKind::default(),
            stroke_width: config.thin_width,
            hue: config.default_hue,
            sticker: config.stickers.first().cloned().unwrap_or_default(),
            sticker_size: config.sticker_size,
        }
    }

    pub fn stroke_color(&self) -> Color32 {
        hue_to_color(self.hue)
    }

    /// Captures the parameters of the current tool by value.
    pub fn snapshot(&self) -> ToolSnapshot {
        match self.tool {
            ToolKind::Stroke => ToolSnapshot::Stroke {
                width: self.stroke_width,
                color: self.stroke_color(),
            },
            ToolKind::Sticker => ToolSnapshot::Sticker {
                glyph: self.sticker.clone(),
                size: self.sticker_size,
            },
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&PadConfig::default())
    }
}

/// Tool parameters frozen at the moment a command or preview is created.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolSnapshot {
    Stroke { width: f32, color: Color32 },
    Sticker { glyph: String, size: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_follows_selected_tool() {
        let mut settings = ToolSettings::default();
        settings.hue = 120.0;
        settings.stroke_width = 6.0;
        assert_eq!(
            settings.snapshot(),
            ToolSnapshot::Stroke {
                width: 6.0,
                color: Color32::from_rgb(0, 255, 0),
            }
        );

        settings.tool = ToolKind::Sticker;
        settings.sticker = "🎈".to_owned();
        assert_eq!(
            settings.snapshot(),
            ToolSnapshot::Sticker {
                glyph: "🎈".to_owned(),
                size: settings.sticker_size,
            }
        );
    }

    #[test]
    fn test_later_changes_do_not_touch_snapshot() {
        let mut settings = ToolSettings::default();
        let before = settings.snapshot();
        settings.stroke_width += 10.0;
        settings.hue = 200.0;
        assert_ne!(settings.snapshot(), before);
        assert_eq!(
            before,
            ToolSnapshot::Stroke {
                width: PadConfig::default().thin_width,
                color: hue_to_color(PadConfig::default().default_hue),
            }
        );
    }
}
