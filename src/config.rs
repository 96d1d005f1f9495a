use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Settings for the drawing pad.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Linear upscale applied when exporting
    pub export_scale: f32,
    pub export_file_name: String,
    /// Directory exports are written to (native only)
    pub export_dir: PathBuf,
    pub thin_width: f32,
    pub thick_width: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub sticker_size: f32,
    pub stickers: Vec<String>,
    pub default_hue: f32,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
            thin_width: 2.0,
            thick_width: 6.0,
            min_width: 1.0,
            max_width: 20.0,
            sticker_size: 32.0,
            stickers: vec!["😀".to_owned(), "🌵".to_owned(), "🎈".to_owned()],
            default_hue: 0.0,
        }
    }
}

impl PadConfig {
    /// Environment variable naming a JSON config file.
    pub const ENV_VAR: &'static str = "SKETCHPAD_CONFIG";

    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Loads the file named by [`Self::ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}, using defaults");
                Self::default()
            }
        }
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }
}
