//! PNG export of the committed drawing.

use egui::{Color32, Vec2};

use crate::command::DisplayCommand;
use crate::config::PadConfig;
use crate::error::ExportError;
use crate::renderer::replay;
use crate::surface::RasterSurface;

/// Background the exported image is filled with.
pub const EXPORT_BACKGROUND: Color32 = Color32::WHITE;

/// Replays `commands` onto a `scale`d raster and encodes it as PNG.
///
/// The commands are drawn with their usual render code; only the surface
/// knows about the scale.
pub fn render_png(
    commands: &[DisplayCommand],
    canvas_size: Vec2,
    scale: f32,
) -> Result<Vec<u8>, ExportError> {
    let mut surface = RasterSurface::new(canvas_size, scale, EXPORT_BACKGROUND)?;
    replay(commands, &mut surface);
    surface.encode_png()
}

/// Renders and saves the drawing the way the current platform allows.
///
/// Returns a short description of where the image went.
pub fn export(commands: &[DisplayCommand], config: &PadConfig) -> Result<String, ExportError> {
    let bytes = render_png(commands, config.canvas_size(), config.export_scale)?;
    let target = save_png(&bytes, config)?;
    log::info!(
        "Exported {} command(s), {} bytes, to {target}",
        commands.len(),
        bytes.len()
    );
    Ok(target)
}

#[cfg(not(target_arch = "wasm32"))]
fn save_png(bytes: &[u8], config: &PadConfig) -> Result<String, ExportError> {
    let path = config.export_dir.join(&config.export_file_name);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path.display().to_string())
}

/// Hands the image to the browser as a file download.
#[cfg(target_arch = "wasm32")]
fn save_png(bytes: &[u8], config: &PadConfig) -> Result<String, ExportError> {
    use wasm_bindgen::{JsCast as _, JsValue};

    let js_err = |err: JsValue| ExportError::Download(format!("{err:?}"));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("could not create a link".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&config.export_file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;

    Ok(format!("download {}", config.export_file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{StickerCommand, StrokeCommand};
    use egui::{pos2, vec2};
    use image::GenericImageView as _;

    #[test]
    fn test_export_is_upscaled() {
        let mut stroke = StrokeCommand::new(pos2(2.0, 2.0), Color32::RED, 2.0);
        stroke.extend(pos2(10.0, 2.0));
        let commands = vec![
            DisplayCommand::Stroke(stroke),
            DisplayCommand::Sticker(StickerCommand::new(pos2(8.0, 10.0), "😀", 8.0)),
        ];

        let bytes = render_png(&commands, vec2(16.0, 12.0), 4.0).unwrap();
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!(image.dimensions(), (64, 48));
        // (6, 2) on the canvas is on the stroke
        assert_eq!(image.get_pixel(24, 8).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 47).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_empty_canvas_cannot_be_exported() {
        let result = render_png(&[], vec2(0.0, 0.0), 4.0);
        assert!(matches!(result, Err(ExportError::EmptySurface { .. })));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_export_writes_file() {
        let dir = std::env::temp_dir().join(format!("sketchpad-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = PadConfig {
            export_dir: dir.clone(),
            ..PadConfig::default()
        };

        let target = export(&[], &config).unwrap();
        let written = std::fs::read(dir.join(&config.export_file_name)).unwrap();
        assert!(target.ends_with("sketchpad.png"));
        assert_eq!(&written[..4], b"\x89PNG");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_unwritable_directory_is_reported() {
        let config = PadConfig {
            export_dir: "/definitely/not/a/dir".into(),
            ..PadConfig::default()
        };
        assert!(matches!(export(&[], &config), Err(ExportError::Write { .. })));
    }
}
