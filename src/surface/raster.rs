use ab_glyph::{Font, FontArc, GlyphId, ScaleFont, point};
use egui::{Color32, Pos2, Stroke, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use super::Surface;
use crate::error::ExportError;

/// Bundled egui fonts tried, in order, when rasterizing a glyph.
const GLYPH_FONTS: [&str; 4] = ["NotoEmoji-Regular", "emoji-icon-font", "Ubuntu-Light", "Hack"];

/// Largest surface, in pixels, that will be allocated for an export (256 MiB of RGBA).
pub const MAX_SURFACE_PIXELS: u64 = 64 * 1024 * 1024;

/// CPU rasterizer used for PNG export.
///
/// Canvas coordinates are multiplied by `scale`, so replaying the same
/// commands produces a higher resolution copy of the live canvas.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    background: Rgba<u8>,
    fonts: Vec<FontArc>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("scale", &self.scale)
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl RasterSurface {
    /// Creates a surface covering a `canvas_size` canvas at `scale` pixels per canvas unit.
    pub fn new(canvas_size: Vec2, scale: f32, background: Color32) -> Result<Self, ExportError> {
        let width = f64::from(canvas_size.x * scale).round().max(0.0);
        let height = f64::from(canvas_size.y * scale).round().max(0.0);
        if width < 1.0 || height < 1.0 {
            return Err(ExportError::EmptySurface {
                width: width as u32,
                height: height as u32,
            });
        }
        if width * height > MAX_SURFACE_PIXELS as f64 {
            return Err(ExportError::TooLarge {
                width: width as u64,
                height: height as u64,
                limit: MAX_SURFACE_PIXELS,
            });
        }
        let (width, height) = (width as u32, height as u32);

        let background = Rgba(background.to_srgba_unmultiplied());
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background),
            scale,
            background,
            fonts: load_glyph_fonts(),
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Whether any font could be loaded for [`Surface::fill_text`].
    pub fn has_fonts(&self) -> bool {
        !self.fonts.is_empty()
    }

    /// Encodes the current contents as a PNG file.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn to_pixels(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.scale, pos.y * self.scale)
    }

    /// Blends `color` into the pixel at (x, y) with the given coverage.
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if coverage <= 0.0
            || x < 0
            || y < 0
            || x >= i64::from(self.image.width())
            || y >= i64::from(self.image.height())
        {
            return;
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = coverage.min(1.0) * f32::from(a) / 255.0;
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for (channel, src) in pixel.0.iter_mut().zip([r, g, b]) {
            let dst = f32::from(*channel);
            *channel = (dst + (f32::from(src) - dst) * alpha).round() as u8;
        }
        let dst_alpha = f32::from(pixel.0[3]);
        pixel.0[3] = (dst_alpha + (255.0 - dst_alpha) * alpha).round() as u8;
    }

    /// Fills every pixel whose center lies within `radius` of the segment `a`-`b`.
    fn fill_capsule(&mut self, a: Pos2, b: Pos2, radius: f32, color: Color32) {
        let (min_x, max_x) = pixel_span(a.x.min(b.x) - radius, a.x.max(b.x) + radius);
        let (min_y, max_y) = pixel_span(a.y.min(b.y) - radius, a.y.max(b.y) + radius);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_segment(center, a, b);
                self.blend(x, y, color, radius + 0.5 - distance);
            }
        }
    }

    fn glyph_font(&self, ch: char) -> Option<&FontArc> {
        self.fonts
            .iter()
            .find(|font| font.glyph_id(ch) != GlyphId(0))
            .or_else(|| self.fonts.first())
    }
}

fn load_glyph_fonts() -> Vec<FontArc> {
    let definitions = egui::FontDefinitions::default();
    GLYPH_FONTS
        .iter()
        .filter_map(|name| {
            let data = definitions.font_data.get(*name)?;
            match FontArc::try_from_vec(data.font.to_vec()) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::warn!("Skipping font {name} for export: {err}");
                    None
                }
            }
        })
        .collect()
}

fn pixel_span(min: f32, max: f32) -> (i64, i64) {
    (min.floor() as i64, max.ceil() as i64)
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        let background = self.background;
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], stroke: Stroke) {
        let radius = stroke.width * self.scale / 2.0;
        let pixels: Vec<Pos2> = points.iter().map(|p| self.to_pixels(*p)).collect();
        match pixels.as_slice() {
            [] => {}
            [only] => self.fill_capsule(*only, *only, radius, stroke.color),
            _ => {
                for segment in pixels.windows(2) {
                    self.fill_capsule(segment[0], segment[1], radius, stroke.color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        let center = self.to_pixels(center);
        let radius = radius * self.scale;
        let half_width = stroke.width * self.scale / 2.0;
        let reach = radius + half_width;
        let (min_x, max_x) = pixel_span(center.x - reach, center.x + reach);
        let (min_y, max_y) = pixel_span(center.y - reach, center.y + reach);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let sample = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let off_ring = (sample.distance(center) - radius).abs();
                self.blend(x, y, stroke.color, half_width + 0.5 - off_ring);
            }
        }
    }

    fn fill_text(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        if self.fonts.is_empty() {
            log::warn!("No fonts available, skipping text {text:?}");
            return;
        }

        let center = self.to_pixels(center);
        let px = size * self.scale;

        // Lay the glyphs out on a baseline at y = 0, then center the run.
        let mut glyphs = Vec::new();
        let mut caret = 0.0;
        let mut ascent: f32 = 0.0;
        let mut descent: f32 = 0.0;
        for ch in text.chars() {
            let Some(font) = self.glyph_font(ch) else {
                continue;
            };
            let scaled = font.as_scaled(px);
            let id = font.glyph_id(ch);
            ascent = ascent.max(scaled.ascent());
            descent = descent.min(scaled.descent());
            glyphs.push((font.clone(), id, caret));
            caret += scaled.h_advance(id);
        }

        let origin_x = center.x - caret / 2.0;
        let baseline = center.y + (ascent + descent) / 2.0;

        for (font, id, x) in glyphs {
            let glyph = id.with_scale_and_position(px, point(origin_x + x, baseline));
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i64 + i64::from(gx);
                let y = bounds.min.y as i64 + i64::from(gy);
                self.blend(x, y, color, coverage);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn surface() -> RasterSurface {
        RasterSurface::new(vec2(10.0, 10.0), 4.0, Color32::WHITE).unwrap()
    }

    #[test]
    fn test_scaled_dimensions() {
        let surface = surface();
        assert_eq!(surface.image().dimensions(), (40, 40));
        assert_eq!(*surface.image().get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_empty_surface_is_an_error() {
        let result = RasterSurface::new(vec2(0.0, 10.0), 4.0, Color32::WHITE);
        assert!(matches!(result, Err(ExportError::EmptySurface { .. })));
    }

    #[test]
    fn test_oversized_surface_is_refused_before_allocating() {
        let result = RasterSurface::new(vec2(1.0e6, 1.0e6), 4.0, Color32::WHITE);
        assert!(matches!(
            result,
            Err(ExportError::TooLarge {
                width: 4_000_000,
                height: 4_000_000,
                ..
            })
        ));

        let result = RasterSurface::new(vec2(f32::INFINITY, 10.0), 4.0, Color32::WHITE);
        assert!(matches!(result, Err(ExportError::TooLarge { .. })));
    }

    #[test]
    fn test_dot_is_drawn_at_scaled_position() {
        let mut surface = surface();
        let dot = pos2(5.0, 5.0);
        surface.stroke_path(&[dot, dot], Stroke::new(2.0, Color32::RED));

        assert_eq!(*surface.image().get_pixel(20, 20), Rgba([255, 0, 0, 255]));
        assert_eq!(*surface.image().get_pixel(2, 2), WHITE);
    }

    #[test]
    fn test_segment_covers_its_length() {
        let mut surface = surface();
        surface.stroke_path(&[pos2(1.0, 5.0), pos2(9.0, 5.0)], Stroke::new(1.0, Color32::BLACK));

        for x in [6, 20, 34] {
            assert_eq!(*surface.image().get_pixel(x, 20), Rgba([0, 0, 0, 255]));
        }
        assert_eq!(*surface.image().get_pixel(20, 5), WHITE);
    }

    #[test]
    fn test_ring_leaves_center_untouched() {
        let mut surface = surface();
        surface.stroke_circle(pos2(5.0, 5.0), 3.0, Stroke::new(1.0, Color32::BLUE));

        assert_eq!(*surface.image().get_pixel(20, 20), WHITE);
        // 3 canvas units to the right of the center lands on the ring
        assert_eq!(*surface.image().get_pixel(32, 20), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_clear_restores_background() {
        let mut surface = surface();
        surface.stroke_path(&[pos2(5.0, 5.0), pos2(5.0, 5.0)], Stroke::new(4.0, Color32::RED));
        surface.clear();
        assert!(surface.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_text_marks_pixels_when_fonts_exist() {
        let mut surface = surface();
        surface.fill_text("A", pos2(5.0, 5.0), 8.0, Color32::BLACK);
        if surface.has_fonts() {
            assert!(surface.image().pixels().any(|p| *p != WHITE));
        }
    }

    #[test]
    fn test_png_signature() {
        let bytes = surface().encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
