use egui::Color32;
use std::ops::RangeInclusive;

/// Range of the hue slider, in degrees.
pub const HUE_RANGE: RangeInclusive<f32> = 0.0..=360.0;

/// Maps a hue slider position (degrees) to a fully saturated, mid-lightness color.
///
/// Positions outside [`HUE_RANGE`] wrap around the color wheel.
pub fn hue_to_color(hue: f32) -> Color32 {
    // hsl(h, 100%, 50%): chroma is 1, so one channel is full, one is empty
    // and the third ramps across each 60 degree sector.
    let sector = hue.rem_euclid(360.0) / 60.0;
    let ramp = 1.0 - (sector % 2.0 - 1.0).abs();
    let (r, g, b) = match sector as u32 {
        0 => (1.0, ramp, 0.0),
        1 => (ramp, 1.0, 0.0),
        2 => (0.0, 1.0, ramp),
        3 => (0.0, ramp, 1.0),
        4 => (ramp, 0.0, 1.0),
        _ => (1.0, 0.0, ramp),
    };
    Color32::from_rgb(channel(r), channel(g), channel(b))
}

fn channel(value: f32) -> u8 {
    (value * 255.0).round() as u8
}

/// The same color as [`hue_to_color`], spelled as a CSS color string.
pub fn hue_to_css(hue: f32) -> String {
    format!("hsl({}, 100%, 50%)", hue.rem_euclid(360.0).round())
}
