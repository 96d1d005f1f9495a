//! Drawing surfaces that display commands render into.
//!
//! Commands only ever talk to the [`Surface`] trait. The live canvas uses a
//! retained [`DisplayList`] that the UI paints every frame, while export
//! rasterizes into a [`RasterSurface`].

use egui::{Color32, Pos2, Stroke};
use parking_lot::Mutex;
use std::sync::Arc;

mod display_list;
mod raster;

pub use display_list::DisplayList;
pub use raster::{MAX_SURFACE_PIXELS, RasterSurface};

/// The drawing primitives a surface must provide.
///
/// Coordinates are canvas-local; a surface applies its own transform.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke an open polyline with round caps and joins.
    ///
    /// A path made of two coincident points is a dot of diameter `stroke.width`.
    fn stroke_path(&mut self, points: &[Pos2], stroke: Stroke);

    /// Stroke the outline of a circle.
    fn stroke_circle(&mut self, center: Pos2, radius: f32, stroke: Stroke);

    /// Fill `text` centered on `center`, `size` pixels tall.
    fn fill_text(&mut self, text: &str, center: Pos2, size: f32, color: Color32);
}

/// A surface shared between the renderer and whoever presents it.
pub type SharedSurface = Arc<Mutex<dyn Surface + Send>>;

/// One recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Path {
        points: Vec<Pos2>,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        stroke: Stroke,
    },
    Text {
        text: String,
        center: Pos2,
        size: f32,
        color: Color32,
    },
}
