use egui::{Color32, Pos2, Stroke};

use super::Render;
use crate::surface::Surface;

/// A freehand stroke.
///
/// Color and width are fixed when the stroke is created; points are only
/// ever appended, and there is always at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeCommand {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl StrokeCommand {
    /// Starts a stroke at `start`.
    pub fn new(start: Pos2, color: Color32, width: f32) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }
}

impl Render for StrokeCommand {
    fn render(&self, surface: &mut dyn Surface) {
        let stroke = Stroke::new(self.width, self.color);
        match self.points.as_slice() {
            // zero-length segment, drawn as a dot
            [only] => surface.stroke_path(&[*only, *only], stroke),
            points => surface.stroke_path(points, stroke),
        }
    }
}
