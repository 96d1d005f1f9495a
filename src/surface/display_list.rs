use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2};

use super::{DrawOp, Surface};

/// Retained list of drawing operations.
///
/// Acts like a canvas that keeps its contents between frames: the renderer
/// clears and refills it when the drawing changes, and the UI replays it into
/// an egui [`Painter`] on every frame.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations recorded since the last clear, in drawing order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replays the recorded operations into `painter`.
    ///
    /// Args:
    ///     painter: The painter to draw with
    ///     origin: Screen position of the canvas' top-left corner
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for op in &self.ops {
            match op {
                DrawOp::Path { points, stroke } => paint_path(painter, points, offset, *stroke),
                DrawOp::Circle {
                    center,
                    radius,
                    stroke,
                } => {
                    painter.circle_stroke(*center + offset, *radius, *stroke);
                }
                DrawOp::Text {
                    text,
                    center,
                    size,
                    color,
                } => {
                    painter.text(
                        *center + offset,
                        Align2::CENTER_CENTER,
                        text,
                        FontId::proportional(*size),
                        *color,
                    );
                }
            }
        }
    }
}

fn paint_path(painter: &Painter, points: &[Pos2], offset: Vec2, stroke: Stroke) {
    let screen: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();

    // egui lines have butt caps; a disc on every vertex gives round caps and joins
    // and turns a zero-length path into a dot.
    let radius = stroke.width / 2.0;
    for point in &screen {
        painter.circle_filled(*point, radius, stroke.color);
    }

    if screen.len() >= 2 {
        painter.add(Shape::line(screen, stroke));
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn stroke_path(&mut self, points: &[Pos2], stroke: Stroke) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            stroke,
        });
    }

    fn fill_text(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            center,
            size,
            color,
        });
    }
}
