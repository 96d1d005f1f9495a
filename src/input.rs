use egui::{Context, Pos2, Rect};

/// Pointer events delivered to the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { pos: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// The slice of egui's pointer state the canvas cares about for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position in screen coordinates, if the pointer is over the window
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.hover_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
///
/// Like a listener attached to a canvas element, it only reports presses,
/// moves and releases that happen over the canvas rectangle.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process(PointerSample::from_egui(ctx))
    }

    /// Turns one frame of pointer state into canvas events.
    pub fn process(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = sample.pos.filter(|pos| self.canvas_rect.contains(*pos));
        let Some(screen_pos) = inside else {
            if self.last_pointer_pos.take().is_some() {
                events.push(InputEvent::PointerLeave);
            }
            return events;
        };

        let pos = Pos2::ZERO + (screen_pos - self.canvas_rect.min);

        if sample.pressed {
            events.push(InputEvent::PointerDown { pos });
        }
        // A press already carries its position; a move at the same spot would
        // add the first stroke point twice.
        if !sample.pressed && self.last_pointer_pos != Some(pos) {
            events.push(InputEvent::PointerMove { pos });
        }
        if sample.released {
            events.push(InputEvent::PointerUp { pos });
        }

        self.last_pointer_pos = Some(pos);
        events
    }
}
