use crate::command::{DisplayCommand, Render};
use crate::document::Document;
use crate::event::{CanvasEvent, EventHandler};
use crate::surface::{SharedSurface, Surface};

/// Clears `surface` and draws `commands` in order, earliest at the bottom.
pub fn replay(commands: &[DisplayCommand], surface: &mut dyn Surface) {
    surface.clear();
    for command in commands {
        command.render(surface);
    }
}

/// Redraws the document whenever a canvas event arrives.
///
/// The surface is optional: without one every redraw is skipped.
#[derive(Default)]
pub struct Renderer {
    surface: Option<SharedSurface>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_surface", &self.surface.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// A renderer with nothing to draw into.
    pub fn detached() -> Self {
        Self { surface: None }
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Replays the committed commands.
    pub fn redraw(&self, document: &Document) {
        self.with_surface(|surface| replay(document.history().committed(), surface));
    }

    /// Replays the committed commands, then draws the cursor preview on top.
    pub fn redraw_with_preview(&self, document: &Document) {
        self.with_surface(|surface| {
            replay(document.history().committed(), surface);
            if let Some(preview) = document.preview() {
                preview.render(surface);
            }
        });
    }

    fn with_surface(&self, draw: impl FnOnce(&mut dyn Surface)) {
        let Some(surface) = &self.surface else {
            log::trace!("No surface attached, skipping redraw");
            return;
        };
        let mut surface = surface.lock();
        draw(&mut *surface);
    }
}

impl EventHandler for Renderer {
    fn handle_event(&mut self, event: CanvasEvent, document: &Document) {
        match event {
            CanvasEvent::SurfaceChanged => self.redraw(document),
            CanvasEvent::PointerMoved => self.redraw_with_preview(document),
        }
    }
}
