mod bus;
mod events;

pub use bus::EventBus;
pub use events::CanvasEvent;

use crate::document::Document;

/// Receives canvas events together with a read-only view of the document
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: CanvasEvent, document: &Document);
}
