use egui::Pos2;

use crate::command::{create_command, create_preview};
use crate::document::Document;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::input::InputEvent;
use crate::state::EditorState;
use crate::tools::ToolSnapshot;

/// Turns canvas input into document changes and canvas events.
///
/// Owns the document and the event bus. Every mutation is completed before
/// the matching event is emitted, so subscribers always see a consistent
/// document.
#[derive(Debug, Default)]
pub struct InputController {
    document: Document,
    bus: EventBus,
    state: EditorState,
    /// Last pointer position seen over the canvas; cleared when the pointer leaves
    hover_pos: Option<Pos2>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for the events this controller emits.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Applies one pointer event using the tool parameters in `snapshot`.
    pub fn handle_input(&mut self, event: InputEvent, snapshot: &ToolSnapshot) {
        match (self.state, event) {
            (EditorState::Idle, InputEvent::PointerDown { pos }) => {
                self.begin_drag(pos, snapshot);
            }
            (EditorState::Dragging, InputEvent::PointerDown { pos }) => {
                // The release happened somewhere we never heard about.
                self.document.history_mut().finish_active();
                self.begin_drag(pos, snapshot);
            }
            (EditorState::Dragging, InputEvent::PointerMove { pos }) => {
                self.hover_pos = Some(pos);
                self.document.history_mut().extend_active(pos);
                self.emit(CanvasEvent::SurfaceChanged);
            }
            (EditorState::Idle, InputEvent::PointerMove { pos }) => {
                self.hover_pos = Some(pos);
                self.show_preview(pos, snapshot);
            }
            (EditorState::Dragging, InputEvent::PointerUp { pos }) => {
                log::debug!("Finished dragging at {pos:?}");
                self.hover_pos = Some(pos);
                self.document.history_mut().finish_active();
                self.state = EditorState::Idle;
                self.show_preview(pos, snapshot);
            }
            (EditorState::Idle, InputEvent::PointerUp { .. }) => {
                log::trace!("Ignoring release without a press on the canvas");
            }
            (_, InputEvent::PointerLeave) => {
                // An active drag survives leaving the canvas.
                self.hover_pos = None;
                self.document.set_preview(None);
                self.emit(CanvasEvent::SurfaceChanged);
            }
        }
    }

    /// Rebuilds the cursor preview after the tool settings changed.
    ///
    /// Does nothing while dragging or when the pointer is not over the canvas.
    pub fn tool_changed(&mut self, snapshot: &ToolSnapshot) {
        if self.state.is_dragging() {
            return;
        }
        if let Some(pos) = self.hover_pos {
            self.show_preview(pos, snapshot);
        }
    }

    /// Undoes the last committed command. Ignored while dragging.
    pub fn undo(&mut self) -> bool {
        if self.refuse_while_dragging("undo") {
            return false;
        }
        let changed = self.document.history_mut().undo();
        if changed {
            self.emit(CanvasEvent::SurfaceChanged);
        }
        changed
    }

    /// Restores the last undone command. Ignored while dragging.
    pub fn redo(&mut self) -> bool {
        if self.refuse_while_dragging("redo") {
            return false;
        }
        let changed = self.document.history_mut().redo();
        if changed {
            self.emit(CanvasEvent::SurfaceChanged);
        }
        changed
    }

    /// Empties the drawing and the redo buffer. Ignored while dragging.
    pub fn clear(&mut self) -> bool {
        if self.refuse_while_dragging("clear") {
            return false;
        }
        self.document.history_mut().clear();
        self.emit(CanvasEvent::SurfaceChanged);
        true
    }

    fn begin_drag(&mut self, pos: Pos2, snapshot: &ToolSnapshot) {
        let command = create_command(snapshot, pos);
        log::debug!("Started {} at {pos:?}", command.label());
        self.hover_pos = Some(pos);
        self.document.history_mut().push(command);
        self.document.set_preview(None);
        self.state = EditorState::Dragging;
        self.emit(CanvasEvent::SurfaceChanged);
    }

    fn show_preview(&mut self, pos: Pos2, snapshot: &ToolSnapshot) {
        self.document.set_preview(Some(create_preview(snapshot, pos)));
        self.emit(CanvasEvent::PointerMoved);
    }

    fn refuse_while_dragging(&self, action: &str) -> bool {
        if self.state.is_dragging() {
            log::debug!("Ignoring {action} while dragging");
            return true;
        }
        false
    }

    fn emit(&self, event: CanvasEvent) {
        self.bus.emit(event, &self.document);
    }
}
