use egui::Pos2;

use super::DisplayCommand;

/// Manages the committed commands and the redo buffer for undo/redo
///
/// A command lives in exactly one of the two stacks; undo and redo move
/// it across, they never copy it.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Commands that make up the current drawing, in rendering order
    committed: Vec<DisplayCommand>,
    /// Commands removed by undo, most recent last
    redo_buffer: Vec<DisplayCommand>,
    /// Whether the last committed command is still being dragged
    active: bool,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a new command and makes it the active one.
    ///
    /// Anything in the redo buffer is discarded.
    pub fn push(&mut self, command: DisplayCommand) {
        if !self.redo_buffer.is_empty() {
            log::debug!("Discarding {} redoable command(s)", self.redo_buffer.len());
        }
        self.redo_buffer.clear();
        self.committed.push(command);
        self.active = true;
    }

    /// Feeds a drag sample to the active command, if there is one.
    ///
    /// Returns `false` when no command is active.
    pub fn extend_active(&mut self, pos: Pos2) -> bool {
        if !self.active {
            return false;
        }
        match self.committed.last_mut() {
            Some(command) => {
                command.extend(pos);
                true
            }
            None => false,
        }
    }

    /// Marks the active command as finished; later drags no longer reach it.
    pub fn finish_active(&mut self) {
        self.active = false;
    }

    /// Moves the last committed command to the redo buffer
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.committed.pop() else {
            return false;
        };
        log::debug!("Undo {}", command.label());
        self.redo_buffer.push(command);
        self.active = false;
        true
    }

    /// Moves the most recently undone command back into the drawing
    ///
    /// Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.redo_buffer.pop() else {
            return false;
        };
        log::debug!("Redo {}", command.label());
        self.committed.push(command);
        true
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
        self.active = false;
    }

    pub fn committed(&self) -> &[DisplayCommand] {
        &self.committed
    }

    pub fn redo_buffer(&self) -> &[DisplayCommand] {
        &self.redo_buffer
    }

    /// The command currently being dragged
    pub fn active(&self) -> Option<&DisplayCommand> {
        if self.active { self.committed.last() } else { None }
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{StickerCommand, StrokeCommand};
    use egui::{Color32, pos2};

    fn stroke(x: f32) -> DisplayCommand {
        DisplayCommand::Stroke(StrokeCommand::new(pos2(x, x), Color32::BLACK, 2.0))
    }

    #[test]
    fn test_extend_reaches_only_the_active_command() {
        let mut history = CommandHistory::new();
        assert!(!history.extend_active(pos2(1.0, 1.0)));

        history.push(stroke(0.0));
        assert!(history.extend_active(pos2(1.0, 1.0)));
        history.finish_active();
        assert!(!history.extend_active(pos2(2.0, 2.0)));

        let points = history.committed()[0].as_stroke().unwrap().points();
        assert_eq!(points, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
    }

    #[test]
    fn test_undo_ends_the_active_command() {
        let mut history = CommandHistory::new();
        history.push(stroke(0.0));
        history.push(DisplayCommand::Sticker(StickerCommand::new(pos2(5.0, 5.0), "⭐", 32.0)));
        assert!(history.undo());
        assert!(history.active().is_none());
        assert!(!history.extend_active(pos2(9.0, 9.0)));
        assert_eq!(history.committed(), &[stroke(0.0)]);
    }
}
