use crate::command::{CommandHistory, CursorPreview};

/// Everything the renderer draws: the command history plus the cursor preview.
#[derive(Debug, Default)]
pub struct Document {
    history: CommandHistory,
    preview: Option<CursorPreview>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    pub fn preview(&self) -> Option<&CursorPreview> {
        self.preview.as_ref()
    }

    pub fn set_preview(&mut self, preview: Option<CursorPreview>) {
        self.preview = preview;
    }
}
