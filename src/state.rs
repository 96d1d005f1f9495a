/// Pointer interaction state of the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    /// A display command was pushed on press and follows the pointer
    Dragging,
}

impl EditorState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging => "Dragging",
        }
    }
}
