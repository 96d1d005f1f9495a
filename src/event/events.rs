/// Signals published after the drawing state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The committed drawing changed; redraw it
    SurfaceChanged,
    /// The pointer moved over the canvas; redraw, then draw the cursor preview
    PointerMoved,
}
