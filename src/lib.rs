#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchPadApp;
pub use command::{CommandHistory, CursorPreview, DisplayCommand, Render};
pub use config::PadConfig;
pub use controller::InputController;
pub use document::Document;
pub use error::{ConfigError, ExportError};
pub use event::{CanvasEvent, EventBus, EventHandler};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::EditorState;
pub use surface::{DisplayList, RasterSurface, Surface};
pub use tools::{ToolKind, ToolSettings, ToolSnapshot};
