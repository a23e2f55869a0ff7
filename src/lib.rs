#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod surface;
pub mod tool;
pub mod util;

pub use app::SketchApp;
pub use config::AppConfig;
pub use document::Document;
pub use error::{ConfigError, ExportError};
pub use history::SnapshotHistory;
pub use renderer::Renderer;
pub use shape::{Shape, ShapeId, ShapeRef};
pub use state::{CanvasSize, InteractionState, SceneModel, SizePreset, StyleSettings};
pub use surface::{DrawCall, Path, RasterSurface, RecordingSurface, Surface};
pub use tool::ToolKind;
