#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod image;
pub mod input;
pub mod layer;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use command::Command;
pub use config::CanvasConfig;
pub use document::Document;
pub use editor::Editor;
pub use element::{Element, Shape, ShapeStyle};
pub use error::{PaintError, PaintResult};
pub use crate::image::RasterImage;
pub use layer::Layer;
pub use renderer::Renderer;
pub use state::EditorState;
pub use stroke::StrokeStyle;
pub use surface::{RasterSurface, Surface};
pub use tools::{Tool, ToolSettings};
