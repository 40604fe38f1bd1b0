//! Rendering: backend traits, the four-pane grid painter, and the Canvas 2D
//! backend (wasm32).

pub mod backend;
pub mod grid;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use backend::{RenderBackend, TextMeasurer};
pub use grid::{render_table, GridRenderParams};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasBackend;
