//! Core data types shared across layout, rendering, and the widget surface.

pub mod content;
pub mod style;

pub use content::{CellRenderer, CellSize, TableContent, TextCell, TextStyle};
pub use style::{Alignment, AlignmentFn, BackgroundFn, Color, TableStyle};
