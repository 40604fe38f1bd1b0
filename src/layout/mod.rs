//! Measurement, pixel geometry, pane partition, and viewport state.

pub mod measure;
pub mod panes;
pub mod table_layout;
pub mod viewport;

pub use measure::{measure_grid, MeasuredGrid, SizeTable};
pub use panes::{FrozenSpec, Pane, PaneGrid, PaneId};
pub use table_layout::{CellRect, TableLayout};
pub use viewport::Viewport;
