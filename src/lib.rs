//! autotable - auto-sizing table widget for the web
//!
//! Measures every cell once, derives shared per-column/per-row sizes, and
//! renders a four-pane frozen grid via WebAssembly and Canvas 2D:
//! - Auto-sized columns and rows from variable-sized cell content
//! - Frozen header rows and start columns, scroll-synchronized with the body
//! - 2D drag scrolling with inertial fling in any direction
//! - Host-ownable scroll state and per-cell background/alignment policies
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableView } from 'autotable';
//! await init();
//! const view = new TableView(canvas, {
//!   cells: rows,             // [[{text}, …], …]
//!   fixedTopSize: 1,
//!   fixedStartSize: 1,
//! });
//! view.render();
//! ```
//!
//! The measurement/layout/fling core is host-independent and runs natively;
//! see [`table::Table`].

pub mod error;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod table;
pub mod types;
pub mod widget;

use wasm_bindgen::prelude::*;

pub use error::{Result, TableError};
pub use table::{Table, TableParams};

#[cfg(target_arch = "wasm32")]
pub use widget::TableView;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
