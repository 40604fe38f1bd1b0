//! Structured error types for autotable.
//!
//! Construction-time validation failures are caller errors and are reported
//! synchronously with the expected vs. actual dimensions; there is no
//! recovery path for them.

/// Axis named in an out-of-range frozen spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrozenAxis {
    /// Frozen rows at the top.
    Rows,
    /// Frozen columns at the start.
    Cols,
}

impl std::fmt::Display for FrozenAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rows => write!(f, "rows"),
            Self::Cols => write!(f, "cols"),
        }
    }
}

/// All errors that can occur in autotable construction and rendering.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Content had no rows or a row of length zero.
    #[error("table content must not be empty")]
    EmptyContent,

    /// Rows of unequal length.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Frozen spec exceeds the grid dimensions.
    #[error("frozen {axis} ({requested}) must not exceed the grid's {axis} ({available})")]
    FrozenOutOfRange {
        axis: FrozenAxis,
        requested: usize,
        available: usize,
    },

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Rendering error.
    #[error("render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(target_arch = "wasm32")]
impl From<TableError> for wasm_bindgen::JsValue {
    fn from(e: TableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
