//! The auto-size measurement pass.
//!
//! Every cell is measured exactly once at unconstrained size; the shared
//! per-column width is the maximum measured width in that column, and the
//! shared per-row height the maximum measured height in that row. A single
//! oversized cell therefore expands its whole row and column, which is why
//! sampling is not an option. Frozen cells share the same size arrays as
//! scrollable ones: freezing is a placement concern, not a sizing concern.

use crate::render::backend::TextMeasurer;
use crate::types::{CellSize, TableContent};

/// Shared sizes per axis: one width per column, one height per row.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable {
    col_widths: Vec<f32>,
    row_heights: Vec<f32>,
}

impl SizeTable {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Width of column `col` (0 if out of range).
    #[must_use]
    pub fn col_width(&self, col: usize) -> f32 {
        self.col_widths.get(col).copied().unwrap_or(0.0)
    }

    /// Height of row `row` (0 if out of range).
    #[must_use]
    pub fn row_height(&self, row: usize) -> f32 {
        self.row_heights.get(row).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn col_widths(&self) -> &[f32] {
        &self.col_widths
    }

    #[must_use]
    pub fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }
}

/// Result of one measurement pass: each cell's own natural size (kept for
/// later content alignment) plus the derived shared [`SizeTable`].
#[derive(Debug, Clone)]
pub struct MeasuredGrid {
    cell_sizes: Vec<Vec<CellSize>>,
    size_table: SizeTable,
}

impl MeasuredGrid {
    #[must_use]
    pub fn size_table(&self) -> &SizeTable {
        &self.size_table
    }

    /// The natural size measured for the cell at `(row, col)`.
    #[must_use]
    pub fn cell_size(&self, row: usize, col: usize) -> CellSize {
        self.cell_sizes
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }
}

/// Measure every cell of `content` once and derive the shared sizes.
pub fn measure_grid(content: &TableContent, text: &mut dyn TextMeasurer) -> MeasuredGrid {
    let mut col_widths = vec![0.0f32; content.column_count()];
    let mut row_heights = vec![0.0f32; content.row_count()];

    let mut cell_sizes = Vec::with_capacity(content.row_count());
    for (row, cells) in content.iter_rows().enumerate() {
        let mut sizes = Vec::with_capacity(cells.len());
        for (col, cell) in cells.iter().enumerate() {
            let size = cell.natural_size(text);
            if let Some(width) = col_widths.get_mut(col) {
                *width = width.max(size.width);
            }
            if let Some(height) = row_heights.get_mut(row) {
                *height = height.max(size.height);
            }
            sizes.push(size);
        }
        cell_sizes.push(sizes);
    }

    MeasuredGrid {
        cell_sizes,
        size_table: SizeTable {
            col_widths,
            row_heights,
        },
    }
}
