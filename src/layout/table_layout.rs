//! Pre-computed pixel geometry for a measured table.
//!
//! Positions are computed once per measurement pass, enabling O(log n)
//! position-to-index lookups for hit testing and visible-range computation.

use crate::layout::measure::SizeTable;

/// Rectangle for a cell's bounds, in table (content) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Cumulative pixel geometry derived from a [`SizeTable`] and a frozen spec.
#[derive(Debug, Clone)]
pub struct TableLayout {
    /// `col_positions[i]` = x of column i's left edge; one extra final edge.
    col_positions: Vec<f32>,
    /// `row_positions[i]` = y of row i's top edge; one extra final edge.
    row_positions: Vec<f32>,
    frozen_rows: usize,
    frozen_cols: usize,
}

impl TableLayout {
    /// Build the cumulative geometry. The frozen counts are assumed validated
    /// against the grid dimensions by the caller.
    #[must_use]
    pub fn new(sizes: &SizeTable, frozen_rows: usize, frozen_cols: usize) -> Self {
        let mut col_positions = Vec::with_capacity(sizes.column_count() + 1);
        let mut x = 0.0f32;
        for width in sizes.col_widths() {
            col_positions.push(x);
            x += width;
        }
        col_positions.push(x); // Final edge

        let mut row_positions = Vec::with_capacity(sizes.row_count() + 1);
        let mut y = 0.0f32;
        for height in sizes.row_heights() {
            row_positions.push(y);
            y += height;
        }
        row_positions.push(y); // Final edge

        Self {
            col_positions,
            row_positions,
            frozen_rows,
            frozen_cols,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_positions.len().saturating_sub(1)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.col_positions.len().saturating_sub(1)
    }

    #[must_use]
    pub fn frozen_rows(&self) -> usize {
        self.frozen_rows
    }

    #[must_use]
    pub fn frozen_cols(&self) -> usize {
        self.frozen_cols
    }

    /// Cell bounds in table coordinates.
    #[must_use]
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        let x = self.col_positions.get(col).copied().unwrap_or(0.0);
        let y = self.row_positions.get(row).copied().unwrap_or(0.0);
        let x1 = self.col_positions.get(col + 1).copied().unwrap_or(x);
        let y1 = self.row_positions.get(row + 1).copied().unwrap_or(y);
        CellRect {
            x,
            y,
            width: x1 - x,
            height: y1 - y,
        }
    }

    /// Find the row containing table-coordinate `y` (binary search).
    #[must_use]
    pub fn row_at_y(&self, y: f32) -> Option<usize> {
        Self::index_at(&self.row_positions, y)
    }

    /// Find the column containing table-coordinate `x` (binary search).
    #[must_use]
    pub fn col_at_x(&self, x: f32) -> Option<usize> {
        Self::index_at(&self.col_positions, x)
    }

    fn index_at(positions: &[f32], pos: f32) -> Option<usize> {
        let count = positions.len().checked_sub(1)?;
        let total = positions.last().copied().unwrap_or(0.0);
        if pos < 0.0 || pos >= total {
            return None;
        }
        match positions
            .binary_search_by(|edge| edge.partial_cmp(&pos).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => (i < count).then_some(i),
            Err(i) => Some(i.saturating_sub(1)),
        }
    }

    /// Total content width.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    /// Total content height.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.row_positions.last().copied().unwrap_or(0.0)
    }

    /// Total height of the frozen top rows (0 if none).
    #[must_use]
    pub fn frozen_rows_height(&self) -> f32 {
        self.row_positions
            .get(self.frozen_rows)
            .copied()
            .unwrap_or(0.0)
    }

    /// Total width of the frozen start columns (0 if none).
    #[must_use]
    pub fn frozen_cols_width(&self) -> f32 {
        self.col_positions
            .get(self.frozen_cols)
            .copied()
            .unwrap_or(0.0)
    }

    /// Width of the horizontally scrollable region.
    #[must_use]
    pub fn scrollable_width(&self) -> f32 {
        self.total_width() - self.frozen_cols_width()
    }

    /// Height of the vertically scrollable region.
    #[must_use]
    pub fn scrollable_height(&self) -> f32 {
        self.total_height() - self.frozen_rows_height()
    }
}
