//! Viewport state: the visible area of the table.
//!
//! Scroll offsets are owned by the shared scroll states (`scroll::state`),
//! zero-based over the scrollable region; the viewport only knows its own
//! logical size and turns offsets into visible index ranges.

use crate::layout::table_layout::TableLayout;

/// Logical viewport dimensions and device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
    /// Device pixel ratio of the backing surface.
    pub dpr: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            dpr: 1.0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
    }

    /// Width left for the horizontally scrollable columns after the frozen
    /// strip.
    #[must_use]
    pub fn scrollable_viewport_width(&self, layout: &TableLayout) -> f32 {
        (self.width - layout.frozen_cols_width()).max(0.0)
    }

    /// Height left for the vertically scrollable rows after the frozen strip.
    #[must_use]
    pub fn scrollable_viewport_height(&self, layout: &TableLayout) -> f32 {
        (self.height - layout.frozen_rows_height()).max(0.0)
    }

    /// Inclusive range of scrollable columns visible at `h_offset`.
    /// `None` when every column is frozen.
    #[must_use]
    pub fn visible_scrollable_cols(
        &self,
        layout: &TableLayout,
        h_offset: f32,
    ) -> Option<(usize, usize)> {
        let first = layout.frozen_cols();
        let last = layout.column_count().checked_sub(1)?;
        if first > last {
            return None;
        }
        let x0 = layout.frozen_cols_width() + h_offset;
        let x1 = x0 + self.scrollable_viewport_width(layout);
        let start = layout.col_at_x(x0).unwrap_or(first).max(first);
        let end = layout.col_at_x(x1).unwrap_or(last).min(last);
        Some((start, end))
    }

    /// Inclusive range of scrollable rows visible at `v_offset`.
    /// `None` when every row is frozen.
    #[must_use]
    pub fn visible_scrollable_rows(
        &self,
        layout: &TableLayout,
        v_offset: f32,
    ) -> Option<(usize, usize)> {
        let first = layout.frozen_rows();
        let last = layout.row_count().checked_sub(1)?;
        if first > last {
            return None;
        }
        let y0 = layout.frozen_rows_height() + v_offset;
        let y1 = y0 + self.scrollable_viewport_height(layout);
        let start = layout.row_at_y(y0).unwrap_or(first).max(first);
        let end = layout.row_at_y(y1).unwrap_or(last).min(last);
        Some((start, end))
    }
}
