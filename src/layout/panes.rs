//! The four-pane partition of a frozen-pane table.
//!
//! Intersecting frozen/scrollable rows with frozen/scrollable columns yields
//! up to four rectangular panes. Panes that share an axis hold the *same*
//! scroll handle, so every pane bound to an axis always displays the
//! identical offset for it: the synchronization is structural, not
//! event-driven.
//!
//! | | frozen cols | scrollable cols |
//! |---|---|---|
//! | frozen rows | `TopStart` (never scrolls) | `Top` (horizontal only) |
//! | scrollable rows | `Start` (vertical only) | `Body` (both axes) |

use std::ops::Range;

use crate::error::{FrozenAxis, Result, TableError};
use crate::layout::table_layout::{CellRect, TableLayout};
use crate::scroll::state::SharedScroll;

/// How many leading rows/columns stay anchored while the rest scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrozenSpec {
    /// Frozen header rows at the top.
    pub rows: usize,
    /// Frozen columns at the start.
    pub cols: usize,
}

impl Default for FrozenSpec {
    fn default() -> Self {
        Self { rows: 1, cols: 1 }
    }
}

impl FrozenSpec {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// # Errors
    /// `FrozenOutOfRange` when either count exceeds the grid dimension.
    pub fn validate(&self, row_count: usize, column_count: usize) -> Result<()> {
        if self.rows > row_count {
            return Err(TableError::FrozenOutOfRange {
                axis: FrozenAxis::Rows,
                requested: self.rows,
                available: row_count,
            });
        }
        if self.cols > column_count {
            return Err(TableError::FrozenOutOfRange {
                axis: FrozenAxis::Cols,
                requested: self.cols,
                available: column_count,
            });
        }
        Ok(())
    }
}

/// Identifies one of the four panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneId {
    /// Frozen rows and frozen columns: never scrolls.
    TopStart,
    /// Frozen rows over scrollable columns: horizontal axis only.
    Top,
    /// Scrollable rows over frozen columns: vertical axis only.
    Start,
    /// Scrollable rows and scrollable columns: both axes.
    Body,
}

/// One rectangular sub-region of the grid with its axis bindings.
#[derive(Debug, Clone)]
pub struct Pane {
    id: PaneId,
    rows: Range<usize>,
    cols: Range<usize>,
    horizontal: Option<SharedScroll>,
    vertical: Option<SharedScroll>,
}

impl Pane {
    #[must_use]
    pub fn id(&self) -> PaneId {
        self.id
    }

    #[must_use]
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    #[must_use]
    pub fn cols(&self) -> Range<usize> {
        self.cols.clone()
    }

    /// Handle to the horizontal axis, if this pane scrolls horizontally.
    #[must_use]
    pub fn horizontal(&self) -> Option<&SharedScroll> {
        self.horizontal.as_ref()
    }

    /// Handle to the vertical axis, if this pane scrolls vertically.
    #[must_use]
    pub fn vertical(&self) -> Option<&SharedScroll> {
        self.vertical.as_ref()
    }

    /// The horizontal offset this pane currently displays (0 when unbound).
    #[must_use]
    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal.as_ref().map_or(0.0, SharedScroll::offset)
    }

    /// The vertical offset this pane currently displays (0 when unbound).
    #[must_use]
    pub fn vertical_offset(&self) -> f32 {
        self.vertical.as_ref().map_or(0.0, SharedScroll::offset)
    }

    /// Whether drags landing on this pane are forwarded to the coordinator:
    /// any pane owning at least one free axis accepts; the fully frozen
    /// corner does not.
    #[must_use]
    pub fn accepts_drag(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }

    /// The frozen strips are driven by a shared offset but must not render
    /// their own overscroll indication: the body pane already shows it.
    #[must_use]
    pub fn edge_effects_suppressed(&self) -> bool {
        matches!(self.id, PaneId::Top | PaneId::Start)
    }

    #[must_use]
    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// This pane's clip rectangle in screen coordinates for the given
    /// viewport size.
    #[must_use]
    pub fn screen_rect(
        &self,
        layout: &TableLayout,
        viewport_width: f32,
        viewport_height: f32,
    ) -> CellRect {
        let frozen_w = layout.frozen_cols_width();
        let frozen_h = layout.frozen_rows_height();
        let (x, width) = match self.id {
            PaneId::TopStart | PaneId::Start => (0.0, frozen_w.min(viewport_width)),
            PaneId::Top | PaneId::Body => (frozen_w, (viewport_width - frozen_w).max(0.0)),
        };
        let (y, height) = match self.id {
            PaneId::TopStart | PaneId::Top => (0.0, frozen_h.min(viewport_height)),
            PaneId::Start | PaneId::Body => (frozen_h, (viewport_height - frozen_h).max(0.0)),
        };
        CellRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// The non-empty panes of a partition, in paint order (body first).
#[derive(Debug, Clone)]
pub struct PaneGrid {
    panes: Vec<Pane>,
}

impl PaneGrid {
    /// Partition the grid described by `layout`, binding scrollable axes to
    /// the two shared handles.
    ///
    /// Empty panes are omitted: with nothing frozen only `Body` exists and
    /// carries both bindings directly.
    #[must_use]
    pub fn partition(
        layout: &TableLayout,
        horizontal: &SharedScroll,
        vertical: &SharedScroll,
    ) -> Self {
        let rows = layout.row_count();
        let cols = layout.column_count();
        let frozen_rows = layout.frozen_rows().min(rows);
        let frozen_cols = layout.frozen_cols().min(cols);

        let mut panes = Vec::with_capacity(4);

        if frozen_rows < rows && frozen_cols < cols {
            panes.push(Pane {
                id: PaneId::Body,
                rows: frozen_rows..rows,
                cols: frozen_cols..cols,
                horizontal: Some(horizontal.clone()),
                vertical: Some(vertical.clone()),
            });
        }
        if frozen_rows > 0 && frozen_cols < cols {
            panes.push(Pane {
                id: PaneId::Top,
                rows: 0..frozen_rows,
                cols: frozen_cols..cols,
                horizontal: Some(horizontal.clone()),
                vertical: None,
            });
        }
        if frozen_rows < rows && frozen_cols > 0 {
            panes.push(Pane {
                id: PaneId::Start,
                rows: frozen_rows..rows,
                cols: 0..frozen_cols,
                horizontal: None,
                vertical: Some(vertical.clone()),
            });
        }
        if frozen_rows > 0 && frozen_cols > 0 {
            panes.push(Pane {
                id: PaneId::TopStart,
                rows: 0..frozen_rows,
                cols: 0..frozen_cols,
                horizontal: None,
                vertical: None,
            });
        }

        Self { panes }
    }

    /// Panes in paint order: body first, frozen strips above it, corner last.
    #[must_use]
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    #[must_use]
    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id == id)
    }

    /// The pane whose screen rectangle contains `(x, y)`, if any.
    #[must_use]
    pub fn pane_at(
        &self,
        layout: &TableLayout,
        viewport_width: f32,
        viewport_height: f32,
        x: f32,
        y: f32,
    ) -> Option<&Pane> {
        self.panes.iter().find(|pane| {
            let rect = pane.screen_rect(layout, viewport_width, viewport_height);
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        })
    }
}
