//! The host-independent table model.
//!
//! Ties content, measurement, layout, panes, scroll state, and the drag
//! coordinator together behind one validated constructor. Everything here
//! runs natively; the wasm widget in `widget/` is a thin embedding of this
//! model.

use std::rc::Rc;

use crate::error::Result;
use crate::layout::measure::{measure_grid, MeasuredGrid, SizeTable};
use crate::layout::panes::{FrozenSpec, Pane, PaneGrid};
use crate::layout::table_layout::TableLayout;
use crate::layout::viewport::Viewport;
use crate::render::backend::{RenderBackend, TextMeasurer};
use crate::render::grid::{render_table, GridRenderParams};
use crate::scroll::fling::{DragScrollConfig, DragScrollCoordinator};
use crate::scroll::scheduler::FrameScheduler;
use crate::scroll::state::SharedScroll;
use crate::types::content::TableContent;
use crate::types::style::{AlignmentFn, BackgroundFn, TableStyle};

/// Construction parameters. Every field has a usable default; hosts override
/// what they need.
#[derive(Default)]
pub struct TableParams {
    pub frozen: FrozenSpec,
    pub style: TableStyle,
    /// Externally owned horizontal scroll handle; a fresh one when `None`.
    pub horizontal: Option<SharedScroll>,
    /// Externally owned vertical scroll handle; a fresh one when `None`.
    pub vertical: Option<SharedScroll>,
    pub drag_scroll: DragScrollConfig,
}

/// One measurement pass's derived state, replaced wholesale when content
/// changes.
struct Measured {
    grid: MeasuredGrid,
    layout: TableLayout,
    panes: PaneGrid,
}

/// Adapter: measure through a render backend without requiring trait
/// upcasting.
struct MeasureVia<'a>(&'a mut dyn RenderBackend);

impl TextMeasurer for MeasureVia<'_> {
    fn text_width(&mut self, text: &str, font: &str) -> f32 {
        self.0.text_width(text, font)
    }
}

/// An auto-sizing frozen-pane table.
pub struct Table {
    content: TableContent,
    frozen: FrozenSpec,
    style: TableStyle,
    horizontal: SharedScroll,
    vertical: SharedScroll,
    coordinator: DragScrollCoordinator,
    viewport: Viewport,
    measured: Option<Measured>,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("frozen", &self.frozen)
            .field("measured", &self.measured.is_some())
            .finish_non_exhaustive()
    }
}

impl Table {
    /// Validate and assemble a table.
    ///
    /// # Errors
    /// `EmptyContent`/`RaggedRows` are caught earlier by
    /// [`TableContent::new`]; this reports `FrozenOutOfRange` and `Config`.
    pub fn new(
        content: TableContent,
        params: TableParams,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Result<Self> {
        params
            .frozen
            .validate(content.row_count(), content.column_count())?;
        let horizontal = params.horizontal.unwrap_or_default();
        let vertical = params.vertical.unwrap_or_default();
        let coordinator = DragScrollCoordinator::new(
            horizontal.clone(),
            vertical.clone(),
            params.drag_scroll,
            scheduler,
        )?;
        Ok(Self {
            content,
            frozen: params.frozen,
            style: params.style,
            horizontal,
            vertical,
            coordinator,
            viewport: Viewport::new(),
            measured: None,
        })
    }

    #[must_use]
    pub fn content(&self) -> &TableContent {
        &self.content
    }

    /// Replace the grid content. Sizes are recomputed on the next
    /// measurement pass.
    ///
    /// # Errors
    /// `FrozenOutOfRange` if the current frozen spec exceeds the new grid.
    pub fn set_content(&mut self, content: TableContent) -> Result<()> {
        self.frozen
            .validate(content.row_count(), content.column_count())?;
        self.content = content;
        self.invalidate();
        Ok(())
    }

    /// Drop the measured state; the next pass re-measures every cell.
    /// Call after mutating cell content in place.
    pub fn invalidate(&mut self) {
        self.measured = None;
    }

    #[must_use]
    pub fn frozen(&self) -> FrozenSpec {
        self.frozen
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Resize the logical viewport and re-clamp the scroll offsets.
    pub fn set_viewport(&mut self, width: f32, height: f32, dpr: f32) {
        self.viewport.resize(width, height, dpr);
        self.update_scroll_extents();
    }

    /// Run the measurement pass if content changed since the last one.
    pub fn ensure_measured(&mut self, text: &mut dyn TextMeasurer) {
        if self.measured.is_some() {
            return;
        }
        let grid = measure_grid(&self.content, text);
        let layout = TableLayout::new(grid.size_table(), self.frozen.rows, self.frozen.cols);
        let panes = PaneGrid::partition(&layout, &self.horizontal, &self.vertical);
        self.measured = Some(Measured {
            grid,
            layout,
            panes,
        });
        self.update_scroll_extents();
    }

    fn update_scroll_extents(&self) {
        if let Some(m) = &self.measured {
            self.horizontal.set_extents(
                m.layout.scrollable_width(),
                self.viewport.scrollable_viewport_width(&m.layout),
            );
            self.vertical.set_extents(
                m.layout.scrollable_height(),
                self.viewport.scrollable_viewport_height(&m.layout),
            );
        }
    }

    #[must_use]
    pub fn layout(&self) -> Option<&TableLayout> {
        self.measured.as_ref().map(|m| &m.layout)
    }

    #[must_use]
    pub fn size_table(&self) -> Option<&SizeTable> {
        self.measured.as_ref().map(|m| m.grid.size_table())
    }

    #[must_use]
    pub fn panes(&self) -> Option<&PaneGrid> {
        self.measured.as_ref().map(|m| &m.panes)
    }

    #[must_use]
    pub fn horizontal(&self) -> &SharedScroll {
        &self.horizontal
    }

    #[must_use]
    pub fn vertical(&self) -> &SharedScroll {
        &self.vertical
    }

    #[must_use]
    pub fn coordinator(&self) -> &DragScrollCoordinator {
        &self.coordinator
    }

    pub fn set_background(&mut self, background: BackgroundFn) {
        self.style.background = background;
    }

    pub fn set_alignment(&mut self, alignment: AlignmentFn) {
        self.style.alignment = alignment;
    }

    /// Measure (if needed) and paint one frame.
    ///
    /// # Errors
    /// Backend drawing failures.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> Result<()> {
        self.ensure_measured(&mut MeasureVia(&mut *backend));
        let Some(m) = &self.measured else {
            return Ok(());
        };
        render_table(
            backend,
            &GridRenderParams {
                content: &self.content,
                measured: &m.grid,
                layout: &m.layout,
                panes: &m.panes,
                viewport: &self.viewport,
                style: &self.style,
            },
        )
    }

    /// The pane under a screen point. Requires a completed measurement pass.
    #[must_use]
    pub fn pane_at(&self, x: f32, y: f32) -> Option<&Pane> {
        let m = self.measured.as_ref()?;
        m.panes
            .pane_at(&m.layout, self.viewport.width, self.viewport.height, x, y)
    }

    /// The cell under a screen point, across frozen and scrollable panes.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let m = self.measured.as_ref()?;
        let pane = self.pane_at(x, y)?;
        let col = m.layout.col_at_x(x + pane.horizontal_offset())?;
        let row = m.layout.row_at_y(y + pane.vertical_offset())?;
        pane.contains_cell(row, col).then_some((row, col))
    }

    /// Begin a drag at a screen point. Returns false (and starts nothing)
    /// when the point is outside every drag-accepting pane.
    pub fn drag_start_at(&self, x: f32, y: f32) -> bool {
        match self.pane_at(x, y) {
            Some(pane) if pane.accepts_drag() => {
                self.coordinator.on_drag_start();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn scroll_x(&self) -> f32 {
        self.horizontal.offset()
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.vertical.offset()
    }

    /// Programmatic scroll, clamped to content bounds.
    pub fn set_scroll(&self, x: f32, y: f32) {
        self.horizontal.set_offset(x);
        self.vertical.set_offset(y);
    }
}
