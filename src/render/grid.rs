//! Four-pane grid painting.
//!
//! Panes paint back-to-front (body, then the frozen strips, then the
//! corner), each clipped to its own screen rectangle. Within a pane, cells
//! in a bound axis are translated by the shared offset; frozen axes render
//! at their natural positions. The renderer culls cells outside the clip;
//! measurement and layout have already run over the full grid.

use crate::error::Result;
use crate::layout::measure::MeasuredGrid;
use crate::layout::panes::{Pane, PaneGrid};
use crate::layout::table_layout::TableLayout;
use crate::layout::viewport::Viewport;
use crate::render::backend::RenderBackend;
use crate::types::content::TableContent;
use crate::types::style::TableStyle;

/// Divider color on the frozen-pane boundaries, as in desktop spreadsheets.
const DIVIDER_COLOR: &str = "#BABABA";

/// Everything one frame needs, borrowed from the table model.
pub struct GridRenderParams<'a> {
    pub content: &'a TableContent,
    pub measured: &'a MeasuredGrid,
    pub layout: &'a TableLayout,
    pub panes: &'a PaneGrid,
    pub viewport: &'a Viewport,
    pub style: &'a TableStyle,
}

/// Crisp pixel position for 1px lines.
fn crisp(x: f32) -> f32 {
    x.floor() + 0.5
}

/// Paint the whole table for the current scroll offsets.
pub fn render_table(backend: &mut dyn RenderBackend, params: &GridRenderParams<'_>) -> Result<()> {
    backend.clear()?;

    for pane in params.panes.panes() {
        render_pane(backend, params, pane)?;
    }

    render_dividers(backend, params)?;
    Ok(())
}

fn render_pane(
    backend: &mut dyn RenderBackend,
    params: &GridRenderParams<'_>,
    pane: &Pane,
) -> Result<()> {
    let layout = params.layout;
    let viewport = params.viewport;

    let clip = pane.screen_rect(layout, viewport.width, viewport.height);
    if clip.width <= 0.0 || clip.height <= 0.0 {
        return Ok(());
    }

    let h_offset = pane.horizontal_offset();
    let v_offset = pane.vertical_offset();

    // Visible subrange: cull along bound axes, take the whole strip on
    // frozen ones (the clip bounds what actually paints).
    let (row_start, row_end) = match (pane.vertical(), viewport.visible_scrollable_rows(layout, v_offset)) {
        (Some(_), Some((start, end))) => (
            start.max(pane.rows().start),
            end.min(pane.rows().end.saturating_sub(1)),
        ),
        _ => (pane.rows().start, pane.rows().end.saturating_sub(1)),
    };
    let (col_start, col_end) = match (pane.horizontal(), viewport.visible_scrollable_cols(layout, h_offset)) {
        (Some(_), Some((start, end))) => (
            start.max(pane.cols().start),
            end.min(pane.cols().end.saturating_sub(1)),
        ),
        _ => (pane.cols().start, pane.cols().end.saturating_sub(1)),
    };
    if row_start > row_end || col_start > col_end {
        return Ok(());
    }

    backend.push_clip(clip.x, clip.y, clip.width, clip.height)?;

    for row in row_start..=row_end {
        for col in col_start..=col_end {
            let rect = layout.cell_rect(row, col);
            let x = rect.x - h_offset;
            let y = rect.y - v_offset;

            if let Some(color) = (params.style.background)(row, col) {
                backend.fill_rect(x, y, rect.width, rect.height, &color)?;
            }

            if let Some(cell) = params.content.cell(row, col) {
                let natural = params.measured.cell_size(row, col);
                let (dx, dy) = (params.style.alignment)(row, col).place(
                    natural.width,
                    natural.height,
                    rect.width,
                    rect.height,
                );
                cell.draw(backend, x + dx, y + dy)?;
            }

            backend.stroke_rect(
                x,
                y,
                rect.width,
                rect.height,
                &params.style.outline_color,
                params.style.outline_width,
            )?;
        }
    }

    backend.pop_clip()?;
    Ok(())
}

/// Divider lines on the frozen-pane boundaries, limited to the content
/// bounds so they do not run past the grid.
fn render_dividers(backend: &mut dyn RenderBackend, params: &GridRenderParams<'_>) -> Result<()> {
    let layout = params.layout;
    let viewport = params.viewport;
    if layout.frozen_rows() == 0 && layout.frozen_cols() == 0 {
        return Ok(());
    }

    let divider = crate::types::style::Color::new(DIVIDER_COLOR);
    let width = layout.total_width().min(viewport.width);
    let height = layout.total_height().min(viewport.height);

    if layout.frozen_rows() > 0 {
        let y = crisp(layout.frozen_rows_height());
        backend.stroke_line(0.0, y, width, y, &divider, 1.0)?;
    }
    if layout.frozen_cols() > 0 {
        let x = crisp(layout.frozen_cols_width());
        backend.stroke_line(x, 0.0, x, height, &divider, 1.0)?;
    }
    Ok(())
}
