//! Pane partition tests
//!
//! For every valid frozen spec the four panes' cell sets must be pairwise
//! disjoint and cover the grid exactly once; panes sharing an axis must hold
//! the same scroll handle; only panes owning a free axis accept drags.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use autotable::layout::{measure_grid, PaneGrid, PaneId, TableLayout};
use autotable::scroll::SharedScroll;
use common::{fixed_grid, MonoMeasurer};

fn partitioned(
    rows: usize,
    cols: usize,
    frozen_rows: usize,
    frozen_cols: usize,
) -> (TableLayout, PaneGrid) {
    let content = fixed_grid(rows, cols, 40.0, 16.0);
    let measured = measure_grid(&content, &mut MonoMeasurer);
    let layout = TableLayout::new(measured.size_table(), frozen_rows, frozen_cols);
    let panes = PaneGrid::partition(&layout, &SharedScroll::new(), &SharedScroll::new());
    (layout, panes)
}

// =============================================================================
// PARTITION COMPLETENESS
// =============================================================================

#[test]
fn test_partition_covers_grid_exactly_once_for_all_specs() {
    let (rows, cols) = (5, 4);
    for frozen_rows in 0..=rows {
        for frozen_cols in 0..=cols {
            let (_, panes) = partitioned(rows, cols, frozen_rows, frozen_cols);

            let mut coverage = vec![vec![0usize; cols]; rows];
            for pane in panes.panes() {
                for row in pane.rows() {
                    for col in pane.cols() {
                        coverage[row][col] += 1;
                    }
                }
            }
            for (row, row_coverage) in coverage.iter().enumerate() {
                for (col, count) in row_coverage.iter().enumerate() {
                    assert_eq!(
                        *count, 1,
                        "cell ({row}, {col}) covered {count} times for spec ({frozen_rows}, {frozen_cols})"
                    );
                }
            }

            let total: usize = panes.panes().iter().map(|p| p.cell_count()).sum();
            assert_eq!(total, rows * cols, "spec ({frozen_rows}, {frozen_cols})");
        }
    }
}

#[test]
fn test_degenerate_spec_yields_body_only() {
    let (_, panes) = partitioned(5, 4, 0, 0);
    assert_eq!(panes.panes().len(), 1);

    let body = panes.pane(PaneId::Body).unwrap();
    assert_eq!(body.rows(), 0..5);
    assert_eq!(body.cols(), 0..4);
    assert!(body.horizontal().is_some());
    assert!(body.vertical().is_some());
    assert!(body.accepts_drag());
}

#[test]
fn test_fully_frozen_grid_has_no_scrollable_pane() {
    let (_, panes) = partitioned(3, 3, 3, 3);
    assert_eq!(panes.panes().len(), 1);

    let corner = panes.pane(PaneId::TopStart).unwrap();
    assert_eq!(corner.cell_count(), 9);
    assert!(!corner.accepts_drag());
}

#[test]
fn test_row_only_and_col_only_specs() {
    let (_, panes) = partitioned(5, 4, 2, 0);
    assert_eq!(panes.panes().len(), 2);
    assert!(panes.pane(PaneId::Top).is_some());
    assert!(panes.pane(PaneId::Body).is_some());
    assert!(panes.pane(PaneId::Start).is_none());
    assert!(panes.pane(PaneId::TopStart).is_none());

    let (_, panes) = partitioned(5, 4, 0, 2);
    assert_eq!(panes.panes().len(), 2);
    assert!(panes.pane(PaneId::Start).is_some());
    assert!(panes.pane(PaneId::Body).is_some());
    assert!(panes.pane(PaneId::Top).is_none());
}

// =============================================================================
// AXIS BINDINGS
// =============================================================================

#[test]
fn test_axis_bindings_per_pane() {
    let (_, panes) = partitioned(5, 4, 1, 2);

    let corner = panes.pane(PaneId::TopStart).unwrap();
    assert!(corner.horizontal().is_none());
    assert!(corner.vertical().is_none());

    let top = panes.pane(PaneId::Top).unwrap();
    assert!(top.horizontal().is_some());
    assert!(top.vertical().is_none());

    let start = panes.pane(PaneId::Start).unwrap();
    assert!(start.horizontal().is_none());
    assert!(start.vertical().is_some());

    let body = panes.pane(PaneId::Body).unwrap();
    assert!(body.horizontal().is_some());
    assert!(body.vertical().is_some());

    assert!(top
        .horizontal()
        .unwrap()
        .same_state(body.horizontal().unwrap()));
    assert!(start.vertical().unwrap().same_state(body.vertical().unwrap()));
}

#[test]
fn test_edge_effect_suppression_on_frozen_strips() {
    let (_, panes) = partitioned(5, 4, 1, 1);
    assert!(panes.pane(PaneId::Top).unwrap().edge_effects_suppressed());
    assert!(panes.pane(PaneId::Start).unwrap().edge_effects_suppressed());
    assert!(!panes.pane(PaneId::Body).unwrap().edge_effects_suppressed());
    assert!(!panes
        .pane(PaneId::TopStart)
        .unwrap()
        .edge_effects_suppressed());
}

// =============================================================================
// SCREEN GEOMETRY AND HIT LOOKUP
// =============================================================================

#[test]
fn test_pane_screen_rects_tile_the_viewport() {
    // 5 rows x 16px, 4 cols x 40px, frozen (1, 1): boundary at (40, 16).
    let (layout, panes) = partitioned(5, 4, 1, 1);
    let (vw, vh) = (300.0, 200.0);

    let corner = panes.pane(PaneId::TopStart).unwrap().screen_rect(&layout, vw, vh);
    assert_eq!((corner.x, corner.y, corner.width, corner.height), (0.0, 0.0, 40.0, 16.0));

    let top = panes.pane(PaneId::Top).unwrap().screen_rect(&layout, vw, vh);
    assert_eq!((top.x, top.y, top.width, top.height), (40.0, 0.0, 260.0, 16.0));

    let start = panes.pane(PaneId::Start).unwrap().screen_rect(&layout, vw, vh);
    assert_eq!((start.x, start.y, start.width, start.height), (0.0, 16.0, 40.0, 184.0));

    let body = panes.pane(PaneId::Body).unwrap().screen_rect(&layout, vw, vh);
    assert_eq!((body.x, body.y, body.width, body.height), (40.0, 16.0, 260.0, 184.0));
}

#[test]
fn test_pane_at_screen_points() {
    let (layout, panes) = partitioned(5, 4, 1, 1);
    let (vw, vh) = (300.0, 200.0);

    let at = |x, y| panes.pane_at(&layout, vw, vh, x, y).map(|p| p.id());
    assert_eq!(at(5.0, 5.0), Some(PaneId::TopStart));
    assert_eq!(at(100.0, 5.0), Some(PaneId::Top));
    assert_eq!(at(5.0, 100.0), Some(PaneId::Start));
    assert_eq!(at(100.0, 100.0), Some(PaneId::Body));
    // Boundary points belong to the pane on the far side.
    assert_eq!(at(40.0, 16.0), Some(PaneId::Body));
    assert_eq!(at(-1.0, 5.0), None);
    assert_eq!(at(301.0, 5.0), None);
}
