//! CLI tool for autotable - measures a sample grid and outputs the layout as JSON
//!
//! Usage:
//!   autotable_cli [rows cols]                  # Layout report to stdout (default 30x20)
//!   autotable_cli [rows cols] --frozen R C     # Frozen spec (default 1 1)
//!   autotable_cli [rows cols] --fling DX DY    # Also simulate a drag+fling
//!   autotable_cli ... -o out.json              # Output to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;

use serde::Serialize;

use autotable::layout::FrozenSpec;
use autotable::render::backend::TextMeasurer;
use autotable::scroll::ManualScheduler;
use autotable::table::{Table, TableParams};
use autotable::types::TableContent;

/// Monospace stand-in for canvas text metrics: a fixed advance per glyph.
struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn text_width(&mut self, text: &str, font: &str) -> f32 {
        let font_px: f32 = font
            .split("px")
            .next()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(14.0);
        text.chars().count() as f32 * font_px * 0.6
    }
}

#[derive(Serialize)]
struct PaneReport {
    pane: String,
    rows: (usize, usize),
    cols: (usize, usize),
    cells: usize,
    accepts_drag: bool,
}

#[derive(Serialize)]
struct FlingReport {
    frames: usize,
    scroll_x: f32,
    scroll_y: f32,
}

#[derive(Serialize)]
struct LayoutReport {
    rows: usize,
    cols: usize,
    frozen_rows: usize,
    frozen_cols: usize,
    col_widths: Vec<f32>,
    row_heights: Vec<f32>,
    total_width: f32,
    total_height: f32,
    panes: Vec<PaneReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fling: Option<FlingReport>,
}

/// The demo grid: numbered cells, multi-line everywhere but the header row.
fn sample_content(rows: usize, cols: usize) -> TableContent {
    let cells = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    if row == 0 {
                        format!("col {col}")
                    } else {
                        format!("rowId: {row}\ncolumnId: {col}")
                    }
                })
                .collect()
        })
        .collect();
    TableContent::from_text::<String>(cells).expect("sample grid is rectangular")
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut rows = 30usize;
    let mut cols = 20usize;
    let mut frozen = FrozenSpec::default();
    let mut fling: Option<(f32, f32)> = None;
    let mut output_path: Option<String> = None;

    let mut positional = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frozen" => {
                frozen = FrozenSpec::new(
                    args[i + 1].parse().expect("frozen rows"),
                    args[i + 2].parse().expect("frozen cols"),
                );
                i += 3;
            }
            "--fling" => {
                fling = Some((
                    args[i + 1].parse().expect("fling dx"),
                    args[i + 2].parse().expect("fling dy"),
                ));
                i += 3;
            }
            "-o" => {
                output_path = Some(args[i + 1].clone());
                i += 2;
            }
            arg => {
                positional.push(arg.to_string());
                i += 1;
            }
        }
    }
    if positional.len() >= 2 {
        rows = positional[0].parse().expect("rows");
        cols = positional[1].parse().expect("cols");
    }

    let scheduler = Rc::new(ManualScheduler::new());
    let mut table = match Table::new(
        sample_content(rows, cols),
        TableParams {
            frozen,
            ..TableParams::default()
        },
        Rc::clone(&scheduler) as Rc<dyn autotable::scroll::FrameScheduler>,
    ) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error building table: {e}");
            std::process::exit(1);
        }
    };

    table.ensure_measured(&mut MonoMeasurer);

    let fling_report = fling.map(|(dx, dy)| {
        let coordinator = table.coordinator();
        coordinator.on_drag_start();
        coordinator.on_drag(dx, dy);
        coordinator.on_drag_end();
        let frames = scheduler.run_all();
        FlingReport {
            frames,
            scroll_x: table.scroll_x(),
            scroll_y: table.scroll_y(),
        }
    });

    let layout = table.layout().expect("measured above");
    let sizes = table.size_table().expect("measured above");
    let panes = table.panes().expect("measured above");

    let report = LayoutReport {
        rows,
        cols,
        frozen_rows: frozen.rows,
        frozen_cols: frozen.cols,
        col_widths: sizes.col_widths().to_vec(),
        row_heights: sizes.row_heights().to_vec(),
        total_width: layout.total_width(),
        total_height: layout.total_height(),
        panes: panes
            .panes()
            .iter()
            .map(|p| PaneReport {
                pane: format!("{:?}", p.id()),
                rows: (p.rows().start, p.rows().end),
                cols: (p.cols().start, p.cols().end),
                cells: p.cell_count(),
                accepts_drag: p.accepts_drag(),
            })
            .collect(),
        fling: fling_report,
    };

    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {e}");
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
