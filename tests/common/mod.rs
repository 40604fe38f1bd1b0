//! Common test utilities: deterministic measurers, a recording backend, and
//! table builders.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::Cell;
use std::rc::Rc;

use autotable::error::Result;
use autotable::layout::FrozenSpec;
use autotable::render::backend::{RenderBackend, TextMeasurer};
use autotable::scroll::{FrameScheduler, ManualScheduler};
use autotable::table::{Table, TableParams};
use autotable::types::{CellRenderer, CellSize, Color, TableContent};

/// Fixed advance per glyph, independent of font.
pub const MONO_CHAR_WIDTH: f32 = 8.0;

/// Deterministic monospace text measurer.
pub struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn text_width(&mut self, text: &str, _font: &str) -> f32 {
        text.chars().count() as f32 * MONO_CHAR_WIDTH
    }
}

/// A cell with a fixed natural size that draws nothing.
pub struct FixedCell {
    pub width: f32,
    pub height: f32,
}

impl FixedCell {
    pub fn boxed(width: f32, height: f32) -> Box<dyn CellRenderer> {
        Box::new(Self { width, height })
    }
}

impl CellRenderer for FixedCell {
    fn natural_size(&self, _text: &mut dyn TextMeasurer) -> CellSize {
        CellSize::new(self.width, self.height)
    }

    fn draw(&self, _backend: &mut dyn RenderBackend, _x: f32, _y: f32) -> Result<()> {
        Ok(())
    }
}

/// A fixed-size cell counting how often it is measured.
pub struct CountingCell {
    pub size: CellSize,
    pub measured: Rc<Cell<usize>>,
}

impl CellRenderer for CountingCell {
    fn natural_size(&self, _text: &mut dyn TextMeasurer) -> CellSize {
        self.measured.set(self.measured.get() + 1);
        self.size
    }

    fn draw(&self, _backend: &mut dyn RenderBackend, _x: f32, _y: f32) -> Result<()> {
        Ok(())
    }
}

/// A fixed-size cell that records every draw origin.
pub struct RecordingCell {
    pub size: CellSize,
    pub drawn_at: Rc<std::cell::RefCell<Vec<(f32, f32)>>>,
}

impl CellRenderer for RecordingCell {
    fn natural_size(&self, _text: &mut dyn TextMeasurer) -> CellSize {
        self.size
    }

    fn draw(&self, _backend: &mut dyn RenderBackend, x: f32, y: f32) -> Result<()> {
        self.drawn_at.borrow_mut().push((x, y));
        Ok(())
    }
}

/// Grid of uniform fixed-size cells.
pub fn fixed_grid(rows: usize, cols: usize, width: f32, height: f32) -> TableContent {
    TableContent::new(
        (0..rows)
            .map(|_| (0..cols).map(|_| FixedCell::boxed(width, height)).collect())
            .collect(),
    )
    .expect("fixed grid is rectangular")
}

/// Grid whose cell sizes come from a closure of `(row, col)`.
pub fn sized_grid(
    rows: usize,
    cols: usize,
    size: impl Fn(usize, usize) -> (f32, f32),
) -> TableContent {
    TableContent::new(
        (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        let (w, h) = size(r, c);
                        FixedCell::boxed(w, h)
                    })
                    .collect()
            })
            .collect(),
    )
    .expect("sized grid is rectangular")
}

/// Build a measured table over a manual scheduler, viewport 800x600.
pub fn build_table(
    content: TableContent,
    frozen_rows: usize,
    frozen_cols: usize,
) -> (Table, Rc<ManualScheduler>) {
    build_table_with(content, frozen_rows, frozen_cols, TableParams::default)
}

/// Same as [`build_table`] with custom params (frozen spec is overwritten).
pub fn build_table_with(
    content: TableContent,
    frozen_rows: usize,
    frozen_cols: usize,
    params: impl FnOnce() -> TableParams,
) -> (Table, Rc<ManualScheduler>) {
    let scheduler = Rc::new(ManualScheduler::new());
    let mut params = params();
    params.frozen = FrozenSpec::new(frozen_rows, frozen_cols);
    let mut table = Table::new(
        content,
        params,
        Rc::clone(&scheduler) as Rc<dyn FrameScheduler>,
    )
    .expect("valid table");
    table.ensure_measured(&mut MonoMeasurer);
    (table, scheduler)
}

/// Recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    StrokeLine {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: String,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
    },
    PushClip {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    PopClip,
}

/// Backend that records every operation for assertions.
pub struct RecordingBackend {
    pub ops: Vec<DrawOp>,
    pub logical_width: f32,
    pub logical_height: f32,
}

impl RecordingBackend {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ops: Vec::new(),
            logical_width: width,
            logical_height: height,
        }
    }

    pub fn fill_rects(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .collect()
    }

    pub fn stroke_rects(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
            .collect()
    }

    pub fn texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillText { .. }))
            .collect()
    }

    pub fn clip_pushes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::PushClip { .. }))
            .count()
    }
}

impl TextMeasurer for RecordingBackend {
    fn text_width(&mut self, text: &str, _font: &str) -> f32 {
        text.chars().count() as f32 * MONO_CHAR_WIDTH
    }
}

impl RenderBackend for RecordingBackend {
    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.logical_width = width as f32 / dpr;
        self.logical_height = height as f32 / dpr;
    }

    fn clear(&mut self) -> Result<()> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &Color) -> Result<()> {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color: color.css().to_string(),
        });
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &Color,
        _line_width: f32,
    ) -> Result<()> {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
            color: color.css().to_string(),
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &Color,
        _line_width: f32,
    ) -> Result<()> {
        self.ops.push(DrawOp::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            color: color.css().to_string(),
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, _font: &str, _color: &Color) -> Result<()> {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn push_clip(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        self.ops.push(DrawOp::PushClip {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<()> {
        self.ops.push(DrawOp::PopClip);
        Ok(())
    }

    fn width(&self) -> f32 {
        self.logical_width
    }

    fn height(&self) -> f32 {
        self.logical_height
    }
}
