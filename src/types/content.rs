//! Cell content: the opaque producers the table measures and draws.
//!
//! The table never inspects content; it asks each cell for its natural
//! (unconstrained) size once per measurement pass and later asks it to draw
//! at an origin the pane renderer computed from the injected alignment.

use crate::error::{Result, TableError};
use crate::render::backend::{RenderBackend, TextMeasurer};
use crate::types::style::Color;

/// Factor applied to the font size to get a line's advance height.
const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Natural size of a cell's content, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An opaque cell content producer.
///
/// Implementations must report the same `natural_size` for unchanged content:
/// the measurement pass runs exactly once per content identity and the result
/// is reused for every later draw.
pub trait CellRenderer {
    /// Natural (unconstrained) size, as if the content were laid out alone.
    fn natural_size(&self, text: &mut dyn TextMeasurer) -> CellSize;

    /// Draw the content with its top-left corner at `(x, y)` in screen
    /// coordinates. Clipping to the pane is already set up by the caller.
    fn draw(&self, backend: &mut dyn RenderBackend, x: f32, y: f32) -> Result<()>;
}

/// Text styling for the built-in [`TextCell`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub font_px: f32,
    /// CSS font family.
    pub family: String,
    pub color: Color,
    /// Padding applied on all four sides.
    pub padding: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_px: 14.0,
            family: "sans-serif".to_string(),
            color: Color::black(),
            padding: 8.0,
        }
    }
}

impl TextStyle {
    /// CSS font shorthand for canvas `font`/measure calls.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_px, self.family)
    }

    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.font_px * LINE_HEIGHT_FACTOR
    }
}

/// Built-in multi-line text cell.
#[derive(Debug, Clone)]
pub struct TextCell {
    text: String,
    style: TextStyle,
}

impl TextCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

impl CellRenderer for TextCell {
    fn natural_size(&self, text: &mut dyn TextMeasurer) -> CellSize {
        let font = self.style.font();
        let mut width = 0.0f32;
        let mut line_count = 0usize;
        for line in self.lines() {
            width = width.max(text.text_width(line, &font));
            line_count += 1;
        }
        let height = line_count as f32 * self.style.line_height();
        CellSize::new(
            width + self.style.padding * 2.0,
            height + self.style.padding * 2.0,
        )
    }

    fn draw(&self, backend: &mut dyn RenderBackend, x: f32, y: f32) -> Result<()> {
        let font = self.style.font();
        let mut line_y = y + self.style.padding;
        for line in self.lines() {
            backend.fill_text(line, x + self.style.padding, line_y, &font, &self.style.color)?;
            line_y += self.style.line_height();
        }
        Ok(())
    }
}

/// A validated rectangular grid of cell renderers.
pub struct TableContent {
    rows: Vec<Vec<Box<dyn CellRenderer>>>,
    columns: usize,
}

impl TableContent {
    /// Validate and wrap a grid of cell renderers.
    ///
    /// # Errors
    /// `EmptyContent` if there are no rows or the first row has no cells;
    /// `RaggedRows` if any row's length differs from the first row's.
    pub fn new(rows: Vec<Vec<Box<dyn CellRenderer>>>) -> Result<Self> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            return Err(TableError::EmptyContent);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(TableError::RaggedRows {
                    row,
                    expected: columns,
                    actual: cells.len(),
                });
            }
        }
        Ok(Self { rows, columns })
    }

    /// Convenience constructor: a grid of default-styled text cells.
    ///
    /// # Errors
    /// Same validation as [`TableContent::new`].
    pub fn from_text<S: Into<String>>(rows: Vec<Vec<S>>) -> Result<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|text| Box::new(TextCell::new(text)) as Box<dyn CellRenderer>)
                        .collect()
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// The cell at `(row, col)`, if in bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&dyn CellRenderer> {
        self.rows.get(row).and_then(|r| r.get(col)).map(Box::as_ref)
    }

    /// Iterate rows of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Box<dyn CellRenderer>]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl std::fmt::Debug for TableContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableContent")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .finish()
    }
}
