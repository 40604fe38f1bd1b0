//! Colors and content alignment.
//!
//! Colors are carried as CSS color values all the way to the canvas, the
//! same representation the browser consumes; nothing in the core needs to
//! inspect channels.

use serde::{Deserialize, Serialize};

/// A CSS color value (e.g. `#1A2B3C`, `rgb(10, 20, 30)`, `rebeccapurple`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap an arbitrary CSS color string.
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// Opaque color from 8-bit RGB channels.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02X}{g:02X}{b:02X}"))
    }

    /// Default outline color.
    #[must_use]
    pub fn black() -> Self {
        Self("#000000".to_string())
    }

    /// The CSS string to hand to the canvas.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.0
    }
}

/// Placement of a cell's content within its (larger or equal) cell bounds.
///
/// `Start`/`End` are horizontal: start = left in LTR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    #[default]
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl Alignment {
    /// Offset of the content origin within a cell of `(cell_width, cell_height)`,
    /// for content of `(content_width, content_height)`.
    ///
    /// Content never exceeds its cell: cell sizes are the per-axis maxima of
    /// the measured content sizes.
    #[must_use]
    pub fn place(
        self,
        content_width: f32,
        content_height: f32,
        cell_width: f32,
        cell_height: f32,
    ) -> (f32, f32) {
        let free_x = cell_width - content_width;
        let free_y = cell_height - content_height;
        let x = match self {
            Self::TopStart | Self::CenterStart | Self::BottomStart => 0.0,
            Self::TopCenter | Self::Center | Self::BottomCenter => free_x / 2.0,
            Self::TopEnd | Self::CenterEnd | Self::BottomEnd => free_x,
        };
        let y = match self {
            Self::TopStart | Self::TopCenter | Self::TopEnd => 0.0,
            Self::CenterStart | Self::Center | Self::CenterEnd => free_y / 2.0,
            Self::BottomStart | Self::BottomCenter | Self::BottomEnd => free_y,
        };
        (x, y)
    }
}

/// Per-cell background policy: `None` means no paint.
pub type BackgroundFn = Box<dyn Fn(usize, usize) -> Option<Color>>;

/// Per-cell content alignment policy.
pub type AlignmentFn = Box<dyn Fn(usize, usize) -> Alignment>;

/// Cell appearance: outline plus the injected per-cell policies.
///
/// The policies are plain functions of `(row, col)` supplied by the host;
/// the table itself has no opinion about coloring or alignment.
pub struct TableStyle {
    pub outline_color: Color,
    pub outline_width: f32,
    pub background: BackgroundFn,
    pub alignment: AlignmentFn,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            outline_color: Color::black(),
            outline_width: 1.0,
            background: Box::new(|_, _| None),
            alignment: Box::new(|_, _| Alignment::default()),
        }
    }
}

impl std::fmt::Debug for TableStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStyle")
            .field("outline_color", &self.outline_color)
            .field("outline_width", &self.outline_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_formatting() {
        assert_eq!(Color::rgb(0, 0, 0).css(), "#000000");
        assert_eq!(Color::rgb(255, 128, 10).css(), "#FF800A");
    }

    #[test]
    fn test_place_corners() {
        let (x, y) = Alignment::TopStart.place(10.0, 4.0, 30.0, 20.0);
        assert_eq!((x, y), (0.0, 0.0));

        let (x, y) = Alignment::BottomEnd.place(10.0, 4.0, 30.0, 20.0);
        assert_eq!((x, y), (20.0, 16.0));
    }

    #[test]
    fn test_place_center() {
        let (x, y) = Alignment::Center.place(10.0, 4.0, 30.0, 20.0);
        assert_eq!((x, y), (10.0, 8.0));
    }

    #[test]
    fn test_place_exact_fit() {
        let (x, y) = Alignment::Center.place(30.0, 20.0, 30.0, 20.0);
        assert_eq!((x, y), (0.0, 0.0));
    }
}
