//! Render backend traits for pluggable drawing surfaces.
//!
//! The widget draws through these traits so the same pane renderer works
//! against Canvas 2D on wasm32 and against test/CLI backends natively. Cell
//! content draws itself, so the surface exposes primitive operations rather
//! than a whole-frame call.

use crate::error::Result;
use crate::types::style::Color;

/// Text measurement seam, used by the measurement pass before any drawing.
pub trait TextMeasurer {
    /// Advance width of a single line of `text` in the given CSS font,
    /// in logical pixels.
    fn text_width(&mut self, text: &str, font: &str) -> f32;
}

/// A drawing surface in logical-pixel coordinates.
///
/// Implementations handle device-pixel-ratio scaling internally; all
/// coordinates passed in are logical (CSS) pixels.
pub trait RenderBackend: TextMeasurer {
    /// Resize the surface to a physical size and pixel ratio.
    fn resize(&mut self, width: u32, height: u32, dpr: f32);

    /// Clear the whole surface to the background.
    fn clear(&mut self) -> Result<()>;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &Color) -> Result<()>;

    /// Stroke a rectangle's full bounds.
    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &Color,
        line_width: f32,
    ) -> Result<()>;

    /// Draw a straight line segment.
    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &Color,
        line_width: f32,
    ) -> Result<()>;

    /// Fill a single line of text with its top-left corner at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &Color) -> Result<()>;

    /// Push a rectangular clip; drawing is restricted to the intersection of
    /// all pushed clips until the matching [`RenderBackend::pop_clip`].
    fn push_clip(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()>;

    /// Pop the most recent clip.
    fn pop_clip(&mut self) -> Result<()>;

    /// Current logical width.
    fn width(&self) -> f32;

    /// Current logical height.
    fn height(&self) -> f32;
}
