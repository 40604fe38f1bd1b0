//! Canvas 2D backend.
//!
//! Implements the render backend traits against the HTML canvas via web-sys.
//! The context is scaled by the device pixel ratio once per resize, so every
//! drawing call works in logical (CSS) pixels. Text measurement goes through
//! an LRU cache, since `measure_text` is one of the most expensive canvas calls
//! and cell measurement hits it for every line of every cell.

use std::collections::{HashMap, VecDeque};

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, TableError};
use crate::render::backend::{RenderBackend, TextMeasurer};
use crate::types::style::Color;

const TEXT_MEASURE_CACHE_CAP: usize = 4096;

struct TextMeasureCache {
    entries: HashMap<String, f32>,
    order: VecDeque<String>,
}

impl TextMeasureCache {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, key: &str) -> Option<f32> {
        self.entries.get(key).copied()
    }

    fn insert(&mut self, key: String, width: f32) {
        if self.entries.len() >= TEXT_MEASURE_CACHE_CAP {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, width);
    }
}

/// Render backend drawing to an HTML canvas.
pub struct CanvasBackend {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    logical_width: f32,
    logical_height: f32,
    dpr: f32,
    measure_cache: TextMeasureCache,
    current_font: String,
}

impl CanvasBackend {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    /// `Render` if the canvas cannot produce a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| TableError::Render(format!("get_context failed: {e:?}")))?
            .ok_or_else(|| TableError::Render("no 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| TableError::Render("unexpected context type".to_string()))?;

        ctx.set_text_baseline("top");

        let width = canvas.width().max(1) as f32;
        let height = canvas.height().max(1) as f32;
        Ok(Self {
            canvas,
            ctx,
            logical_width: width,
            logical_height: height,
            dpr: 1.0,
            measure_cache: TextMeasureCache::new(),
            current_font: String::new(),
        })
    }

    /// Device pixel ratio applied at the last resize.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn set_font(&mut self, font: &str) {
        if self.current_font != font {
            self.ctx.set_font(font);
            self.current_font = font.to_string();
        }
    }
}

impl TextMeasurer for CanvasBackend {
    fn text_width(&mut self, text: &str, font: &str) -> f32 {
        let key = format!("{font}\u{0}{text}");
        if let Some(width) = self.measure_cache.get(&key) {
            return width;
        }
        self.set_font(font);
        let width = self
            .ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0);
        self.measure_cache.insert(key, width);
        width
    }
}

impl RenderBackend for CanvasBackend {
    fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
        // Resizing resets the context transform and font state.
        let _ = self.ctx.scale(f64::from(dpr), f64::from(dpr));
        self.ctx.set_text_baseline("top");
        self.current_font.clear();
        self.dpr = dpr;
        self.logical_width = width.max(1) as f32 / dpr;
        self.logical_height = height.max(1) as f32 / dpr;
    }

    fn clear(&mut self) -> Result<()> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.logical_width),
            f64::from(self.logical_height),
        );
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &Color) -> Result<()> {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &Color,
        line_width: f32,
    ) -> Result<()> {
        self.ctx.set_stroke_style_str(color.css());
        self.ctx.set_line_width(f64::from(line_width));
        self.ctx.stroke_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
        Ok(())
    }

    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &Color,
        line_width: f32,
    ) -> Result<()> {
        self.ctx.set_stroke_style_str(color.css());
        self.ctx.set_line_width(f64::from(line_width));
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(x1), f64::from(y1));
        self.ctx.line_to(f64::from(x2), f64::from(y2));
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &Color) -> Result<()> {
        self.set_font(font);
        self.ctx.set_fill_style_str(color.css());
        self.ctx
            .fill_text(text, f64::from(x), f64::from(y))
            .map_err(|e| TableError::Render(format!("fill_text failed: {e:?}")))
    }

    fn push_clip(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
        self.ctx.clip();
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<()> {
        self.ctx.restore();
        // save/restore drops font state with the clip.
        self.current_font.clear();
        Ok(())
    }

    fn width(&self) -> f32 {
        self.logical_width
    }

    fn height(&self) -> f32 {
        self.logical_height
    }
}
