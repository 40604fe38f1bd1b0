//! The wasm-exported `TableView` widget, the primary entry point for the
//! Canvas 2D embedding.
//!
//! Wraps the host-independent [`Table`](crate::table::Table) model with:
//! - options parsing from JavaScript (`serde-wasm-bindgen`)
//! - automatic pointer-event wiring on the canvas (drag start/move/end/cancel)
//! - a repaint pump that follows an active fling
//! - programmatic scroll and state accessors for host collaborators
//!
//! Event handlers are registered when the view is created; no manual
//! JavaScript wiring required.

mod events;

use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, PointerEvent};

#[cfg(target_arch = "wasm32")]
use crate::layout::panes::FrozenSpec;
#[cfg(target_arch = "wasm32")]
use crate::render::backend::RenderBackend;
#[cfg(target_arch = "wasm32")]
use crate::render::canvas::CanvasBackend;
#[cfg(target_arch = "wasm32")]
use crate::scroll::scheduler::TimeoutScheduler;
#[cfg(target_arch = "wasm32")]
use crate::table::{Table, TableParams};
#[cfg(target_arch = "wasm32")]
use crate::types::content::{CellRenderer, TableContent, TextCell, TextStyle};
#[cfg(target_arch = "wasm32")]
use crate::types::style::{Alignment, Color, TableStyle};

use crate::scroll::fling::DragScrollConfig;

/// One cell in the options grid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellOptions {
    pub text: String,
    /// Font size override in logical pixels.
    pub font_px: Option<f32>,
    /// Text color override (CSS color).
    pub color: Option<String>,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_px: None,
            color: None,
        }
    }
}

/// Construction options passed from JavaScript.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Rectangular grid of cells; validated on construction.
    pub cells: Vec<Vec<CellOptions>>,
    /// Rows frozen at the top.
    pub fixed_top_size: usize,
    /// Columns frozen at the start.
    pub fixed_start_size: usize,
    /// Cell border color (CSS color).
    pub outline_color: String,
    /// Cell border width in logical pixels.
    pub outline_width: f32,
    /// Default font size for text cells.
    pub font_px: f32,
    /// Default font family for text cells.
    pub font_family: String,
    /// Fling animation parameters.
    pub animation_steps: u32,
    pub frame_duration_ms: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        let drag = DragScrollConfig::default();
        Self {
            cells: Vec::new(),
            fixed_top_size: 1,
            fixed_start_size: 1,
            outline_color: "#000000".to_string(),
            outline_width: 1.0,
            font_px: 14.0,
            font_family: "sans-serif".to_string(),
            animation_steps: drag.animation_steps,
            frame_duration_ms: drag.frame_duration_ms,
        }
    }
}

/// Shared state accessed by the registered event handlers (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) table: Table,
    pub(crate) backend: CanvasBackend,
    pub(crate) pointer: PointerState,
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    pub(crate) dragging: bool,
    pub(crate) last_x: f32,
    pub(crate) last_y: f32,
}

#[cfg(target_arch = "wasm32")]
fn build_content(options: &TableOptions) -> crate::error::Result<TableContent> {
    let rows = options
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let mut style = TextStyle {
                        font_px: options.font_px,
                        family: options.font_family.clone(),
                        ..TextStyle::default()
                    };
                    if let Some(font_px) = cell.font_px {
                        style.font_px = font_px;
                    }
                    if let Some(color) = &cell.color {
                        style.color = Color::new(color.clone());
                    }
                    Box::new(TextCell::styled(cell.text.clone(), style)) as Box<dyn CellRenderer>
                })
                .collect()
        })
        .collect();
    TableContent::new(rows)
}

/// Auto-sizing table widget bound to a canvas element.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct TableView {
    state: Rc<RefCell<SharedState>>,
    closures: Vec<Closure<dyn FnMut(PointerEvent)>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TableView {
    /// Create the widget and wire pointer handlers onto `canvas`.
    ///
    /// Fails fast with a descriptive message on malformed content or an
    /// out-of-range frozen spec.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options: JsValue) -> Result<TableView, JsValue> {
        console_error_panic_hook::set_once();

        let options: TableOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("options error: {e}")))?;

        let content = build_content(&options)?;
        let params = TableParams {
            frozen: FrozenSpec::new(options.fixed_top_size, options.fixed_start_size),
            style: TableStyle {
                outline_color: Color::new(options.outline_color.clone()),
                outline_width: options.outline_width,
                ..TableStyle::default()
            },
            horizontal: None,
            vertical: None,
            drag_scroll: DragScrollConfig {
                animation_steps: options.animation_steps,
                frame_duration_ms: options.frame_duration_ms,
            },
        };
        let mut table = Table::new(content, params, Rc::new(TimeoutScheduler::new()))?;

        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio() as f32);
        let mut backend = CanvasBackend::new(canvas.clone())?;
        backend.resize(canvas.width().max(1), canvas.height().max(1), dpr);
        table.set_viewport(backend.width(), backend.height(), dpr);

        let state = Rc::new(RefCell::new(SharedState {
            table,
            backend,
            pointer: PointerState::default(),
        }));
        let closures = Self::register_pointer_handlers(&canvas, &state);

        Ok(TableView { state, closures })
    }

    /// Measure (first call) and paint one frame.
    pub fn render(&self) -> Result<(), JsValue> {
        let mut s = self.state.borrow_mut();
        let SharedState { table, backend, .. } = &mut *s;
        table.render(backend).map_err(Into::into)
    }

    /// Resize the canvas surface (physical pixels) and re-clamp scrolling.
    pub fn resize(&self, width: u32, height: u32, dpr: f32) {
        let mut s = self.state.borrow_mut();
        s.backend.resize(width, height, dpr);
        let (w, h) = (s.backend.width(), s.backend.height());
        s.table.set_viewport(w, h, dpr);
    }

    /// Replace the cell grid; sizes recompute on the next render.
    #[wasm_bindgen(js_name = "setCells")]
    pub fn set_cells(&self, cells: JsValue) -> Result<(), JsValue> {
        let cells: Vec<Vec<CellOptions>> = serde_wasm_bindgen::from_value(cells)
            .map_err(|e| JsValue::from_str(&format!("cells error: {e}")))?;
        let options = TableOptions {
            cells,
            ..TableOptions::default()
        };
        let content = build_content(&options)?;
        self.state.borrow_mut().table.set_content(content)?;
        Ok(())
    }

    /// Per-cell background callback: `(row, col) -> css color | null`.
    #[wasm_bindgen(js_name = "setBackgroundColor")]
    pub fn set_background_color(&self, callback: Function) {
        self.state.borrow_mut().table.set_background(Box::new(move |row, col| {
            callback
                .call2(
                    &JsValue::NULL,
                    &JsValue::from_f64(row as f64),
                    &JsValue::from_f64(col as f64),
                )
                .ok()
                .and_then(|v| v.as_string())
                .filter(|css| !css.is_empty())
                .map(Color::new)
        }));
    }

    /// Per-cell alignment callback: `(row, col) -> "center" | "top-start" | …`.
    #[wasm_bindgen(js_name = "setContentAlignment")]
    pub fn set_content_alignment(&self, callback: Function) {
        self.state.borrow_mut().table.set_alignment(Box::new(move |row, col| {
            callback
                .call2(
                    &JsValue::NULL,
                    &JsValue::from_f64(row as f64),
                    &JsValue::from_f64(col as f64),
                )
                .ok()
                .and_then(|v| serde_wasm_bindgen::from_value::<Alignment>(v).ok())
                .unwrap_or_default()
        }));
    }

    #[wasm_bindgen(js_name = "scrollX")]
    pub fn scroll_x(&self) -> f32 {
        self.state.borrow().table.scroll_x()
    }

    #[wasm_bindgen(js_name = "scrollY")]
    pub fn scroll_y(&self) -> f32 {
        self.state.borrow().table.scroll_y()
    }

    /// Programmatic scroll, clamped to content bounds.
    #[wasm_bindgen(js_name = "setScroll")]
    pub fn set_scroll(&self, x: f32, y: f32) {
        self.state.borrow().table.set_scroll(x, y);
    }

    /// True while a fling animation is running; hosts can use this to gate
    /// nested gesture handling.
    #[wasm_bindgen(js_name = "isFlingActive")]
    pub fn is_fling_active(&self) -> bool {
        self.state.borrow().table.coordinator().is_fling_active()
    }

    /// The `[row, col]` under a viewport point, or `null`.
    #[wasm_bindgen(js_name = "cellAt")]
    pub fn cell_at(&self, x: f32, y: f32) -> JsValue {
        match self.state.borrow().table.cell_at(x, y) {
            Some((row, col)) => {
                let pair = js_sys::Array::new();
                pair.push(&JsValue::from_f64(row as f64));
                pair.push(&JsValue::from_f64(col as f64));
                pair.into()
            }
            None => JsValue::NULL,
        }
    }
}
