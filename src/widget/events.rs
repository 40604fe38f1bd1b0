//! Pointer event wiring for `TableView`.
//!
//! Thin glue between raw pointer events and the drag coordinator: extracts
//! canvas-relative coordinates, turns move events into float deltas, and
//! forwards start/move/end/cancel. Drags are forwarded no matter which
//! drag-accepting pane received the touch; a press on the fully frozen
//! corner starts nothing.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, PointerEvent};

#[cfg(target_arch = "wasm32")]
use super::{SharedState, TableView};

#[cfg(target_arch = "wasm32")]
impl TableView {
    pub(crate) fn internal_pointer_down(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let mut s = state.borrow_mut();
        // Before the first render nothing is measured and there are no
        // panes to hit; the press is simply not a drag.
        s.pointer.dragging = s.table.drag_start_at(x, y);
        s.pointer.last_x = x;
        s.pointer.last_y = y;
    }

    pub(crate) fn internal_pointer_move(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let mut s = state.borrow_mut();
        if !s.pointer.dragging {
            return;
        }
        let dx = x - s.pointer.last_x;
        let dy = y - s.pointer.last_y;
        s.pointer.last_x = x;
        s.pointer.last_y = y;
        s.table.coordinator().on_drag(dx, dy);

        let SharedState { table, backend, .. } = &mut *s;
        let _ = table.render(backend);
    }

    pub(crate) fn internal_pointer_up(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            if !s.pointer.dragging {
                return;
            }
            s.pointer.dragging = false;
            s.table.coordinator().on_drag_end();
        }
        Self::pump_fling_frames(state);
    }

    pub(crate) fn internal_pointer_cancel(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        if !s.pointer.dragging {
            return;
        }
        s.pointer.dragging = false;
        s.table.coordinator().on_drag_cancel();
    }

    /// Repaint on animation frames while a fling is running. The fling
    /// itself paces on its own timer chain; this pump only mirrors the
    /// offsets onto the canvas and stops when the coordinator goes idle.
    pub(crate) fn pump_fling_frames(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            let SharedState { table, backend, .. } = &mut *s;
            let _ = table.render(backend);
            if !table.coordinator().is_fling_active() {
                return;
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let state = Rc::clone(state);
        let closure = Closure::once_into_js(move || {
            Self::pump_fling_frames(&state);
        });
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }

    /// Register pointerdown/move/up/cancel/leave handlers on the canvas.
    /// The returned closures must stay alive as long as the view.
    pub(crate) fn register_pointer_handlers(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> Vec<Closure<dyn FnMut(PointerEvent)>> {
        let mut closures: Vec<Closure<dyn FnMut(PointerEvent)>> = Vec::new();

        // Pointer down
        {
            let state = Rc::clone(state);
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: PointerEvent| {
                let rect = target.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_pointer_down(&state, x, y);
            }) as Box<dyn FnMut(PointerEvent)>);
            canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Pointer move
        {
            let state = Rc::clone(state);
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: PointerEvent| {
                let rect = target.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_pointer_move(&state, x, y);
            }) as Box<dyn FnMut(PointerEvent)>);
            canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Pointer up
        {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |_event: PointerEvent| {
                Self::internal_pointer_up(&state);
            }) as Box<dyn FnMut(PointerEvent)>);
            canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Pointer cancel + leave both cancel an active drag
        for event_name in ["pointercancel", "pointerleave"] {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |_event: PointerEvent| {
                Self::internal_pointer_cancel(&state);
            }) as Box<dyn FnMut(PointerEvent)>);
            canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        closures
    }
}
