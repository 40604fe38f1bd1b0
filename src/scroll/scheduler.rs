//! Frame scheduling for the fling animation loop.
//!
//! The fling loop is a chain of one-shot callbacks: each frame schedules the
//! next. Cancellation is not a scheduler concern: superseded frames notice
//! a stale generation token and become no-ops, so the scheduler contract is
//! a single fire-and-forget method.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Schedules a one-shot callback after a delay.
pub trait FrameScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Browser scheduler: `window.setTimeout` one-shot closures.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
impl TimeoutScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl FrameScheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once_into_js(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay,
        );
    }
}

/// Deterministic scheduler for native hosts and tests: callbacks queue in
/// FIFO order and run only when the owner drains them.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<ScheduledFrame>>,
}

struct ScheduledFrame {
    delay_ms: u32,
    callback: Box<dyn FnOnce()>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks currently queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Requested delay of the next queued callback, if any.
    #[must_use]
    pub fn next_delay_ms(&self) -> Option<u32> {
        self.queue.borrow().front().map(|f| f.delay_ms)
    }

    /// Run the next queued callback. Returns false when the queue was empty.
    /// The callback may schedule further frames; they queue behind it.
    pub fn run_next(&self) -> bool {
        // Pop before invoking: the callback re-borrows the queue to schedule
        // the next frame.
        let Some(frame) = self.queue.borrow_mut().pop_front() else {
            return false;
        };
        (frame.callback)();
        true
    }

    /// Drain the queue, including frames scheduled while draining.
    /// Returns the number of callbacks run.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(ScheduledFrame { delay_ms, callback });
    }
}
