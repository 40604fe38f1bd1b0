//! Shared, clamped scroll positions.
//!
//! One `ScrollState` per axis, shared by every pane bound to that axis and by
//! the drag coordinator. All mutation goes through the clamped mutators, so
//! an offset can never leave `[0, content − viewport]` regardless of drag
//! magnitude or fling overshoot.

use std::cell::RefCell;
use std::rc::Rc;

/// Scroll position along one axis, zero-based over the scrollable region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    offset: f32,
    content_extent: f32,
    viewport_extent: f32,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest valid offset for the current extents.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Update the extents after a measurement pass or viewport resize.
    /// Re-clamps the current offset into the new range.
    pub fn set_extents(&mut self, content_extent: f32, viewport_extent: f32) {
        self.content_extent = content_extent.max(0.0);
        self.viewport_extent = viewport_extent.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Set an absolute offset, clamped.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Apply a raw delta, clamped. Returns the delta actually applied.
    pub fn dispatch_raw_delta(&mut self, delta: f32) -> f32 {
        let target = (self.offset + delta).clamp(0.0, self.max_offset());
        let applied = target - self.offset;
        self.offset = target;
        applied
    }
}

/// Shared handle to a [`ScrollState`].
///
/// The widget owns the state; panes and the drag coordinator hold non-owning
/// clones of the handle. Hosts may construct their own handle and pass it in
/// to read or drive the position from outside the widget. Single-threaded by
/// design: all mutation happens on the host event loop.
#[derive(Debug, Clone, Default)]
pub struct SharedScroll(Rc<RefCell<ScrollState>>);

impl SharedScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.0.borrow().offset()
    }

    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.0.borrow().max_offset()
    }

    pub fn set_extents(&self, content_extent: f32, viewport_extent: f32) {
        self.0.borrow_mut().set_extents(content_extent, viewport_extent);
    }

    pub fn set_offset(&self, offset: f32) {
        self.0.borrow_mut().set_offset(offset);
    }

    /// Clamped relative scroll; returns the delta actually applied.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        self.0.borrow_mut().dispatch_raw_delta(delta)
    }

    /// True when both handles refer to the same underlying state.
    #[must_use]
    pub fn same_state(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
