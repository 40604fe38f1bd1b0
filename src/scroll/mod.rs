//! Scroll state, drag/fling coordination, and frame scheduling.

pub mod fling;
pub mod scheduler;
pub mod state;

pub use fling::{DragPhase, DragScrollConfig, DragScrollCoordinator};
pub use scheduler::{FrameScheduler, ManualScheduler};
#[cfg(target_arch = "wasm32")]
pub use scheduler::TimeoutScheduler;
pub use state::{ScrollState, SharedScroll};
