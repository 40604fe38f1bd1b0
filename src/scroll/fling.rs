//! 2D drag scrolling with inertial fling.
//!
//! The coordinator turns raw drag deltas into synchronized updates of the
//! two shared scroll offsets and, on release, runs a fixed-length fling whose
//! per-frame magnitude decays quadratically to zero. Horizontal and vertical
//! velocity are treated as one 2D vector: the release velocity is normalized
//! once and only its magnitude decays, so diagonal flings decelerate along a
//! straight line instead of tracing a curved path.
//!
//! States: `Idle → Dragging → (Flinging | Idle)`; a new drag interrupts an
//! active fling. Every scheduled frame re-checks the generation token before
//! touching the offsets, so frames from a superseded fling are silent no-ops.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::scroll::scheduler::FrameScheduler;
use crate::scroll::state::SharedScroll;

/// Release velocities below this magnitude (drag-delta units per event) do
/// not start a fling.
const MIN_FLING_VELOCITY: f32 = 1.0;

/// Fling animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragScrollConfig {
    /// Number of fling frames. At least 2: the decay divides by `steps − 1`.
    pub animation_steps: u32,
    /// Delay between fling frames in milliseconds.
    pub frame_duration_ms: u32,
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            animation_steps: 50,
            frame_duration_ms: 12,
        }
    }
}

impl DragScrollConfig {
    /// # Errors
    /// `Config` if `animation_steps < 2`.
    pub fn validate(&self) -> Result<()> {
        if self.animation_steps < 2 {
            return Err(TableError::Config(format!(
                "animation_steps must be at least 2, got {}",
                self.animation_steps
            )));
        }
        Ok(())
    }
}

/// Coordinator state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Flinging,
}

#[derive(Debug, Default)]
struct CoordState {
    phase: DragPhase,
    horizontal_velocity: f32,
    vertical_velocity: f32,
    /// Monotonically increasing token; bumping it invalidates every frame
    /// scheduled under an older value.
    generation: u64,
}

/// Immutable description of one fling, captured at release time.
#[derive(Debug, Clone, Copy)]
struct FlingPlan {
    direction_x: f32,
    direction_y: f32,
    magnitude: f32,
    steps: u32,
    generation: u64,
}

impl FlingPlan {
    /// Quadratic decay: full magnitude at step 0, zero at the last step.
    fn magnitude_at(&self, step: u32) -> f32 {
        let progress = step as f32 / (self.steps - 1) as f32;
        let decay = 1.0 - progress;
        self.magnitude * decay * decay
    }
}

/// Velocity-tracking, fling-animating coordinator for 2D drag scrolling.
///
/// Holds non-owning handles to the two shared scroll positions; it drives
/// them but never reads layout.
pub struct DragScrollCoordinator {
    horizontal: SharedScroll,
    vertical: SharedScroll,
    config: DragScrollConfig,
    state: Rc<RefCell<CoordState>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl DragScrollCoordinator {
    /// # Errors
    /// `Config` for an invalid [`DragScrollConfig`].
    pub fn new(
        horizontal: SharedScroll,
        vertical: SharedScroll,
        config: DragScrollConfig,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            horizontal,
            vertical,
            config,
            state: Rc::new(RefCell::new(CoordState::default())),
            scheduler,
        })
    }

    /// A drag began: cancel any in-flight fling, zero the velocities.
    pub fn on_drag_start(&self) {
        let mut s = self.state.borrow_mut();
        s.generation = s.generation.wrapping_add(1);
        s.horizontal_velocity = 0.0;
        s.vertical_velocity = 0.0;
        s.phase = DragPhase::Dragging;
    }

    /// A drag moved by `(dx, dy)`: record the instantaneous velocity and
    /// apply the inverted delta immediately so content follows the finger.
    pub fn on_drag(&self, dx: f32, dy: f32) {
        {
            let mut s = self.state.borrow_mut();
            s.horizontal_velocity = dx;
            s.vertical_velocity = dy;
            s.phase = DragPhase::Dragging;
        }
        if dx.abs() > f32::EPSILON {
            self.horizontal.dispatch_raw_delta(-dx);
        }
        if dy.abs() > f32::EPSILON {
            self.vertical.dispatch_raw_delta(-dy);
        }
    }

    /// The drag ended: start a fling, or go idle if the release velocity is
    /// negligible.
    pub fn on_drag_end(&self) {
        let plan = {
            let mut s = self.state.borrow_mut();
            let magnitude = s.horizontal_velocity.hypot(s.vertical_velocity);
            if magnitude < MIN_FLING_VELOCITY {
                s.phase = DragPhase::Idle;
                return;
            }
            s.generation = s.generation.wrapping_add(1);
            s.phase = DragPhase::Flinging;
            FlingPlan {
                direction_x: s.horizontal_velocity / magnitude,
                direction_y: s.vertical_velocity / magnitude,
                magnitude,
                steps: self.config.animation_steps,
                generation: s.generation,
            }
        };
        // First frame fires on the next scheduler slot; later frames pace at
        // the configured duration.
        Self::schedule_frame(
            Rc::clone(&self.state),
            self.horizontal.clone(),
            self.vertical.clone(),
            Rc::clone(&self.scheduler),
            self.config.frame_duration_ms,
            plan,
            0,
            0,
        );
    }

    /// The drag was cancelled: stop everything, mutate nothing further.
    pub fn on_drag_cancel(&self) {
        let mut s = self.state.borrow_mut();
        s.generation = s.generation.wrapping_add(1);
        s.horizontal_velocity = 0.0;
        s.vertical_velocity = 0.0;
        s.phase = DragPhase::Idle;
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.state.borrow().phase
    }

    /// True while a fling animation is running; hosts can use this to gate
    /// nested gesture handling.
    #[must_use]
    pub fn is_fling_active(&self) -> bool {
        self.phase() == DragPhase::Flinging
    }

    /// Last recorded instantaneous velocity `(vx, vy)`.
    #[must_use]
    pub fn velocity(&self) -> (f32, f32) {
        let s = self.state.borrow();
        (s.horizontal_velocity, s.vertical_velocity)
    }

    #[must_use]
    pub fn config(&self) -> DragScrollConfig {
        self.config
    }

    #[allow(clippy::too_many_arguments)]
    fn schedule_frame(
        state: Rc<RefCell<CoordState>>,
        horizontal: SharedScroll,
        vertical: SharedScroll,
        scheduler: Rc<dyn FrameScheduler>,
        frame_duration_ms: u32,
        plan: FlingPlan,
        step: u32,
        delay_ms: u32,
    ) {
        let chain = Rc::clone(&scheduler);
        scheduler.schedule(
            delay_ms,
            Box::new(move || {
                // Stale frame from a superseded fling: no-op.
                if state.borrow().generation != plan.generation {
                    return;
                }

                let magnitude = plan.magnitude_at(step);
                if magnitude.abs() > f32::EPSILON {
                    horizontal.dispatch_raw_delta(-plan.direction_x * magnitude);
                    vertical.dispatch_raw_delta(-plan.direction_y * magnitude);
                }

                let next = step + 1;
                if next < plan.steps {
                    Self::schedule_frame(
                        state,
                        horizontal,
                        vertical,
                        chain,
                        frame_duration_ms,
                        plan,
                        next,
                        frame_duration_ms,
                    );
                } else {
                    let mut s = state.borrow_mut();
                    if s.generation == plan.generation {
                        s.horizontal_velocity = 0.0;
                        s.vertical_velocity = 0.0;
                        s.phase = DragPhase::Idle;
                    }
                }
            }),
        );
    }
}
