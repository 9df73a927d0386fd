//! Animation engine for the Marquee landing-page player.
//!
//! Everything in this crate is pure with respect to time: operations take an
//! explicit `now_ms` taken from the caller's monotonic clock and return or
//! mutate plain state. There are no timers, no rendering, and no I/O. The
//! host owns the frame cadence and feeds ticks in, which keeps every state
//! transition reproducible under a synthetic clock.
//!
//! ## Modules
//!
//! - [`schedule`]: turns ordered step specs into cumulative start offsets
//!   and a total duration.
//! - [`workflow`]: the timed state machine driving the progress bar and
//!   per-step highlight states.
//! - [`counter`]: once-per-session numeric tweens with an ease-out-quartic
//!   curve and a reduced-motion bypass.
//! - [`easing`]: the curve and clamping helpers shared by both animators.

pub mod counter;
pub mod easing;
pub mod schedule;
pub mod workflow;

pub use counter::{CounterGroup, CounterTween};
pub use easing::{ease_out_quart, progress_ratio};
pub use schedule::{build_schedule, Schedule, StepWindow};
pub use workflow::{ArrowVisual, Phase, StepVisual, WorkflowAnimator};

/// Delay before a revealed connector arrow turns fully active, in
/// milliseconds. Cosmetic stagger only; never on the timing-critical path.
pub const ARROW_STAGGER_MS: u64 = 300;

/// Delay between a completed run and its looped restart, in milliseconds.
pub const LOOP_RESTART_DELAY_MS: u64 = 2000;
