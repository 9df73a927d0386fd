//! Shared type definitions for the Marquee landing-page player.
//!
//! This crate holds the declarative page model (sections, steps, counters)
//! and the message/effect vocabulary exchanged between the runtime loop,
//! the application controller, and the animation engine. It deliberately
//! contains no I/O: page files are located and read by `marquee-util`, and
//! all timing lives in `marquee-engine`.

pub mod page;

pub use page::{
    ClosingSpec, CounterSpec, CountersSectionSpec, HeroSpec, PageSpec, StepSpec, WorkflowSectionSpec,
    DEFAULT_COUNTER_DURATION_MS, DEFAULT_STEP_DURATION_MS,
};

/// Identifies one of the independently tracked page regions.
///
/// Each region has its own visibility watcher and drives a disjoint piece
/// of animation state, so notifications for the two never contend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The workflow section (progress bar plus step highlights).
    Workflow,
    /// The counters section (numeric value tweens).
    Counters,
}

/// Messages that can be sent to update the application state.
///
/// This enum defines the system events that trigger state changes: frame
/// ticks from the runtime ticker, terminal geometry changes, and visibility
/// threshold crossings computed by the viewport watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic animation tick.
    Tick,
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// A tracked region crossed the 30%-visible threshold.
    VisibilityChanged {
        /// Which tracked region changed.
        region: Region,
        /// Whether the region is now at least 30% on screen.
        visible: bool,
    },
}

/// Side effects reported by components for the runtime loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Request a clean shutdown of the event loop.
    Quit,
}
