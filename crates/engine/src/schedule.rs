//! Step schedule construction.
//!
//! A schedule is the precomputed timing table for a workflow run: each step's
//! start offset within the total animation plus the total duration. It is
//! built once from the declared steps and never mutated during a run.

use marquee_types::StepSpec;

/// Timing window for a single step within the overall animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWindow {
    /// Milliseconds from animation start until this step becomes active.
    pub start_offset_ms: u64,
    /// How long the step stays active.
    pub duration_ms: u64,
}

impl StepWindow {
    /// Exclusive end of this step's active window.
    pub fn end_offset_ms(&self) -> u64 {
        self.start_offset_ms + self.duration_ms
    }

    /// Whether `elapsed_ms` falls inside `[start, start + duration)`.
    pub fn contains(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.start_offset_ms && elapsed_ms < self.end_offset_ms()
    }
}

/// Immutable timing table derived from the declared steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Per-step windows, in declaration order.
    pub windows: Vec<StepWindow>,
    /// Sum of all step durations. Zero only when no steps exist, in which
    /// case a run is treated as immediately complete.
    pub total_duration_ms: u64,
}

impl Schedule {
    /// Number of steps in the schedule.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the schedule holds no steps.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Index of the step whose window contains `elapsed_ms`, if any. Past
    /// the final window there is no active step.
    pub fn active_index(&self, elapsed_ms: u64) -> Option<usize> {
        self.windows.iter().position(|w| w.contains(elapsed_ms))
    }
}

/// Builds the timing table for an ordered list of steps.
///
/// Offsets are the cumulative sum of the preceding durations, so they are
/// monotonically non-decreasing and the first offset is always zero. Pure
/// function of its input.
pub fn build_schedule(steps: &[StepSpec]) -> Schedule {
    let mut windows = Vec::with_capacity(steps.len());
    let mut cursor = 0u64;
    for step in steps {
        windows.push(StepWindow {
            start_offset_ms: cursor,
            duration_ms: step.duration_ms,
        });
        cursor += step.duration_ms;
    }
    Schedule {
        windows,
        total_duration_ms: cursor,
    }
}
