//! The workflow animator: a timed state machine over a fixed step schedule.
//!
//! Once started, each tick derives elapsed time from the caller's clock,
//! computes overall progress, and marks steps active/completed against the
//! precomputed [`Schedule`]. Pausing banks the elapsed time so resuming
//! continues from the same point; looping schedules a delayed reset-and-
//! restart after completion.
//!
//! The stagger and loop-restart delays are deliberately fire-and-forget:
//! they are recorded as deadlines consumed by `tick` and are not cancelled
//! by `pause` or `reset`, matching the section's observed behavior when it
//! is hidden mid-delay.

use tracing::debug;

use crate::easing::progress_ratio;
use crate::schedule::Schedule;
use crate::{ARROW_STAGGER_MS, LOOP_RESTART_DELAY_MS};

/// Lifecycle phase of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, never started.
    Idle,
    /// Advancing on every tick.
    Running,
    /// Started, currently suspended with elapsed time banked.
    Paused,
    /// Progress reached 100%. Terminal unless looping restarts it.
    Completed,
}

/// Presentation state of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVisual {
    /// Not reached yet.
    Upcoming,
    /// The step whose window contains the current elapsed time.
    Active,
    /// A step the animation has moved past.
    Completed,
}

/// Presentation state of the connector between two adjacent steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowVisual {
    /// Not reached yet.
    Hidden,
    /// Shown the instant the following step activates.
    Revealed,
    /// Fully lit, 300 ms after reveal.
    Active,
}

/// Timed state machine driving the workflow section.
///
/// All operations take `now_ms` from a monotonic clock owned by the caller;
/// the animator never reads time itself.
#[derive(Debug)]
pub struct WorkflowAnimator {
    schedule: Schedule,
    loop_enabled: bool,
    phase: Phase,
    visible: bool,
    has_run_before: bool,
    /// Reference instant such that `now - reference` equals total elapsed
    /// animation time. Adjusted on resume to absorb banked elapsed time.
    start_reference_ms: u64,
    accumulated_elapsed_ms: u64,
    current_step_index: usize,
    percent: u8,
    step_marks: Vec<StepVisual>,
    arrow_marks: Vec<ArrowVisual>,
    /// Pending `(arrow index, fire at)` stagger deadlines.
    arrow_deadlines: Vec<(usize, u64)>,
    /// Pending looped restart, if one was scheduled at completion.
    restart_at_ms: Option<u64>,
}

impl WorkflowAnimator {
    /// Creates an idle animator over `schedule`.
    pub fn new(schedule: Schedule, loop_enabled: bool) -> Self {
        let steps = schedule.len();
        Self {
            schedule,
            loop_enabled,
            phase: Phase::Idle,
            visible: false,
            has_run_before: false,
            start_reference_ms: 0,
            accumulated_elapsed_ms: 0,
            current_step_index: 0,
            percent: 0,
            step_marks: vec![StepVisual::Upcoming; steps],
            arrow_marks: vec![ArrowVisual::Hidden; steps.saturating_sub(1)],
            arrow_deadlines: Vec::new(),
            restart_at_ms: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the animator advances on ticks.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether ticks still have work to do: a running animation or an
    /// unexpired fire-and-forget deadline.
    pub fn has_pending_work(&self) -> bool {
        self.is_running() || !self.arrow_deadlines.is_empty() || self.restart_at_ms.is_some()
    }

    /// Integer progress percentage for the bar and the live status line.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Per-step presentation states, in step order.
    pub fn steps(&self) -> &[StepVisual] {
        &self.step_marks
    }

    /// Per-connector presentation states; entry `i` sits between steps `i`
    /// and `i + 1`.
    pub fn arrows(&self) -> &[ArrowVisual] {
        &self.arrow_marks
    }

    /// Total elapsed animation time as of `now_ms`.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.phase {
            Phase::Running => now_ms.saturating_sub(self.start_reference_ms),
            _ => self.accumulated_elapsed_ms,
        }
    }

    /// Starts a run from `Idle`, or from `Completed` when looping.
    ///
    /// The start reference absorbs any banked elapsed time, so a paused run
    /// resumed through [`Self::resume`] continues rather than restarting.
    pub fn start(&mut self, now_ms: u64) {
        match self.phase {
            Phase::Idle => {}
            Phase::Completed if self.loop_enabled => {}
            _ => return,
        }
        debug!(phase = ?self.phase, "workflow animation starting");
        self.begin(now_ms);
    }

    /// Resumes a paused run, preserving banked elapsed time.
    pub fn resume(&mut self, now_ms: u64) {
        if self.phase != Phase::Paused {
            return;
        }
        debug!(elapsed_ms = self.accumulated_elapsed_ms, "workflow animation resuming");
        self.begin(now_ms);
    }

    /// Suspends a running animation, banking elapsed time. Visual state is
    /// left untouched. No-op in any other phase, so repeated calls are
    /// idempotent.
    pub fn pause(&mut self, now_ms: u64) {
        if self.phase != Phase::Running {
            return;
        }
        self.accumulated_elapsed_ms = now_ms.saturating_sub(self.start_reference_ms);
        self.phase = Phase::Paused;
        debug!(elapsed_ms = self.accumulated_elapsed_ms, "workflow animation paused");
    }

    /// Clears all step and arrow marks and rewinds elapsed time to zero.
    ///
    /// Called before every fresh run and every loop iteration. Pending
    /// fire-and-forget deadlines are intentionally not cleared.
    pub fn reset(&mut self) {
        self.step_marks.fill(StepVisual::Upcoming);
        self.arrow_marks.fill(ArrowVisual::Hidden);
        self.percent = 0;
        self.accumulated_elapsed_ms = 0;
        self.current_step_index = 0;
    }

    /// Applies a visibility change from the section's watcher.
    ///
    /// First-ever visibility resets and starts; later reappearances resume
    /// a paused run; disappearing pauses a running one.
    pub fn set_visible(&mut self, visible: bool, now_ms: u64) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            if !self.has_run_before {
                self.has_run_before = true;
                self.reset();
                self.start(now_ms);
            } else {
                self.resume(now_ms);
            }
        } else {
            self.pause(now_ms);
        }
    }

    /// Advances the machine to `now_ms`. Returns `true` when any visible
    /// state changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = self.fire_deadlines(now_ms);
        if self.phase != Phase::Running {
            return changed;
        }

        let elapsed = now_ms.saturating_sub(self.start_reference_ms);
        let progress = progress_ratio(elapsed, self.schedule.total_duration_ms);
        let percent = (progress * 100.0).round() as u8;
        if percent != self.percent {
            self.percent = percent;
            changed = true;
        }

        if progress >= 1.0 {
            self.complete(now_ms);
            return true;
        }

        // Steps are evaluated in ascending order and the active index never
        // regresses while running.
        if let Some(active) = self.schedule.active_index(elapsed) {
            let active = active.max(self.current_step_index);
            changed |= self.mark_through(active, now_ms);
            self.current_step_index = active;
        }
        changed
    }

    fn begin(&mut self, now_ms: u64) {
        self.start_reference_ms = now_ms.saturating_sub(self.accumulated_elapsed_ms);
        self.phase = Phase::Running;
    }

    /// Consumes expired arrow-stagger and loop-restart deadlines. Deadlines
    /// survive pause and reset, so one may fire against a reset state; that
    /// is the accepted behavior for this page's lifetime scope.
    fn fire_deadlines(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        let marks = &mut self.arrow_marks;
        self.arrow_deadlines.retain(|&(index, at_ms)| {
            if at_ms > now_ms {
                return true;
            }
            if let Some(mark) = marks.get_mut(index)
                && *mark != ArrowVisual::Active
            {
                *mark = ArrowVisual::Active;
                changed = true;
            }
            false
        });

        if let Some(at_ms) = self.restart_at_ms
            && at_ms <= now_ms
        {
            self.restart_at_ms = None;
            debug!("workflow loop restarting");
            self.reset();
            self.phase = Phase::Completed;
            self.start(now_ms);
            changed = true;
        }
        changed
    }

    /// Marks every step below `active` completed and `active` itself
    /// active, revealing the connector ahead of a newly activated step.
    fn mark_through(&mut self, active: usize, now_ms: u64) -> bool {
        let mut changed = false;
        for index in 0..active.min(self.step_marks.len()) {
            if self.step_marks[index] != StepVisual::Completed {
                self.step_marks[index] = StepVisual::Completed;
                changed = true;
            }
        }
        if let Some(mark) = self.step_marks.get_mut(active)
            && *mark != StepVisual::Active
        {
            *mark = StepVisual::Active;
            changed = true;
            if active > 0
                && let Some(arrow) = self.arrow_marks.get_mut(active - 1)
                && *arrow == ArrowVisual::Hidden
            {
                *arrow = ArrowVisual::Revealed;
                self.arrow_deadlines.push((active - 1, now_ms + ARROW_STAGGER_MS));
            }
        }
        changed
    }

    /// Forces the terminal all-completed presentation and either schedules
    /// a looped restart (only when the section is visible right now) or
    /// parks the machine at `Completed`.
    fn complete(&mut self, now_ms: u64) {
        self.step_marks.fill(StepVisual::Completed);
        self.arrow_marks.fill(ArrowVisual::Active);
        self.percent = 100;
        self.current_step_index = self.schedule.len();
        self.accumulated_elapsed_ms = self.schedule.total_duration_ms;
        self.phase = Phase::Completed;
        if self.loop_enabled && self.visible {
            self.restart_at_ms = Some(now_ms + LOOP_RESTART_DELAY_MS);
            debug!(delay_ms = LOOP_RESTART_DELAY_MS, "workflow completed; loop scheduled");
        } else {
            debug!("workflow completed");
        }
    }
}
