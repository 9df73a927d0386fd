//! Application state and controller logic for the page player.
//!
//! `App` is the single state container for a page session: the parsed page,
//! the two animators, the viewport, and the theme. It is the controller all
//! events flow through. Visibility crossings start, pause, and resume the
//! workflow animator and trigger the counter group exactly once; ticks
//! advance both.
//!
//! All timing flows through `update_at`, which takes an explicit
//! session-relative `now_ms`, so controller behavior is testable with a
//! synthetic clock. The public `update` derives `now_ms` from the session's
//! monotonic start instant.

use std::time::Instant;

use marquee_engine::{CounterGroup, WorkflowAnimator, build_schedule};
use marquee_types::{Effect, Msg, PageSpec, Region};

use crate::ui::components::page_layout;
use crate::ui::theme::Theme;
use crate::ui::viewport::ViewportState;

/// Rows consumed by the page frame (top and bottom border).
const FRAME_ROWS: u16 = 2;

/// Central state container for one page session.
pub struct App {
    /// The declarative page being played.
    pub page: PageSpec,
    /// Styling roles used by every section.
    pub theme: Theme,
    /// Scroll state plus the section visibility watcher.
    pub viewport: ViewportState,
    /// Workflow animator; present only when the page has a workflow section.
    pub workflow: Option<WorkflowAnimator>,
    /// Counter group; present only when the page has a counters section.
    pub counters: Option<CounterGroup>,
    started: Instant,
    dirty: bool,
}

impl App {
    /// Builds the session state from a parsed page.
    pub fn new(page: PageSpec, reduced_motion: bool) -> Self {
        let workflow = page.workflow.as_ref().map(|section| {
            WorkflowAnimator::new(build_schedule(&section.steps), section.loop_enabled)
        });
        let counters = page
            .counters
            .as_ref()
            .map(|section| CounterGroup::new(section.counters.clone(), reduced_motion));

        let (page_rows, spans) = page_layout(&page);
        let mut viewport = ViewportState::default();
        viewport.set_layout(page_rows, spans);

        Self {
            page,
            theme: Theme::default(),
            viewport,
            workflow,
            counters,
            started: Instant::now(),
            dirty: true,
        }
    }

    /// Milliseconds since the session started.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Whether ticks still have visible work to do.
    pub fn is_animating(&self) -> bool {
        self.workflow.as_ref().is_some_and(|w| w.has_pending_work())
            || self.counters.as_ref().is_some_and(|c| c.is_animating())
    }

    /// Returns and clears the dirty flag; the runtime renders when set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Applies a message using the real session clock.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let now_ms = self.now_ms();
        self.update_at(msg, now_ms)
    }

    /// Applies a message at an explicit session time.
    pub fn update_at(&mut self, msg: &Msg, now_ms: u64) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                let mut changed = false;
                if let Some(workflow) = self.workflow.as_mut() {
                    changed |= workflow.tick(now_ms);
                }
                if let Some(counters) = self.counters.as_mut() {
                    changed |= counters.tick(now_ms);
                }
                self.dirty |= changed;
            }
            Msg::Resize(_, height) => {
                self.viewport.set_viewport_rows(height.saturating_sub(FRAME_ROWS));
                self.apply_visibility_crossings(now_ms);
                self.dirty = true;
            }
            Msg::VisibilityChanged { region, visible } => match region {
                Region::Workflow => {
                    if let Some(workflow) = self.workflow.as_mut() {
                        workflow.set_visible(*visible, now_ms);
                        self.dirty = true;
                    }
                }
                Region::Counters => {
                    if *visible && let Some(counters) = self.counters.as_mut() {
                        counters.trigger(now_ms);
                        self.dirty = true;
                    }
                }
            },
        }
        Vec::new()
    }

    /// Scrolls by a signed number of rows and reports threshold crossings.
    pub fn scroll_by(&mut self, delta: i32) {
        self.viewport.scroll_by(delta);
        self.after_scroll();
    }

    /// Scrolls a near-full viewport in either direction.
    pub fn scroll_page(&mut self, forward: bool) {
        self.viewport.scroll_page(forward);
        self.after_scroll();
    }

    /// Jumps to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to_top();
        self.after_scroll();
    }

    /// Jumps to the bottom of the page.
    pub fn scroll_to_bottom(&mut self) {
        self.viewport.scroll_to_bottom();
        self.after_scroll();
    }

    fn after_scroll(&mut self) {
        let now_ms = self.now_ms();
        self.apply_visibility_crossings(now_ms);
        self.dirty = true;
    }

    /// Feeds any visibility crossings back through the controller.
    fn apply_visibility_crossings(&mut self, now_ms: u64) {
        for msg in self.viewport.visibility_events() {
            self.update_at(&msg, now_ms);
        }
    }
}
