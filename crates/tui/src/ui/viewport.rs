//! Scroll state and the section visibility watcher.
//!
//! The page is a virtual column of rows; the viewport is the window the
//! terminal shows of it. Each animated section registers its row span, and
//! after every scroll or resize the watcher recomputes each span's visible
//! ratio and reports threshold crossings as `Msg::VisibilityChanged`. The
//! two tracked regions are independent: both may cross in the same batch.

use marquee_types::{Msg, Region};

/// Fraction of a section's rows that must be on screen to count as "in
/// view".
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// A section's position in page coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// First page row of the section.
    pub start_row: u16,
    /// Section height in rows.
    pub rows: u16,
}

impl SectionSpan {
    /// Fraction of this span inside `[scroll_row, scroll_row + viewport_rows)`.
    pub fn visible_ratio(&self, scroll_row: u16, viewport_rows: u16) -> f64 {
        if self.rows == 0 || viewport_rows == 0 {
            return 0.0;
        }
        let top = self.start_row.max(scroll_row);
        let end = (self.start_row + self.rows).min(scroll_row + viewport_rows);
        if end <= top {
            return 0.0;
        }
        f64::from(end - top) / f64::from(self.rows)
    }
}

/// Tracks one region's span and its last reported visibility.
#[derive(Debug)]
struct TrackedRegion {
    region: Region,
    span: SectionSpan,
    visible: bool,
}

/// Scroll position plus the visibility watcher for the tracked sections.
#[derive(Debug, Default)]
pub struct ViewportState {
    scroll_row: u16,
    viewport_rows: u16,
    page_rows: u16,
    tracked: Vec<TrackedRegion>,
}

impl ViewportState {
    /// Registers the page layout: total height and the animated spans.
    /// Resets prior visibility bookkeeping.
    pub fn set_layout(&mut self, page_rows: u16, spans: Vec<(Region, SectionSpan)>) {
        self.page_rows = page_rows;
        self.tracked = spans
            .into_iter()
            .map(|(region, span)| TrackedRegion {
                region,
                span,
                visible: false,
            })
            .collect();
        self.clamp_scroll();
    }

    /// Updates the viewport height (content rows, excluding the frame).
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.clamp_scroll();
    }

    /// Current scroll offset in page rows.
    pub fn scroll_row(&self) -> u16 {
        self.scroll_row
    }

    /// Total page height in rows.
    pub fn page_rows(&self) -> u16 {
        self.page_rows
    }

    /// Rows the viewport can show.
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Scrolls by a signed number of rows, clamped to the page bounds.
    pub fn scroll_by(&mut self, delta: i32) {
        let current = i64::from(self.scroll_row);
        let next = (current + i64::from(delta)).clamp(0, i64::from(self.max_scroll()));
        self.scroll_row = next as u16;
    }

    /// Scrolls a near-full viewport forward or backward.
    pub fn scroll_page(&mut self, forward: bool) {
        let stride = i32::from(self.viewport_rows.saturating_sub(1).max(1));
        self.scroll_by(if forward { stride } else { -stride });
    }

    /// Jumps to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.scroll_row = 0;
    }

    /// Jumps to the bottom of the page.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_row = self.max_scroll();
    }

    /// Recomputes each tracked region's visibility and returns a message
    /// for every 30% threshold crossing since the last call.
    pub fn visibility_events(&mut self) -> Vec<Msg> {
        let mut events = Vec::new();
        for tracked in &mut self.tracked {
            let ratio = tracked.span.visible_ratio(self.scroll_row, self.viewport_rows);
            let visible = ratio >= VISIBILITY_THRESHOLD;
            if visible != tracked.visible {
                tracked.visible = visible;
                events.push(Msg::VisibilityChanged {
                    region: tracked.region,
                    visible,
                });
            }
        }
        events
    }

    fn max_scroll(&self) -> u16 {
        self.page_rows.saturating_sub(self.viewport_rows)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_row = self.scroll_row.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watcher() -> ViewportState {
        // 100-row page, workflow at rows 40..60, counters at rows 70..80.
        let mut viewport = ViewportState::default();
        viewport.set_layout(
            100,
            vec![
                (
                    Region::Workflow,
                    SectionSpan {
                        start_row: 40,
                        rows: 20,
                    },
                ),
                (
                    Region::Counters,
                    SectionSpan {
                        start_row: 70,
                        rows: 10,
                    },
                ),
            ],
        );
        viewport.set_viewport_rows(24);
        viewport
    }

    #[test]
    fn ratio_is_overlap_over_section_rows() {
        let span = SectionSpan {
            start_row: 40,
            rows: 20,
        };
        assert_eq!(span.visible_ratio(0, 24), 0.0);
        // Viewport 30..54 overlaps rows 40..54: 14 of 20.
        assert!((span.visible_ratio(30, 24) - 0.7).abs() < 1e-9);
        assert_eq!(span.visible_ratio(40, 20), 1.0);
        assert_eq!(span.visible_ratio(60, 24), 0.0);
    }

    #[test]
    fn crossing_threshold_emits_once_per_transition() {
        let mut viewport = watcher();
        assert!(viewport.visibility_events().is_empty(), "nothing visible at top");

        // Scroll until 6 of 20 workflow rows show: 0.3 exactly.
        viewport.scroll_by(22);
        let events = viewport.visibility_events();
        assert_eq!(events, vec![Msg::VisibilityChanged {
            region: Region::Workflow,
            visible: true
        }]);
        // No repeat without a crossing.
        assert!(viewport.visibility_events().is_empty());

        viewport.scroll_to_top();
        let events = viewport.visibility_events();
        assert_eq!(events, vec![Msg::VisibilityChanged {
            region: Region::Workflow,
            visible: false
        }]);
    }

    #[test]
    fn both_regions_can_cross_in_one_batch() {
        let mut viewport = watcher();
        // Viewport 50..74 shows half the workflow and 40% of the counters.
        viewport.scroll_by(50);
        let events = viewport.visibility_events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|event| matches!(
            event,
            Msg::VisibilityChanged { visible: true, .. }
        )));
    }

    #[test]
    fn scroll_clamps_to_page_bounds() {
        let mut viewport = watcher();
        viewport.scroll_by(-10);
        assert_eq!(viewport.scroll_row(), 0);
        viewport.scroll_by(10_000);
        assert_eq!(viewport.scroll_row(), 76);
        viewport.scroll_page(false);
        assert_eq!(viewport.scroll_row(), 53);
    }
}
