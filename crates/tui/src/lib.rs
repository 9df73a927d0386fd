//! # Marquee TUI
//!
//! Terminal host for the Marquee landing-page player. It renders the
//! declarative page as a scrollable column of sections and supplies the
//! platform capabilities the animation engine consumes: a frame ticker, a
//! monotonic session clock, per-section visibility ratios, and the
//! reduced-motion preference.
//!
//! ## Architecture
//!
//! - `app`: the `App` controller owning all animation and viewport
//!   state; consumes `Msg`s, reports `Effect`s.
//! - `ui::runtime`: terminal lifecycle and the unified event loop
//!   (input thread, adaptive ticker, dirty-render).
//! - `ui::components`: the page view and the per-section line builders.
//! - `ui::viewport`: scroll state and the 30%-visibility watcher.

mod app;
mod ui;

use anyhow::Result;
use marquee_types::PageSpec;

/// Runs the page player until the user quits.
///
/// Takes over the terminal (raw mode, alternate screen), drives the event
/// loop, and restores the terminal on exit. `reduced_motion` makes the
/// counter tweens jump straight to their targets.
pub async fn run(page: PageSpec, reduced_motion: bool) -> Result<()> {
    ui::runtime::run_app(page, reduced_motion).await
}
