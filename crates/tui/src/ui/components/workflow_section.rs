//! Workflow section: progress bar, live status line, and the step list.
//!
//! Every row is always emitted: hidden arrows and upcoming steps render
//! as dimmed or blank content rather than disappearing, so the section's
//! height is constant and the viewport's visibility math stays exact.

use ratatui::text::{Line, Span};

use marquee_engine::{ArrowVisual, StepVisual, WorkflowAnimator};
use marquee_types::WorkflowSectionSpec;

use crate::ui::theme::Theme;

/// Marker glyph for a step in the given state.
fn step_marker(visual: StepVisual) -> &'static str {
    match visual {
        StepVisual::Upcoming => "○",
        StepVisual::Active => "●",
        StepVisual::Completed => "✓",
    }
}

/// Rows the section occupies. Must match what [`lines`] produces.
pub fn height(spec: &WorkflowSectionSpec) -> u16 {
    let step_rows: usize = spec
        .steps
        .iter()
        .map(|step| 1 + usize::from(step.detail.is_some()))
        .sum();
    let arrow_rows = spec.steps.len().saturating_sub(1);
    // heading, gap, bar, live line, gap, steps and arrows, trailing gap.
    (5 + step_rows + arrow_rows + 2) as u16
}

/// Builds the section's rows from the animator's current presentation
/// state.
pub fn lines(
    spec: &WorkflowSectionSpec,
    animator: &WorkflowAnimator,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut rows = Vec::with_capacity(height(spec) as usize);
    rows.push(Line::styled(spec.heading.clone(), theme.heading()));
    rows.push(Line::default());
    rows.push(progress_bar(animator.percent(), theme, width));
    // Live status line mirroring the bar for assistive output.
    rows.push(Line::styled(
        format!("Progress: {}%", animator.percent()),
        theme.text_muted(),
    ));
    rows.push(Line::default());

    for (index, step) in spec.steps.iter().enumerate() {
        let visual = animator
            .steps()
            .get(index)
            .copied()
            .unwrap_or(StepVisual::Upcoming);
        let style = theme.step_style(visual);
        rows.push(Line::styled(
            format!("{} {}", step_marker(visual), step.title),
            style,
        ));
        if let Some(detail) = &step.detail {
            rows.push(Line::styled(format!("  {detail}"), theme.text_muted()));
        }
        if index + 1 < spec.steps.len() {
            let arrow = animator
                .arrows()
                .get(index)
                .copied()
                .unwrap_or(ArrowVisual::Hidden);
            let glyph = match arrow {
                ArrowVisual::Hidden => " ",
                ArrowVisual::Revealed | ArrowVisual::Active => "↓",
            };
            rows.push(Line::styled(glyph.to_string(), theme.arrow_style(arrow)));
        }
    }
    rows.push(Line::default());
    rows.push(Line::default());
    debug_assert_eq!(rows.len(), height(spec) as usize);
    rows
}

/// Proportional fill plus a right-aligned percentage readout.
fn progress_bar(percent: u8, theme: &Theme, width: u16) -> Line<'static> {
    let bar_cols = usize::from(width.saturating_sub(6)).max(1);
    let filled = (bar_cols * usize::from(percent)).div_ceil(100).min(bar_cols);
    Line::from(vec![
        Span::styled("█".repeat(filled), theme.bar_filled()),
        Span::styled("░".repeat(bar_cols - filled), theme.bar_empty()),
        Span::styled(format!(" {percent:>3}%"), theme.text()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_engine::{WorkflowAnimator, build_schedule};
    use marquee_types::StepSpec;

    fn section() -> WorkflowSectionSpec {
        WorkflowSectionSpec {
            heading: "How it works".into(),
            loop_enabled: false,
            steps: vec![
                StepSpec {
                    title: "Connect".into(),
                    detail: Some("plug in".into()),
                    duration_ms: 1000,
                },
                StepSpec {
                    title: "Launch".into(),
                    detail: None,
                    duration_ms: 2000,
                },
            ],
        }
    }

    #[test]
    fn height_matches_emitted_lines() {
        let spec = section();
        let animator = WorkflowAnimator::new(build_schedule(&spec.steps), false);
        let theme = Theme::default();
        let rows = lines(&spec, &animator, &theme, 40);
        assert_eq!(rows.len(), height(&spec) as usize);
        // heading + gap + bar + live + gap + (title+detail) + arrow + title + 2 gaps
        assert_eq!(height(&spec), 11);
    }

    #[test]
    fn live_line_reports_percent() {
        let spec = section();
        let mut animator = WorkflowAnimator::new(build_schedule(&spec.steps), false);
        animator.set_visible(true, 0);
        animator.tick(1500);
        let theme = Theme::default();
        let rows = lines(&spec, &animator, &theme, 40);
        let live: String = rows[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(live, "Progress: 50%");
    }

    #[test]
    fn bar_is_empty_at_zero_and_full_at_hundred() {
        let theme = Theme::default();
        let zero: String = progress_bar(0, &theme, 26)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(zero.starts_with("░") && zero.ends_with("   0%"));
        let full: String = progress_bar(100, &theme, 26)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(full.starts_with("█") && !full.contains('░') && full.ends_with(" 100%"));
    }
}
