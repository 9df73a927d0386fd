//! Closing section: static copy at the bottom of the page.

use ratatui::text::Line;

use marquee_types::ClosingSpec;

use crate::ui::theme::Theme;

/// Rows the section occupies. Must match what [`lines`] produces.
pub fn height(spec: &ClosingSpec) -> u16 {
    3 + spec.lines.len() as u16
}

/// Builds the closing rows: heading, body copy, trailing gap.
pub fn lines(spec: &ClosingSpec, theme: &Theme) -> Vec<Line<'static>> {
    let mut rows = Vec::with_capacity(height(spec) as usize);
    rows.push(Line::styled(spec.heading.clone(), theme.heading()));
    rows.push(Line::default());
    for body in &spec.lines {
        rows.push(Line::styled(body.clone(), theme.text()));
    }
    rows.push(Line::default());
    debug_assert_eq!(rows.len(), height(spec) as usize);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_matches_emitted_lines() {
        let spec = ClosingSpec {
            heading: "Try it".into(),
            lines: vec!["one".into()],
        };
        assert_eq!(lines(&spec, &Theme::default()).len(), height(&spec) as usize);
        assert_eq!(height(&spec), 4);
    }
}
