//! Counters section: the numeric value-proposition row.
//!
//! Counter displays are laid out in equal-width columns, values above
//! labels. The engine replaces each display string wholesale every frame;
//! this module only formats columns.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use marquee_engine::CounterGroup;
use marquee_types::CountersSectionSpec;

use crate::ui::theme::Theme;

/// Rows the section occupies. Must match what [`lines`] produces.
pub fn height(_spec: &CountersSectionSpec) -> u16 {
    // heading, gap, values, labels, trailing gap.
    6
}

/// Builds the section's rows from the counter group's current values.
pub fn lines(
    spec: &CountersSectionSpec,
    group: &CounterGroup,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut rows = Vec::with_capacity(height(spec) as usize);
    rows.push(Line::styled(spec.heading.clone(), theme.heading()));
    rows.push(Line::default());

    let count = group.counters().len().max(1);
    let column = (usize::from(width) / count).max(1);
    let values = group
        .counters()
        .iter()
        .map(|tween| Span::styled(centered(&tween.display(), column), theme.counter_value()))
        .collect::<Vec<_>>();
    rows.push(Line::from(values));
    let labels = group
        .counters()
        .iter()
        .map(|tween| Span::styled(centered(&tween.spec().label, column), theme.text_muted()))
        .collect::<Vec<_>>();
    rows.push(Line::from(labels));

    rows.push(Line::default());
    rows.push(Line::default());
    debug_assert_eq!(rows.len(), height(spec) as usize);
    rows
}

/// Pads `text` to `width` terminal cells, centered. Measured with display
/// width, not char count, so CJK and other wide glyphs keep the columns
/// aligned. Longer text is left as-is.
fn centered(text: &str, width: usize) -> String {
    let cells = text.width();
    if cells >= width {
        return text.to_string();
    }
    let left = (width - cells) / 2;
    let right = width - cells - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_types::CounterSpec;

    #[test]
    fn height_matches_emitted_lines() {
        let spec = CountersSectionSpec {
            heading: "By the numbers".into(),
            counters: vec![CounterSpec::default(), CounterSpec::default()],
        };
        let group = CounterGroup::new(spec.counters.clone(), false);
        let theme = Theme::default();
        assert_eq!(lines(&spec, &group, &theme, 60).len(), height(&spec) as usize);
    }

    #[test]
    fn values_render_in_columns() {
        let spec = CountersSectionSpec {
            heading: "Numbers".into(),
            counters: vec![
                CounterSpec {
                    target: 1000.0,
                    prefix: "$".into(),
                    ..CounterSpec::default()
                },
                CounterSpec {
                    target: 99.0,
                    suffix: "%".into(),
                    ..CounterSpec::default()
                },
            ],
        };
        let mut group = CounterGroup::new(spec.counters.clone(), true);
        group.trigger(0);
        group.tick(16);
        let theme = Theme::default();
        let rows = lines(&spec, &group, &theme, 40);
        let values: String = rows[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(values.contains("$1000"));
        assert!(values.contains("99%"));
    }

    #[test]
    fn centering_pads_to_column_width() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("abc", 6), " abc  ");
        assert_eq!(centered("toolong", 3), "toolong");
    }

    #[test]
    fn centering_uses_display_width_for_wide_glyphs() {
        // Two CJK chars occupy four terminal cells, so a 6-cell column
        // leaves one cell of padding on each side.
        let padded = centered("漢字", 6);
        assert_eq!(padded, " 漢字 ");
        assert_eq!(padded.width(), 6);
        assert_eq!(centered("漢字広告", 6), "漢字広告");
    }
}
