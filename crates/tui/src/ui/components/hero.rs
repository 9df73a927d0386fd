//! Hero section: static headline copy at the top of the page.

use ratatui::text::Line;

use marquee_types::HeroSpec;

use crate::ui::theme::Theme;

/// Rows the hero occupies. Must match what [`lines`] produces.
pub fn height(spec: &HeroSpec) -> u16 {
    4 + spec.lines.len() as u16
}

/// Builds the hero's rows: headline, tagline, body copy, trailing gap.
pub fn lines(spec: &HeroSpec, theme: &Theme) -> Vec<Line<'static>> {
    let mut rows = Vec::with_capacity(height(spec) as usize);
    rows.push(Line::styled(spec.headline.clone(), theme.hero_headline()));
    rows.push(Line::styled(spec.tagline.clone(), theme.text()));
    rows.push(Line::default());
    for body in &spec.lines {
        rows.push(Line::styled(body.clone(), theme.text_muted()));
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
        let spec = HeroSpec {
            headline: "Hello".into(),
            tagline: "World".into(),
            lines: vec!["a".into(), "b".into(), "c".into()],
        };
        let theme = Theme::default();
        assert_eq!(lines(&spec, &theme).len(), height(&spec) as usize);
        assert_eq!(height(&spec), 7);
    }
}
