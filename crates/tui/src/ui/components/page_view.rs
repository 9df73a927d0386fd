//! The page view: assembles sections into one scrollable column.
//!
//! Sections emit fixed-height line blocks; the page view stacks them in
//! order, applies the viewport's row offset, and routes scroll keys. The
//! same layout arithmetic feeds the visibility watcher, so what the math
//! says is 30% visible is exactly what the terminal shows.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};

use marquee_types::{Effect, PageSpec, Region};

use crate::app::App;
use crate::ui::components::{closing, counters_section, hero, workflow_section};
use crate::ui::components::component::Component;
use crate::ui::viewport::SectionSpan;

/// Blank rows above the first section.
const TOP_PADDING: u16 = 1;

/// Computes the page's total height and the animated sections' row spans.
///
/// Must mirror the stacking order in [`PageView::build_lines`]; the
/// watcher's visibility ratios are only as honest as this arithmetic.
pub fn page_layout(page: &PageSpec) -> (u16, Vec<(Region, SectionSpan)>) {
    let mut cursor = TOP_PADDING;
    let mut spans = Vec::new();
    if let Some(spec) = &page.hero {
        cursor += hero::height(spec);
    }
    if let Some(spec) = &page.workflow {
        let rows = workflow_section::height(spec);
        spans.push((Region::Workflow, SectionSpan { start_row: cursor, rows }));
        cursor += rows;
    }
    if let Some(spec) = &page.counters {
        let rows = counters_section::height(spec);
        spans.push((Region::Counters, SectionSpan { start_row: cursor, rows }));
        cursor += rows;
    }
    if let Some(spec) = &page.closing {
        cursor += closing::height(spec);
    }
    (cursor, spans)
}

/// Root component: renders the whole page and owns scroll input.
#[derive(Debug, Default)]
pub struct PageView;

impl PageView {
    /// Stacks every section's lines in page order.
    fn build_lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let mut rows: Vec<Line<'static>> = Vec::new();
        for _ in 0..TOP_PADDING {
            rows.push(Line::default());
        }
        if let Some(spec) = &app.page.hero {
            rows.extend(hero::lines(spec, theme));
        }
        if let (Some(spec), Some(animator)) = (&app.page.workflow, &app.workflow) {
            rows.extend(workflow_section::lines(spec, animator, theme, width));
        }
        if let (Some(spec), Some(group)) = (&app.page.counters, &app.counters) {
            rows.extend(counters_section::lines(spec, group, theme, width));
        }
        if let Some(spec) = &app.page.closing {
            rows.extend(closing::lines(spec, theme));
        }
        debug_assert_eq!(rows.len() as u16, app.viewport.page_rows());
        rows
    }
}

impl Component for PageView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return vec![Effect::Quit],
            KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(true),
            KeyCode::PageUp => app.scroll_page(false),
            KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let block = Block::bordered()
            .title(Line::styled(format!(" {} ", app.page.title), app.theme.heading()))
            .title_bottom(
                Line::styled(" ↑/↓ scroll · q quit ", app.theme.text_muted()).right_aligned(),
            )
            .border_style(app.theme.border());
        let inner = block.inner(rect);
        let lines = Self::build_lines(app, inner.width);
        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .scroll((app.viewport.scroll_row(), 0));
        frame.render_widget(paragraph, rect);
    }
}
