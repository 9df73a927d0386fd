//! Theme styling for the page player.
//!
//! Semantic color roles plus style builders for the widgets the page uses.
//! Prefer these helpers over hard-coding colors so the sections stay
//! consistent. The palette sticks to the 16 base ANSI colors so it renders
//! the same on truecolor and legacy terminals.

use ratatui::style::{Color, Modifier, Style};

use marquee_engine::{ArrowVisual, StepVisual};

/// Semantic color roles used throughout the page.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub text: Color,
    pub text_muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub success: Color,
    pub border: Color,
    pub bar_filled: Color,
    pub bar_empty: Color,
}

/// Style builders over the semantic roles.
#[derive(Debug, Clone)]
pub struct Theme {
    roles: ThemeRoles,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                text: Color::Gray,
                text_muted: Color::DarkGray,
                heading: Color::White,
                accent: Color::Cyan,
                success: Color::Green,
                border: Color::DarkGray,
                bar_filled: Color::Cyan,
                bar_empty: Color::DarkGray,
            },
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.roles.heading).add_modifier(Modifier::BOLD)
    }

    pub fn hero_headline(&self) -> Style {
        Style::default().fg(self.roles.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.roles.border)
    }

    pub fn bar_filled(&self) -> Style {
        Style::default().fg(self.roles.bar_filled)
    }

    pub fn bar_empty(&self) -> Style {
        Style::default().fg(self.roles.bar_empty)
    }

    /// Style of the big counter value line.
    pub fn counter_value(&self) -> Style {
        Style::default().fg(self.roles.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for a step row in the given presentation state.
    pub fn step_style(&self, visual: StepVisual) -> Style {
        match visual {
            StepVisual::Upcoming => self.text_muted(),
            StepVisual::Active => Style::default().fg(self.roles.accent).add_modifier(Modifier::BOLD),
            StepVisual::Completed => Style::default().fg(self.roles.success),
        }
    }

    /// Style for a connector arrow in the given presentation state.
    ///
    /// A hidden arrow still renders (blank) so section heights never move.
    pub fn arrow_style(&self, visual: ArrowVisual) -> Style {
        match visual {
            ArrowVisual::Hidden => self.text_muted().add_modifier(Modifier::DIM),
            ArrowVisual::Revealed => self.text_muted(),
            ArrowVisual::Active => Style::default().fg(self.roles.accent),
        }
    }
}
