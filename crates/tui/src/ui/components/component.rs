//! Component abstraction for the page player.
//!
//! Components own local UI behavior and state, handle the input and
//! messages that concern them, and render into a provided `Rect`,
//! reporting side effects back to the runtime as `Effect`s rather than
//! mutating global state directly.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use marquee_types::Effect;

use crate::app::App;

/// A UI element with its own state and behavior.
pub trait Component {
    /// Handle a key event when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
