//! Component system for the Swatch TUI.
//!
//! Components are self-contained UI elements that handle their own key
//! events, mutate the shared [`App`] state, and render themselves into a
//! provided `Rect`. Anything that must happen outside the component (opening
//! the editor drawer, quitting, network calls) is reported back as an
//! [`Effect`].

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use swatch_types::{Effect, Msg};

use crate::app::App;

/// A UI component with its own behavior and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: `handle_key_events()` receives keys while the
///    component is active
/// 2. **Messages**: `handle_message()` reacts to application-wide messages
/// 3. **Rendering**: `render()` draws the component into the frame area
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component is active.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
