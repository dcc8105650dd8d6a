//! Screen geometry for the board and the editor drawer.

use ratatui::prelude::*;

/// Narrowest the drawer is allowed to get before it takes the full width.
const MIN_DRAWER_WIDTH: u16 = 40;

pub(crate) struct MainLayout;

impl MainLayout {
    /// Split the whole screen into the body and a one-line hint strip.
    pub fn screen(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area)
    }

    /// Board sections, top to bottom: filter row, search box, progress bar,
    /// add button, preview list.
    pub fn board_sections(area: Rect) -> [Rect; 5] {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area)
    }

    /// Right-anchored drawer covering the full height of `area`.
    pub fn drawer(area: Rect) -> Rect {
        let width = (area.width.saturating_mul(45) / 100).max(MIN_DRAWER_WIDTH).min(area.width);
        Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: area.height,
        }
    }
}
