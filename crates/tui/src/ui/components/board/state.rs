use swatch_types::{Color, Palette};

use crate::ui::components::common::TextInputState;

/// Focusable regions of the board, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardFocus {
    #[default]
    Filters,
    Search,
    AddButton,
}

impl BoardFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Filters => Self::Search,
            Self::Search => Self::AddButton,
            Self::AddButton => Self::Filters,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Filters => Self::AddButton,
            Self::Search => Self::Filters,
            Self::AddButton => Self::Search,
        }
    }
}

/// View-only state of the board screen.
///
/// The filter row shows an "All" entry followed by every palette color, so
/// cursor position `0` means "no filter" and `n` means `palette[n - 1]`.
#[derive(Debug, Clone, Default)]
pub struct BoardViewState {
    pub focus: BoardFocus,
    pub search: TextInputState,
    filter_cursor: usize,
}

impl BoardViewState {
    pub fn filter_cursor(&self) -> usize {
        self.filter_cursor
    }

    /// Move the filter cursor by `delta`, wrapping over "All" plus the palette.
    pub fn move_filter_cursor(&mut self, delta: isize, palette_len: usize) {
        let entries = palette_len as isize + 1;
        self.filter_cursor = (self.filter_cursor as isize + delta).rem_euclid(entries) as usize;
    }

    /// Color under the filter cursor; `None` for the "All" entry.
    pub fn filter_target(&self, palette: &Palette) -> Option<Color> {
        self.filter_cursor.checked_sub(1).and_then(|index| palette.get(index)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let focus = BoardFocus::default();
        assert_eq!(focus.next().next().next(), focus);
        assert_eq!(focus.prev(), BoardFocus::AddButton);
    }

    #[test]
    fn filter_cursor_wraps_over_all_entry() {
        let palette = Palette::new(vec![Color::from("#FF0000"), Color::from("#00FF00")]);
        let mut state = BoardViewState::default();
        assert_eq!(state.filter_target(&palette), None);

        state.move_filter_cursor(1, palette.len());
        assert_eq!(state.filter_target(&palette), Some(Color::from("#FF0000")));
        state.move_filter_cursor(1, palette.len());
        state.move_filter_cursor(1, palette.len());
        assert_eq!(state.filter_cursor(), 0);
        state.move_filter_cursor(-1, palette.len());
        assert_eq!(state.filter_target(&palette), Some(Color::from("#00FF00")));
    }

    #[test]
    fn empty_palette_keeps_cursor_on_all() {
        let mut state = BoardViewState::default();
        state.move_filter_cursor(1, 0);
        assert_eq!(state.filter_cursor(), 0);
    }
}
