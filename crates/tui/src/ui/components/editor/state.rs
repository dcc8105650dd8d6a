use swatch_types::{Draft, Palette};

use crate::ui::components::common::TextInputState;

/// Fields of the editor drawer, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Subtitle,
    Colors,
    Done,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Subtitle,
            Self::Subtitle => Self::Colors,
            Self::Colors => Self::Done,
            Self::Done => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Done,
            Self::Subtitle => Self::Title,
            Self::Colors => Self::Subtitle,
            Self::Done => Self::Colors,
        }
    }
}

/// Input buffers and focus for the editor drawer. The draft itself lives in
/// the store; these buffers mirror it so the cursor survives re-renders.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub focus: EditorField,
    pub title: TextInputState,
    pub subtitle: TextInputState,
    swatch_cursor: usize,
}

impl EditorState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Refill the buffers from a (possibly half-finished) draft.
    pub fn sync_from_draft(&mut self, draft: &Draft, palette: &Palette) {
        self.focus = EditorField::Title;
        self.title.set_input(draft.title.clone());
        self.subtitle.set_input(draft.subtitle.clone());
        self.swatch_cursor = draft.color.as_ref().and_then(|color| palette.position(color)).unwrap_or(0);
    }

    pub fn swatch_cursor(&self) -> usize {
        self.swatch_cursor
    }

    pub fn move_swatch_cursor(&mut self, delta: isize, palette_len: usize) {
        if palette_len == 0 {
            self.swatch_cursor = 0;
            return;
        }
        self.swatch_cursor = (self.swatch_cursor as isize + delta).rem_euclid(palette_len as isize) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_types::Color;

    #[test]
    fn sync_restores_draft_and_cursor() {
        let palette = Palette::new(vec![Color::from("#FF0000"), Color::from("#00FF00")]);
        let draft = Draft {
            title: "Launch".into(),
            subtitle: "Spring".into(),
            color: Some(Color::from("#00FF00")),
        };
        let mut state = EditorState {
            focus: EditorField::Done,
            ..EditorState::default()
        };
        state.sync_from_draft(&draft, &palette);
        assert_eq!(state.focus, EditorField::Title);
        assert_eq!(state.title.input(), "Launch");
        assert_eq!(state.subtitle.input(), "Spring");
        assert_eq!(state.swatch_cursor(), 1);
    }

    #[test]
    fn swatch_cursor_wraps() {
        let mut state = EditorState::default();
        state.move_swatch_cursor(-1, 3);
        assert_eq!(state.swatch_cursor(), 2);
        state.move_swatch_cursor(1, 3);
        assert_eq!(state.swatch_cursor(), 0);
        state.move_swatch_cursor(1, 0);
        assert_eq!(state.swatch_cursor(), 0);
    }
}
