//! Reusable UTF-8 safe text input state with cursor management.
//!
//! Shared by the editor's title/subtitle fields and the board's search box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Display columns before the cursor, for terminal cursor placement.
    pub fn cursor_columns(&self) -> usize {
        self.input[..self.cursor].width()
    }

    // ----- Setters -----
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        let start = self.cursor - prev;
        self.input.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Apply an editing key. Returns `true` when the text changed.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                let before = self.input.len();
                self.backspace();
                before != self.input.len()
            }
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.input.len();
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::default();
        st.set_input("h🙂llo");
        st.cursor = 1;
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right();
        st.backspace();
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn cursor_columns_count_wide_characters() {
        let mut st = TextInputState::default();
        st.set_input("日本");
        assert_eq!(st.cursor_columns(), 4);
        st.move_left();
        assert_eq!(st.cursor_columns(), 2);
        st.insert_char('a');
        assert_eq!(st.cursor_columns(), 3);
    }

    #[test]
    fn edit_keys_report_changes() {
        let mut st = TextInputState::default();
        assert!(st.handle_edit_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(st.handle_edit_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT)));
        assert!(!st.handle_edit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!st.handle_edit_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
        assert_eq!(st.cursor_columns(), 1);
        assert!(st.handle_edit_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
        assert_eq!(st.input(), "B");
        st.clear();
        assert!(!st.handle_edit_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
    }
}
