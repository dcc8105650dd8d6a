//! Narrowing the creative list for display.
//!
//! Filtering is always recomputed from the full list; nothing is cached
//! between calls.

use swatch_types::{Color, Creative};

/// The ordered subsequence of `list` whose color equals `selection`.
///
/// With no selection every creative is returned in its original order.
pub fn visible_creatives<'a>(list: &'a [Creative], selection: Option<&Color>) -> Vec<&'a Creative> {
    match selection {
        None => list.iter().collect(),
        Some(color) => list.iter().filter(|creative| &creative.color == color).collect(),
    }
}

/// Case-insensitive substring match over title and subtitle.
fn matches_query(creative: &Creative, needle: &str) -> bool {
    creative.title.to_lowercase().contains(needle) || creative.subtitle.to_lowercase().contains(needle)
}

/// Color filter plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    selection: Option<Color>,
    query: String,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Color> {
        self.selection.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the color filter; `None` shows every color.
    pub fn set_filter(&mut self, selection: Option<Color>) {
        self.selection = selection;
    }

    /// Select `color`, or clear the filter when it is already selected.
    pub fn toggle_filter(&mut self, color: Color) {
        if self.selection.as_ref() == Some(&color) {
            self.selection = None;
        } else {
            self.selection = Some(color);
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Creatives passing both the color filter and the search text.
    ///
    /// A blank query does not narrow the result.
    pub fn visible<'a>(&self, list: &'a [Creative]) -> Vec<&'a Creative> {
        let by_color = visible_creatives(list, self.selection.as_ref());
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return by_color;
        }
        by_color.into_iter().filter(|creative| matches_query(creative, &needle)).collect()
    }
}
