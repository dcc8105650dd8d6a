//! Shared type definitions for Swatch.
//!
//! The data model (colors, drafts, creatives, palettes) lives next to the
//! message and effect enums so the engine, the API client, and the TUI can
//! talk about the same values without depending on one another.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of creatives a session can hold.
pub const MAX_CREATIVES: usize = 5;

/// Opaque background color token such as `#FF0000` or `teal`.
///
/// The core only compares colors for equality; interpreting the value for
/// painting is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The entry currently being composed in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Title text exactly as typed
    pub title: String,
    /// Subtitle text exactly as typed
    pub subtitle: String,
    /// Chosen background color, if any
    pub color: Option<Color>,
}

impl Draft {
    /// True when nothing has been entered or picked.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.subtitle.is_empty() && self.color.is_none()
    }
}

/// A committed entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creative {
    pub title: String,
    pub subtitle: String,
    pub color: Color,
}

/// Ordered set of colors available for selection during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.0.iter().any(|candidate| candidate == color)
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.0.get(index)
    }

    pub fn position(&self, color: &Color) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == color)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Overlays that can be shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// The creative editor drawer
    Editor,
}

/// Result of a background task, delivered back to the event loop.
#[derive(Debug, Clone)]
pub enum ExecOutcome {
    /// The startup palette fetch finished; `Err` carries a log-friendly reason
    PaletteFetched(Result<Vec<Color>, String>),
}

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (e.g., throbbers)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Background execution completed with outcome
    ExecCompleted(Box<ExecOutcome>),
}

/// Side effects requested by state changes and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one-shot palette request
    FetchPalette,
    /// Open an overlay
    ShowModal(Modal),
    /// Close whichever overlay is open
    CloseModal,
    /// Leave the application
    Quit,
}
