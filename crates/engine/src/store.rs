//! Draft editing and creative submission.
//!
//! [`CreativeStore`] owns the in-progress [`Draft`], the committed creatives
//! and the session [`Palette`]. Validity and progress are derived on demand
//! from the current fields, so a reader always sees the state left by the most
//! recent mutation.

use swatch_types::{Color, Creative, Draft, MAX_CREATIVES, Palette};
use thiserror::Error;
use tracing::debug;

/// Rejected draft edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The color is not part of the session palette.
    #[error("color '{0}' is not in the palette")]
    ColorNotInPalette(Color),
}

/// Rejected submission. No state was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Title or subtitle is blank, or no color has been picked.
    #[error("draft is incomplete")]
    InvalidDraft,
    /// The list already holds the maximum number of creatives.
    #[error("creative list is full ({MAX_CREATIVES} of {MAX_CREATIVES})")]
    ListFull,
}

#[derive(Debug, Clone, Default)]
pub struct CreativeStore {
    draft: Draft,
    creatives: Vec<Creative>,
    palette: Palette,
    palette_installed: bool,
}

impl CreativeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the session palette. Only the first call has an effect.
    pub fn install_palette(&mut self, colors: Vec<Color>) -> bool {
        if self.palette_installed {
            debug!("palette already installed; ignoring replacement");
            return false;
        }
        self.palette = Palette::new(colors);
        self.palette_installed = true;
        debug!(count = self.palette.len(), "palette installed");
        true
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn creatives(&self) -> &[Creative] {
        &self.creatives
    }

    pub fn len(&self) -> usize {
        self.creatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatives.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.creatives.len() >= MAX_CREATIVES
    }

    /// Replace the draft title verbatim.
    pub fn set_draft_title(&mut self, text: impl Into<String>) {
        self.draft.title = text.into();
    }

    /// Replace the draft subtitle verbatim.
    pub fn set_draft_subtitle(&mut self, text: impl Into<String>) {
        self.draft.subtitle = text.into();
    }

    /// Pick the draft color. The color must belong to the palette.
    pub fn set_draft_color(&mut self, color: Color) -> Result<(), DraftError> {
        if !self.palette.contains(&color) {
            return Err(DraftError::ColorNotInPalette(color));
        }
        self.draft.color = Some(color);
        Ok(())
    }

    pub fn clear_draft_color(&mut self) {
        self.draft.color = None;
    }

    /// True iff title and subtitle are non-blank and a color is picked.
    pub fn is_draft_valid(&self) -> bool {
        !self.draft.title.trim().is_empty() && !self.draft.subtitle.trim().is_empty() && self.draft.color.is_some()
    }

    /// Whether a submit would currently succeed.
    pub fn can_submit(&self) -> bool {
        self.is_draft_valid() && !self.is_full()
    }

    /// Commit a snapshot of the draft and reset it.
    ///
    /// Callers are expected to disable their submit control whenever
    /// [`can_submit`](Self::can_submit) is false; reaching an error here is a
    /// caller bug and is only logged.
    pub fn submit(&mut self) -> Result<Creative, SubmitError> {
        if self.is_full() {
            debug!(len = self.creatives.len(), "submit rejected: list full");
            return Err(SubmitError::ListFull);
        }
        let Some(color) = self.draft.color.clone().filter(|_| self.is_draft_valid()) else {
            debug!("submit rejected: draft invalid");
            return Err(SubmitError::InvalidDraft);
        };

        let creative = Creative {
            title: self.draft.title.clone(),
            subtitle: self.draft.subtitle.clone(),
            color,
        };
        self.creatives.push(creative.clone());
        self.draft = Draft::default();
        debug!(len = self.creatives.len(), "creative submitted");
        Ok(creative)
    }

    /// `100 * len / 5`, i.e. one of 0, 20, 40, 60, 80, 100.
    pub fn progress_percent(&self) -> u16 {
        (self.creatives.len() * 100 / MAX_CREATIVES) as u16
    }
}
