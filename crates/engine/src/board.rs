//! Board state: the single owned container for everything the view shows.
//!
//! The terminal app keeps exactly one [`BoardState`] and routes every user
//! intent through its methods. Mutations are synchronous and applied in call
//! order; the palette fetch result arrives as one more call.

use swatch_types::{Color, Creative, MAX_CREATIVES};
use tracing::{info, warn};

use crate::filter::FilterEngine;
use crate::store::{CreativeStore, SubmitError};

/// Progress of the one-shot palette fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub store: CreativeStore,
    pub filter: FilterEngine,
    /// Whether the editor drawer is showing
    pub editor_open: bool,
    pub palette_status: PaletteStatus,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the palette fetch result. Only the first result is accepted.
    pub fn palette_loaded(&mut self, result: Result<Vec<Color>, String>) {
        if self.palette_status != PaletteStatus::Pending {
            warn!("palette result arrived after the palette was settled; discarding");
            return;
        }
        match result {
            Ok(colors) => {
                info!(count = colors.len(), "palette loaded");
                self.store.install_palette(colors);
                self.palette_status = PaletteStatus::Loaded;
            }
            Err(reason) => {
                warn!(%reason, "palette fetch failed; continuing with an empty palette");
                self.palette_status = PaletteStatus::Failed;
            }
        }
    }

    /// The add control is disabled while the editor is open or the list is full.
    pub fn can_open_editor(&self) -> bool {
        !self.editor_open && !self.store.is_full()
    }

    /// Returns whether the editor was opened by this call.
    pub fn open_editor(&mut self) -> bool {
        if !self.can_open_editor() {
            return false;
        }
        self.editor_open = true;
        true
    }

    /// Hide the editor. The draft is kept for the next time it opens.
    pub fn close_editor(&mut self) {
        self.editor_open = false;
    }

    pub fn toggle_editor(&mut self) {
        if self.editor_open {
            self.close_editor();
        } else {
            self.open_editor();
        }
    }

    /// Submit the draft; on success the editor closes.
    pub fn submit(&mut self) -> Result<Creative, SubmitError> {
        let creative = self.store.submit()?;
        self.editor_open = false;
        Ok(creative)
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {} Creatives", self.store.len(), MAX_CREATIVES)
    }

    /// Creatives that pass the active color filter and search.
    pub fn visible(&self) -> Vec<&Creative> {
        self.filter.visible(self.store.creatives())
    }
}
