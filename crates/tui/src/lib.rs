//! # Swatch TUI
//!
//! Terminal front-end for the creative board. The user picks a background
//! color from a fetched palette, fills in a title and subtitle in the editor
//! drawer, and submits up to five creatives that appear in a filterable
//! preview list.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture: the board and the editor
//! drawer are separate components that handle key events, mutate the shared
//! [`swatch_engine::BoardState`] owned by the app, and report side effects
//! (`Effect`) back to the runtime. The runtime turns effects into commands,
//! runs the one background task (the palette fetch), and feeds results back
//! as messages.

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use swatch_api::PaletteSource;

/// Runs the main TUI application loop until the user quits.
///
/// # Errors
///
/// Terminal setup or teardown failures (raw mode, alternate screen) and
/// drawing errors are returned to the caller.
pub async fn run(palette_source: Arc<dyn PaletteSource>) -> Result<()> {
    ui::runtime::run_app(palette_source).await
}
