//! # Swatch Engine
//!
//! Pure state for the creative board. Nothing in this crate performs I/O;
//! the terminal front-end owns a [`BoardState`] and feeds it user intents and
//! the palette fetch result.
//!
//! ## Architecture
//!
//! - **`store`**: [`CreativeStore`] holds the draft, the committed creatives
//!   and the session palette, and enforces the five-creative cap.
//! - **`filter`**: [`FilterEngine`] and the pure [`visible_creatives`]
//!   function that narrows the list by color and search text.
//! - **`board`**: [`BoardState`] composes the two with editor visibility and
//!   palette load status.
//!
//! ```rust
//! use swatch_engine::BoardState;
//! use swatch_types::Color;
//!
//! let mut board = BoardState::new();
//! board.palette_loaded(Ok(vec![Color::from("#FF0000")]));
//! board.open_editor();
//! board.store.set_draft_title("Launch");
//! board.store.set_draft_subtitle("Spring campaign");
//! board.store.set_draft_color(Color::from("#FF0000"))?;
//! board.submit()?;
//! assert_eq!(board.store.progress_percent(), 20);
//! assert!(!board.editor_open);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod filter;
pub mod store;

pub use board::{BoardState, PaletteStatus};
pub use filter::{FilterEngine, visible_creatives};
pub use store::{CreativeStore, DraftError, SubmitError};
