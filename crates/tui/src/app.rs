//! Application state for the Swatch TUI.
//!
//! [`App`] owns the board (store, filter, editor visibility, palette status)
//! plus the view-only state the components need between frames. Components
//! mutate it in response to keys; background results arrive through
//! [`App::update`].

use std::sync::Arc;

use swatch_api::PaletteSource;
use swatch_engine::{BoardState, PaletteStatus};
use swatch_types::{Effect, ExecOutcome, Msg};
use tracing::debug;

use crate::ui::components::board::BoardViewState;
use crate::ui::components::editor::EditorState;
use crate::ui::theme::{self, Theme};

const THROBBER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Cross-cutting shared context owned by the App.
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Where the startup palette comes from
    pub palette_source: Arc<dyn PaletteSource>,
}

pub struct App {
    pub ctx: SharedCtx,
    pub board: BoardState,
    pub board_view: BoardViewState,
    pub editor: EditorState,
    /// Set once the palette request has been issued
    pub palette_requested: bool,
    throbber_idx: usize,
}

impl App {
    pub fn new(palette_source: Arc<dyn PaletteSource>) -> Self {
        Self {
            ctx: SharedCtx {
                theme: theme::load_from_env(),
                palette_source,
            },
            board: BoardState::new(),
            board_view: BoardViewState::default(),
            editor: EditorState::default(),
            palette_requested: false,
            throbber_idx: 0,
        }
    }

    /// Effects to run before the first frame.
    pub fn init(&mut self) -> Vec<Effect> {
        vec![Effect::FetchPalette]
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                if self.is_animating() {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER_FRAMES.len();
                }
            }
            Msg::Resize(width, height) => debug!(width, height, "terminal resized"),
            Msg::ExecCompleted(outcome) => match outcome.as_ref() {
                ExecOutcome::PaletteFetched(result) => self.board.palette_loaded(result.clone()),
            },
        }
        Vec::new()
    }

    /// True while something on screen animates.
    pub fn is_animating(&self) -> bool {
        self.board.palette_status == PaletteStatus::Pending
    }

    pub fn throbber(&self) -> &'static str {
        THROBBER_FRAMES[self.throbber_idx]
    }
}
