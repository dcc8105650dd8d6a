//! # Command Execution Layer
//!
//! Translates application effects ([`Effect`]) into imperative commands
//! ([`Cmd`]) and starts them. This is the boundary where the synchronous
//! board state meets the network.
//!
//! ## Design
//! - [`from_effects`] turns state-driven effects into commands, dropping
//!   requests that must only happen once.
//! - [`run_cmds`] spawns each command on the Tokio runtime and hands back the
//!   join handles; the event loop polls them and feeds the resulting
//!   [`ExecOutcome`] back as a message.

use std::sync::Arc;

use swatch_api::PaletteSource;
use swatch_types::{Effect, ExecOutcome};
use tokio::task::{JoinHandle, spawn};
use tracing::{debug, warn};

use crate::app::App;

/// Side-effectful work executed outside of state updates.
pub enum Cmd {
    /// Fetch the session palette from the given source.
    FetchPalette(Arc<dyn PaletteSource>),
}

/// Handles for commands still running in the background.
#[derive(Default)]
pub struct CommandBatch {
    pub pending: Vec<JoinHandle<ExecOutcome>>,
}

/// Convert effects into commands.
///
/// The palette is requested at most once per session; later
/// `FetchPalette` effects are ignored. Navigation effects are handled by the
/// runtime and never reach this function.
pub fn from_effects(app: &mut App, effects: Vec<Effect>) -> Vec<Cmd> {
    let mut commands = Vec::new();
    for effect in effects {
        match effect {
            Effect::FetchPalette => {
                if app.palette_requested {
                    debug!("palette already requested; ignoring");
                    continue;
                }
                app.palette_requested = true;
                commands.push(Cmd::FetchPalette(Arc::clone(&app.ctx.palette_source)));
            }
            other => warn!(effect = ?other, "effect has no command"),
        }
    }
    commands
}

/// Spawn each command and collect the handles.
pub fn run_cmds(commands: Vec<Cmd>) -> CommandBatch {
    let mut batch = CommandBatch::default();
    for command in commands {
        match command {
            Cmd::FetchPalette(source) => batch.pending.push(spawn(fetch_palette(source))),
        }
    }
    batch
}

pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) -> CommandBatch {
    run_cmds(from_effects(app, effects))
}

async fn fetch_palette(source: Arc<dyn PaletteSource>) -> ExecOutcome {
    let result = source.fetch_palette().await.map_err(|error| error.to_string());
    ExecOutcome::PaletteFetched(result)
}
