//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input, animation ticks, and the
//!   palette fetch.
//! - Route keys to the active component and execute returned `Effect`s.
//!
//! Ticking strategy
//! - Fast interval (100 ms) while the palette is loading so the throbber
//!   spins; long interval (5 s) once it settles.
//!
//! Entry Point
//! - `run_app(palette_source)` is called from `lib::run` and performs setup,
//!   event processing, and teardown. Terminal state is restored even when
//!   the loop fails.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, prelude::*};
use swatch_api::PaletteSource;
use swatch_types::{Effect, ExecOutcome, Msg};
use tokio::task::JoinHandle;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::main_component::MainView;

type TerminalBackend = CrosstermBackend<std::io::Stdout>;

/// Spawn a dedicated input thread that polls the terminal and forwards
/// `crossterm` events over a Tokio channel.
///
/// `poll()` and `read()` stay on the same blocking thread. The thread exits
/// once the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        while !sender.is_closed() {
            match event::poll(sixteen_ms) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to poll for events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<TerminalBackend>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<TerminalBackend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<TerminalBackend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the async event loop, and performs cleanup on exit.
pub async fn run_app(palette_source: Arc<dyn PaletteSource>) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut app = App::new(palette_source);
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    info!(creatives = app.board.store.len(), "session ended");
    result
}

async fn event_loop(
    terminal: &mut Terminal<TerminalBackend>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut pending_execs: FuturesUnordered<JoinHandle<ExecOutcome>> = FuturesUnordered::new();
    let mut effects = app.init();
    if process_effects(app, main_view, &mut effects, &mut pending_execs) == LoopControl::Exit {
        return Ok(());
    }

    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    loop {
        let needs_animation = app.is_animating();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                effects.extend(handle_input_event(app, main_view, event));
                true
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(app, Msg::Tick));
                needs_animation
            }

            Some(joined) = pending_execs.next(), if !pending_execs.is_empty() => {
                let outcome = joined
                    .unwrap_or_else(|error| ExecOutcome::PaletteFetched(Err(format!("palette task failed: {error}"))));
                effects.extend(main_view.handle_message(app, Msg::ExecCompleted(Box::new(outcome))));
                true
            }

            _ = signal::ctrl_c() => { break; }
        };

        if !effects.is_empty() {
            needs_render = true;
            if process_effects(app, main_view, &mut effects, &mut pending_execs) == LoopControl::Exit {
                break;
            }
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Apply navigation effects in place and start commands for the rest.
fn process_effects(
    app: &mut App,
    main_view: &mut MainView,
    effects: &mut Vec<Effect>,
    pending_execs: &mut FuturesUnordered<JoinHandle<ExecOutcome>>,
) -> LoopControl {
    let navigation_effects = effects
        .extract_if(.., |effect| matches!(effect, Effect::ShowModal(_) | Effect::CloseModal | Effect::Quit))
        .collect::<Vec<Effect>>();

    let mut control = LoopControl::Continue;
    for effect in navigation_effects {
        match effect {
            Effect::ShowModal(modal) => main_view.set_open_modal_kind(app, Some(modal)),
            Effect::CloseModal => main_view.set_open_modal_kind(app, None),
            Effect::Quit => control = LoopControl::Exit,
            _ => {}
        }
    }

    let command_batch = cmd::run_from_effects(app, std::mem::take(effects));
    pending_execs.extend(command_batch.pending);
    control
}
