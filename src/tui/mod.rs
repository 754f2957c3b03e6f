//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle** (question, finished, failed): sleeps up to 500ms and only
//!   redraws on input, resize or a fetch result.
//!
//! ## Fetches
//!
//! Each fetch runs on a tokio task and reports back over an mpsc channel
//! as `Action::BatchLoaded` / `Action::FetchFailed`, tagged with the
//! generation it was started for. A restart aborts the previous task; the
//! reducer drops any result that still slips through.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{Phase, QuizSession};
use crate::questions::{QuestionSource, TriviaApiSource};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the question source from resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn QuestionSource> {
    Arc::new(TriviaApiSource::new(
        Some(config.api_url.clone()),
        config.query.clone(),
        config.timeout,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut session = QuizSession::new(config.two_step);
    info!(
        "Starting quiz: source={}, two_step={}",
        source.name(),
        session.two_step
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    let mut active_fetch =
        Some(spawn_fetch(source.clone(), session.generation, tx.clone()).abort_handle());

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = session.phase() == Phase::Loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut effects = Vec::new();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    ui::hit_test_choice(column, row, frame_area, &session)
                        .and_then(|index| session.shuffled_choices.get(index).cloned())
                        .map(Action::SelectAnswer)
                }
                other => event_to_action(other, &session),
            };
            if let Some(action) = action {
                debug!("Dispatching {:?}", action);
                effects.push(update(&mut session, action));
            }
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!(
                "Event loop received fetch result: {}",
                describe_fetch_action(&action)
            );
            effects.push(update(&mut session, action));
        }

        for effect in effects {
            match effect {
                Effect::None => {}
                Effect::Quit => should_quit = true,
                Effect::Fetch(generation) => {
                    if let Some(handle) = active_fetch.take() {
                        handle.abort();
                    }
                    active_fetch =
                        Some(spawn_fetch(source.clone(), generation, tx.clone()).abort_handle());
                }
            }
        }
    }

    info!("Quitting with score {}", session.score);
    ratatui::restore();
    Ok(())
}

/// Maps a key-level event onto a core action, resolving relative selection
/// moves against the current choice list.
fn event_to_action(event: TuiEvent, session: &QuizSession) -> Option<Action> {
    let choices = &session.shuffled_choices;
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Confirm => Some(Action::Confirm),
        TuiEvent::Restart => Some(Action::Restart),
        TuiEvent::SelectIndex(index) => choices.get(index).cloned().map(Action::SelectAnswer),
        TuiEvent::SelectNext if !choices.is_empty() => {
            let next = session
                .selected_position()
                .map_or(0, |pos| (pos + 1) % choices.len());
            Some(Action::SelectAnswer(choices[next].clone()))
        }
        TuiEvent::SelectPrev if !choices.is_empty() => {
            let prev = session
                .selected_position()
                .map_or(choices.len() - 1, |pos| (pos + choices.len() - 1) % choices.len());
            Some(Action::SelectAnswer(choices[prev].clone()))
        }
        TuiEvent::SelectNext
        | TuiEvent::SelectPrev
        | TuiEvent::MouseClick(..)
        | TuiEvent::Resize => None,
    }
}

fn describe_fetch_action(action: &Action) -> String {
    match action {
        Action::BatchLoaded { generation, batch } => {
            format!("batch of {} (generation {})", batch.len(), generation)
        }
        Action::FetchFailed { generation, error } => {
            format!("failure {:?} (generation {})", error, generation)
        }
        other => format!("{:?}", other),
    }
}

/// Fetches one batch on a tokio task and sends the tagged result to `tx`.
fn spawn_fetch(
    source: Arc<dyn QuestionSource>,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning fetch from {} (generation {})", source.name(), generation);
    tokio::spawn(async move {
        let action = match source.fetch_batch().await {
            Ok(batch) => Action::BatchLoaded { generation, batch },
            Err(e) => {
                warn!("Fetch from {} failed: {}", source.name(), e);
                Action::FetchFailed {
                    generation,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver fetch result for generation {}: receiver dropped",
                generation
            );
        }
    })
}
