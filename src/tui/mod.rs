//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (fact spinner, confetti, tab slide, like flash, hero
//!   intro): draws every ~40ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Fact Request Lifecycle
//!
//! `Action::Mount` yields `Effect::FetchFact` exactly once. The request runs
//! on a tokio task and reports back over the action channel. On exit the
//! loop dispatches `Action::Unmount` and aborts the task, so a result that
//! arrives late is never applied.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use tokio::task::JoinHandle;

use crate::core::action::{Action, Burst, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Tab};
use crate::facts::{CatFactClient, FactSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    Confetti, GalleryControls, Hero, LikeFlash, TabTransition, ViewerControls,
};
use crate::tui::components::viewer::overlay_area;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::PageAreas;

const ANIMATION_TICK: Duration = Duration::from_millis(40);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core page logic)
pub struct TuiState {
    pub started: Instant,
    pub spinner_frame: usize,
    pub tab_transition: Option<TabTransition>,
    pub like_flash: LikeFlash,
    pub confetti: Confetti,
    // Cached by the last draw, used for hit testing and burst origins
    pub frame_area: Rect,
    pub areas: PageAreas,
}

impl TuiState {
    pub fn new(confetti_enabled: bool, confetti_particles: usize) -> Self {
        Self {
            started: Instant::now(),
            spinner_frame: 0,
            tab_transition: None,
            like_flash: LikeFlash::default(),
            confetti: Confetti::new(confetti_enabled, confetti_particles),
            frame_area: Rect::default(),
            areas: PageAreas::default(),
        }
    }

    /// Anything cosmetic still in motion?
    pub fn is_animating(&self, now: Instant) -> bool {
        Hero::new(now.saturating_duration_since(self.started).as_secs_f32()).is_animating()
            || self.confetti.is_active()
            || self.like_flash.is_flashing(now)
            || self
                .tab_transition
                .is_some_and(|transition| !transition.is_done(now))
    }

    /// Fire-and-forget confetti for a burst effect.
    pub fn celebrate(&mut self, burst: Burst) {
        let origin = ui::burst_origin(&self.areas, burst);
        self.confetti.burst(origin);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build the fact source from resolved config.
pub fn build_fact_source(config: &ResolvedConfig) -> Arc<dyn FactSource> {
    Arc::new(CatFactClient::new(
        Some(config.fact_base_url.clone()),
        config.fact_timeout,
    ))
}

/// Key bindings for the page when no overlay is open.
pub fn page_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('1') => Some(Action::SelectTab(Tab::Characteristics)),
        TuiEvent::InputChar('2') => Some(Action::SelectTab(Tab::Breeds)),
        TuiEvent::NextTab => Some(Action::NextTab),
        TuiEvent::PrevTab => Some(Action::PrevTab),
        TuiEvent::InputChar('g') => Some(Action::GenerateName),
        TuiEvent::InputChar('l') | TuiEvent::InputChar(' ') => Some(Action::Like),
        TuiEvent::InputChar(']') => Some(Action::FocusNext),
        TuiEvent::InputChar('[') => Some(Action::FocusPrev),
        TuiEvent::Submit => Some(Action::OpenFocused),
        _ => None,
    }
}

/// Route one terminal event to an action, honouring the modal overlay.
pub fn route_event(event: &TuiEvent, app: &App, tui: &TuiState) -> Option<Action> {
    // Ctrl+C always quits regardless of overlay
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    if app.overlay_open() {
        return ViewerControls {
            overlay: overlay_area(tui.frame_area),
        }
        .handle_event(event);
    }
    if matches!(event, TuiEvent::MouseClick(..)) {
        return GalleryControls {
            area: tui.areas.gallery,
            cursor: app.gallery.cursor,
        }
        .handle_event(event);
    }
    page_action(event)
}

/// Apply an action and kick off the cosmetic follow-ups.
///
/// The state transition happens first; the returned effect is then either
/// handled here (bursts) or handed back to the loop (fetch, quit).
pub fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, now: Instant) -> Effect {
    let previous_tab = app.active_tab;
    let effect = update(app, action);
    if let Some(transition) = TabTransition::new(previous_tab, app.active_tab, now) {
        tui.tab_transition = Some(transition);
    }
    if let Effect::Celebrate(burst) = effect {
        tui.celebrate(burst);
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_fact_source(&config);
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.confetti_enabled, config.confetti_particles);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut fetch_task: Option<JoinHandle<()>> = None;

    // The page is on screen from the first frame
    if dispatch(&mut app, &mut tui, Action::Mount, Instant::now()) == Effect::FetchFact {
        fetch_task = Some(spawn_fact_request(source.clone(), tx.clone()));
    }

    let result = page_loop(
        &mut terminal,
        &mut app,
        &mut tui,
        &source,
        &tx,
        &rx,
        &mut fetch_task,
    );
    if let Err(e) = &result {
        warn!("Page loop failed: {}", e);
    }

    // Teardown runs on every exit path, errors included
    tear_down(&mut app, &mut tui, fetch_task.as_ref());
    info!("Whiskers shutting down after {} likes", app.like_count);

    ratatui::restore();
    result
}

fn page_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    source: &Arc<dyn FactSource>,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
    fetch_task: &mut Option<JoinHandle<()>>,
) -> std::io::Result<()> {
    let mut last_frame = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = app.is_loading() || tui.is_animating(now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let dt = now.saturating_duration_since(last_frame).as_secs_f32();
            last_frame = now;
            tui.confetti.tick(dt);
            tui.spinner_frame =
                (now.saturating_duration_since(tui.started).as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_page(f, app, tui, now))?;
            needs_redraw = false;
        } else {
            // Keep dt small after an idle stretch
            last_frame = now;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);

        if first_event.is_some() {
            needs_redraw = true;
        }
        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&event, app, tui) else {
                continue;
            };
            match dispatch(app, tui, action, Instant::now()) {
                Effect::Quit => return Ok(()),
                Effect::FetchFact => {
                    *fetch_task = Some(spawn_fact_request(source.clone(), tx.clone()));
                }
                Effect::None | Effect::Celebrate(_) => {}
            }
        }

        // Handle background task actions (fact result)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, tui, action, Instant::now()) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Unmount the page and cancel the fact request if it is still running,
/// so a late result is never applied.
fn tear_down(app: &mut App, tui: &mut TuiState, fetch_task: Option<&JoinHandle<()>>) {
    dispatch(app, tui, Action::Unmount, Instant::now());
    if let Some(task) = fetch_task {
        task.abort();
    }
}

/// Run the one fact request in the background and report the outcome as
/// an action. Abort the returned handle to cancel.
pub fn spawn_fact_request(
    source: Arc<dyn FactSource>,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!("Spawning fact request via {}", source.name());
    tokio::spawn(async move {
        let started = Instant::now();
        let action = match source.fetch_fact().await {
            Ok(fact) => {
                info!(
                    "Fact request resolved in {}ms",
                    started.elapsed().as_millis()
                );
                Action::FactLoaded(fact)
            }
            Err(e) => {
                info!("Fact request failed: {}", e);
                Action::FactFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fact result: receiver dropped");
        }
    })
}
