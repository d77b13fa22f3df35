//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User presses `l`? That's `Action::Like`.
//! The fact API answers? That's `Action::FactLoaded(text)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Decorative effects (`Effect::Celebrate`) are returned *after* the state
//! has changed, so a burst can never hold up or undo a transition.

use log::{debug, info, warn};

use crate::core::content::GALLERY;
use crate::core::state::{App, FactState, Tab};

pub const FACT_LOADED_STATUS: &str = "Fact of the day is in";
pub const FACT_FAILED_STATUS: &str = "Couldn't fetch a fact this time";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The page is on screen for the first time.
    Mount,
    /// The page is being torn down; late results must be dropped.
    Unmount,
    FactLoaded(String),
    FactFailed(String),
    SelectTab(Tab),
    NextTab,
    PrevTab,
    GenerateName,
    OpenImage(usize),
    OpenFocused,
    CloseImage,
    FocusNext,
    FocusPrev,
    ViewerNext,
    ViewerPrev,
    Like,
    Quit,
}

/// Which decorative burst to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Burst {
    Like,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchFact,
    Celebrate(Burst),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Mount => {
            if app.fetch_issued {
                return Effect::None;
            }
            app.mounted = true;
            app.fetch_issued = true;
            app.status_message = String::from("Fetching today's cat fact...");
            Effect::FetchFact
        }
        Action::Unmount => {
            app.mounted = false;
            Effect::None
        }
        Action::FactLoaded(text) => {
            if !accepts_fact_result(app) {
                return Effect::None;
            }
            let text = text.trim();
            if text.is_empty() {
                warn!("Fact API returned an empty fact, showing fallback");
                app.fact = FactState::Failed(app.fallback_message.clone());
                app.status_message = String::from(FACT_FAILED_STATUS);
            } else {
                info!("Fact loaded ({} chars)", text.len());
                app.fact = FactState::Loaded(text.to_string());
                app.status_message = String::from(FACT_LOADED_STATUS);
            }
            Effect::None
        }
        Action::FactFailed(reason) => {
            if !accepts_fact_result(app) {
                return Effect::None;
            }
            warn!("Fact request failed: {}", reason);
            app.fact = FactState::Failed(app.fallback_message.clone());
            app.status_message = String::from(FACT_FAILED_STATUS);
            Effect::None
        }
        Action::SelectTab(tab) => {
            app.active_tab = tab;
            Effect::None
        }
        Action::NextTab => {
            app.active_tab = app.active_tab.next();
            Effect::None
        }
        Action::PrevTab => {
            app.active_tab = app.active_tab.prev();
            Effect::None
        }
        Action::GenerateName => match app.names.draw() {
            Some(name) => {
                app.generated_name = Some(name);
                app.status_message = format!("Say hello to {name}!");
                Effect::Celebrate(Burst::Name)
            }
            None => Effect::None,
        },
        Action::OpenImage(index) => {
            if index >= GALLERY.len() {
                warn!("Ignoring OpenImage({}) with {} images", index, GALLERY.len());
                return Effect::None;
            }
            app.gallery.selected = Some(index);
            app.gallery.cursor = index;
            Effect::None
        }
        Action::OpenFocused => update(app, Action::OpenImage(app.gallery.cursor)),
        Action::CloseImage => {
            app.gallery.selected = None;
            Effect::None
        }
        Action::FocusNext => {
            app.gallery.cursor = step(app.gallery.cursor, 1);
            Effect::None
        }
        Action::FocusPrev => {
            app.gallery.cursor = step(app.gallery.cursor, -1);
            Effect::None
        }
        Action::ViewerNext => step_viewer(app, 1),
        Action::ViewerPrev => step_viewer(app, -1),
        Action::Like => {
            app.like_count = app.like_count.saturating_add(1);
            app.status_message = if app.like_count == 1 {
                String::from("Thanks for the love!")
            } else {
                format!("{} likes and counting", app.like_count)
            };
            Effect::Celebrate(Burst::Like)
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

/// A fact result only lands on a live page that is still waiting for one.
fn accepts_fact_result(app: &App) -> bool {
    if !app.mounted {
        debug!("Dropping fact result: page is not mounted");
        return false;
    }
    if !app.is_loading() {
        debug!("Dropping fact result: fact already settled");
        return false;
    }
    true
}

/// Step the open viewer to a neighbouring image. No-op while closed.
fn step_viewer(app: &mut App, delta: isize) -> Effect {
    if let Some(current) = app.gallery.selected {
        let next = step(current, delta);
        app.gallery.selected = Some(next);
        app.gallery.cursor = next;
    }
    Effect::None
}

/// Move a gallery index by `delta`, wrapping at both ends.
fn step(index: usize, delta: isize) -> usize {
    let len = GALLERY.len();
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}
