//! # Page State
//!
//! The view-model for the whole page. Domain state only; presentation
//! state (animations, confetti, flash timers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── like_count: u64                 // monotonically increasing
//! ├── fact: FactState                 // Loading → Loaded | Failed, once
//! ├── generated_name: Option<&str>    // last draw, if any
//! ├── gallery: Gallery                // selection + keyboard focus
//! ├── active_tab: Tab                 // Characteristics | Breeds
//! ├── fetch_issued: bool              // the one fact request went out
//! ├── mounted: bool                   // false after teardown
//! ├── status_message: String          // footer status text
//! ├── fallback_message: String        // shown when the fact fails
//! └── names: NameGenerator            // rng behind GenerateName
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::names::NameGenerator;

pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "The cats are napping and the fact of the day is hiding somewhere. Try again later!";

/// Which of the two static panels is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Characteristics,
    Breeds,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Characteristics, Tab::Breeds];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Characteristics => "Cat Characteristics",
            Tab::Breeds => "Popular Breeds",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Characteristics => 0,
            Tab::Breeds => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Characteristics => Tab::Breeds,
            Tab::Breeds => Tab::Characteristics,
        }
    }

    // Two tabs: previous and next coincide.
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Lifecycle of the daily fact. Leaves `Loading` at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FactState {
    #[default]
    Loading,
    Loaded(String),
    Failed(String),
}

/// Gallery selection. The viewer overlay is open iff `selected` is `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gallery {
    pub selected: Option<usize>,
    /// Keyboard-focused thumbnail, always a valid index.
    pub cursor: usize,
}

impl Gallery {
    pub fn overlay_open(&self) -> bool {
        self.selected.is_some()
    }
}

pub struct App {
    pub like_count: u64,
    pub fact: FactState,
    pub generated_name: Option<&'static str>,
    pub gallery: Gallery,
    pub active_tab: Tab,
    pub fetch_issued: bool,
    pub mounted: bool,
    pub status_message: String,
    pub fallback_message: String,
    pub names: NameGenerator,
}

impl App {
    pub fn new(names: NameGenerator, fallback_message: String) -> Self {
        Self {
            like_count: 0,
            fact: FactState::Loading,
            generated_name: None,
            gallery: Gallery::default(),
            active_tab: Tab::default(),
            fetch_issued: false,
            mounted: false,
            status_message: String::from("Welcome, cat lover!"),
            fallback_message,
            names,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(NameGenerator::new(), config.fallback_message.clone())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fact, FactState::Loading)
    }

    pub fn overlay_open(&self) -> bool {
        self.gallery.overlay_open()
    }
}
