//! # Core Page Logic
//!
//! This module contains the page's state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (page data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Facts    │
//!           │  Adapter   │              │   client   │
//!           │ (ratatui)  │              │ (reqwest)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all page state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`content`]: Static copy, names and image locators
//! - [`names`]: Random name drawing
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod content;
pub mod names;
pub mod state;
