//! # TUI Components
//!
//! One component per section of the page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `Hero`: Title banner with intro animation
//! - `TabPanel`: Characteristics / breeds panels behind a tab strip
//! - `FactCard`: Spinner, quoted fact, or fallback
//! - `NameCard`: Latest generated name
//! - `LikeButton`: Like affordance and counter
//! - `GalleryStrip`: Paged thumbnail carousel
//! - `ImageViewer`: Modal for the selected image
//! - `Footer`: Copyright, status and key help
//!
//! ### Presentation State
//!
//! Cosmetic state that never touches core `App`:
//! - `Confetti`: Particle bursts
//! - `LikeFlash`: Highlight when the count changes
//! - `TabTransition`: Directional slide between panels
//!
//! ### Event Handlers
//!
//! - `GalleryControls`: Thumbnail clicks
//! - `ViewerControls`: Close and step keys, click-outside dismissal
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! FactCard::new(&app.fact, spinner_frame).render(frame, area);
//!
//! // Bad: hidden dependency on the whole App
//! FactCard::new(app).render(frame, area);
//! ```

pub mod confetti;
pub mod fact_card;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod like_button;
pub mod name_card;
pub mod tab_panel;
pub mod viewer;

pub use confetti::Confetti;
pub use fact_card::FactCard;
pub use footer::Footer;
pub use gallery::{GalleryControls, GalleryStrip};
pub use hero::Hero;
pub use like_button::{LikeButton, LikeFlash};
pub use name_card::NameCard;
pub use tab_panel::{TabPanel, TabTransition};
pub use viewer::{ImageViewer, ViewerControls};
