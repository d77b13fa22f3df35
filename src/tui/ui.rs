use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::Burst;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    FactCard, Footer, GalleryStrip, Hero, ImageViewer, LikeButton, NameCard, TabPanel,
};

/// Where each section of the page lands for a given frame size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageAreas {
    pub hero: Rect,
    pub tabs: Rect,
    pub fact: Rect,
    pub name: Rect,
    pub like: Rect,
    pub gallery: Rect,
    pub footer: Rect,
}

pub fn page_layout(area: Rect) -> PageAreas {
    use Constraint::{Length, Min, Percentage};
    let [hero, tabs, cards, gallery, footer] =
        Layout::vertical([Length(7), Min(11), Length(7), Length(6), Length(2)]).areas(area);
    let [fact, name, like] =
        Layout::horizontal([Percentage(50), Percentage(25), Percentage(25)]).areas(cards);
    PageAreas {
        hero,
        tabs,
        fact,
        name,
        like,
        gallery,
        footer,
    }
}

/// Screen point a burst of confetti starts from.
pub fn burst_origin(areas: &PageAreas, burst: Burst) -> (f32, f32) {
    let area = match burst {
        Burst::Like => areas.like,
        Burst::Name => areas.name,
    };
    (
        area.x as f32 + area.width as f32 / 2.0,
        area.y as f32 + area.height as f32 / 2.0,
    )
}

pub fn draw_page(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let frame_area = frame.area();
    let areas = page_layout(frame_area);
    tui.frame_area = frame_area;
    tui.areas = areas;

    let elapsed = now.saturating_duration_since(tui.started).as_secs_f32();
    Hero::new(elapsed).render(frame, areas.hero);

    let offset = tui
        .tab_transition
        .map(|transition| transition.offset(now))
        .unwrap_or(0);
    TabPanel::new(app.active_tab, offset).render(frame, areas.tabs);

    FactCard::new(&app.fact, tui.spinner_frame).render(frame, areas.fact);

    NameCard {
        name: app.generated_name,
    }
    .render(frame, areas.name);

    tui.like_flash.observe(app.like_count, now);
    LikeButton {
        count: app.like_count,
        flashing: tui.like_flash.is_flashing(now),
    }
    .render(frame, areas.like);

    GalleryStrip {
        cursor: app.gallery.cursor,
        selected: app.gallery.selected,
    }
    .render(frame, areas.gallery);

    Footer {
        status_message: &app.status_message,
    }
    .render(frame, areas.footer);

    // Overlay iff something is selected
    if let Some(index) = app.gallery.selected {
        ImageViewer { index }.render(frame, frame_area);
    }

    // Confetti floats above everything
    tui.confetti.render(frame.buffer_mut(), frame_area);
}
