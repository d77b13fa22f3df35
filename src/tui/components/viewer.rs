//! # Image Viewer Overlay
//!
//! Modal shown while a gallery image is selected. There is no separate
//! "open" flag: the overlay is drawn iff `App::gallery.selected` is `Some`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - selection lives in core `App`
//! - `ImageViewer` is created each frame from that selection
//! - `ViewerControls` turns input into close/step actions

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::content::GALLERY;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const FRAME_ART: [&str; 5] = [
    "╭───────────────────╮",
    "│    /\\_____/\\      │",
    "│   (  o   o  )     │",
    "│   (  =^.^=  ) ~   │",
    "╰───────────────────╯",
];

pub struct ImageViewer {
    pub index: usize,
}

/// Where the overlay sits for a given frame area.
pub fn overlay_area(frame_area: Rect) -> Rect {
    centered_rect(70, 70, frame_area)
}

impl Component for ImageViewer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(image) = GALLERY.get(self.index) else {
            return;
        };
        let overlay = overlay_area(area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightMagenta))
            .title(format!(" {} / {} ", self.index + 1, GALLERY.len()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" , prev  . next  x/Esc close ").centered())
            .padding(Padding::horizontal(1));

        let mut lines: Vec<Line> = FRAME_ART
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Magenta))))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            image.alt,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            image.url,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Input routing while the overlay is open. The event loop swallows
/// anything this returns `None` for, so the page behind stays inert.
pub struct ViewerControls {
    pub overlay: Rect,
}

impl EventHandler for ViewerControls {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('x') => Some(Action::CloseImage),
            TuiEvent::InputChar(',') | TuiEvent::PrevTab => Some(Action::ViewerPrev),
            TuiEvent::InputChar('.') | TuiEvent::NextTab => Some(Action::ViewerNext),
            // Clicking outside the modal dismisses it
            TuiEvent::MouseClick(col, row) if !self.overlay.contains((*col, *row).into()) => {
                Some(Action::CloseImage)
            }
            _ => None,
        }
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
