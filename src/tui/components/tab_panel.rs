//! # Tab Panel
//!
//! Two static panels behind a tab strip: characteristics and breeds.
//! Exactly one is visible. Switching slides the new panel in from the
//! side the user moved toward; the slide is tracked by `TabTransition`.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Tabs};

use crate::core::content::{
    BREEDS, BREEDS_DESCRIPTION, BREEDS_TITLE, CHARACTERISTICS, CHARACTERISTICS_DESCRIPTION,
    CHARACTERISTICS_TITLE,
};
use crate::core::state::Tab;
use crate::tui::component::Component;

const SLIDE: Duration = Duration::from_millis(250);
const SLIDE_COLUMNS: f32 = 12.0;
const PAW: &str = "❖ ";

/// Directional slide between panels.
#[derive(Debug, Clone, Copy)]
pub struct TabTransition {
    /// +1 = entering from the right, -1 = entering from the left.
    direction: i8,
    started: Instant,
}

impl TabTransition {
    pub fn new(from: Tab, to: Tab, now: Instant) -> Option<Self> {
        if from == to {
            return None;
        }
        let direction = if to.index() > from.index() { 1 } else { -1 };
        Some(Self {
            direction,
            started: now,
        })
    }

    /// Horizontal offset in columns at `now`; 0 once the slide is over.
    pub fn offset(&self, now: Instant) -> i16 {
        let t = now.saturating_duration_since(self.started).as_secs_f32() / SLIDE.as_secs_f32();
        if t >= 1.0 {
            return 0;
        }
        // Ease-out
        let remaining = (1.0 - t) * (1.0 - t);
        (remaining * SLIDE_COLUMNS).round() as i16 * self.direction as i16
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SLIDE
    }
}

pub struct TabPanel {
    pub active: Tab,
    /// Columns to shift the content by (see `TabTransition::offset`).
    pub offset: i16,
}

impl TabPanel {
    pub fn new(active: Tab, offset: i16) -> Self {
        Self { active, offset }
    }
}

impl Component for TabPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [strip_area, content_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab.label()));
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");
        frame.render_widget(tabs, strip_area);

        let (content_area, hscroll) = shift(content_area, self.offset);
        if content_area.is_empty() {
            return;
        }

        let (title, description) = match self.active {
            Tab::Characteristics => (CHARACTERISTICS_TITLE, CHARACTERISTICS_DESCRIPTION),
            Tab::Breeds => (BREEDS_TITLE, BREEDS_DESCRIPTION),
        };
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(content_area);
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(description, Style::default().fg(Color::DarkGray))),
        ])
        .scroll((0, hscroll));
        frame.render_widget(header, header_area);

        match self.active {
            Tab::Characteristics => {
                frame.render_widget(
                    Paragraph::new(bullets(CHARACTERISTICS)).scroll((0, hscroll)),
                    list_area,
                );
            }
            Tab::Breeds => {
                // Two-column grid
                let split = BREEDS.len().div_ceil(2);
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(list_area);
                frame.render_widget(
                    Paragraph::new(bullets(&BREEDS[..split])).scroll((0, hscroll)),
                    left,
                );
                frame.render_widget(
                    Paragraph::new(bullets(&BREEDS[split..])).scroll((0, hscroll)),
                    right,
                );
            }
        }
    }
}

fn bullets(items: &[&'static str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(PAW, Style::default().fg(Color::LightMagenta)),
                Span::raw(*item),
            ])
        })
        .collect()
}

/// Apply a slide offset to `area`.
///
/// Positive offsets push the content right (clipped at the right edge).
/// Negative offsets scroll it left, returned as a horizontal scroll amount.
fn shift(area: Rect, offset: i16) -> (Rect, u16) {
    let magnitude = offset.unsigned_abs().min(area.width);
    if offset >= 0 {
        let moved = Rect {
            x: area.x + magnitude,
            width: area.width - magnitude,
            ..area
        };
        (moved, 0)
    } else {
        (area, magnitude)
    }
}
