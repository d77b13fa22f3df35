//! # Like Button
//!
//! The like counter plus its "just changed" flash. The count itself lives
//! in `App`; `LikeFlash` only remembers when the rendered value last
//! changed so the number can light up for a moment.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

const FLASH: Duration = Duration::from_millis(400);

#[derive(Debug, Default)]
pub struct LikeFlash {
    last_seen: u64,
    until: Option<Instant>,
}

impl LikeFlash {
    /// Record the count about to be rendered; starts a flash if it changed.
    pub fn observe(&mut self, count: u64, now: Instant) {
        if count != self.last_seen {
            self.last_seen = count;
            self.until = Some(now + FLASH);
        }
    }

    pub fn is_flashing(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

pub struct LikeButton {
    pub count: u64,
    pub flashing: bool,
}

pub fn count_label(count: u64) -> String {
    format!("{count} cat lovers!")
}

impl Component for LikeButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count_style = if self.flashing {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let button = Line::from(vec![
            Span::styled(" ♥ Like Cats ", Style::default().fg(Color::White).bg(Color::Magenta)),
            Span::styled("  [l]", Style::default().fg(Color::Yellow)),
        ]);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Likes ");
        let paragraph = Paragraph::new(vec![
            Line::raw(""),
            button,
            Line::raw(""),
            Line::from(Span::styled(count_label(self.count), count_style)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_starts_on_change_and_fades() {
        let now = Instant::now();
        let mut flash = LikeFlash::default();
        flash.observe(0, now);
        assert!(!flash.is_flashing(now));

        flash.observe(1, now);
        assert!(flash.is_flashing(now));
        assert!(flash.is_flashing(now + Duration::from_millis(100)));
        assert!(!flash.is_flashing(now + Duration::from_millis(500)));
    }

    #[test]
    fn test_flash_restarts_on_each_change() {
        let now = Instant::now();
        let mut flash = LikeFlash::default();
        flash.observe(1, now);
        let later = now + Duration::from_millis(350);
        flash.observe(2, later);
        assert!(flash.is_flashing(later + Duration::from_millis(300)));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 cat lovers!");
        assert_eq!(count_label(12), "12 cat lovers!");
    }
}
