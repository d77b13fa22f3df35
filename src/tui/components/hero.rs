//! # Hero Banner
//!
//! Title card at the top of the page. The title fades and slides in over
//! the first second after launch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::content::{HERO_IMAGE, SUBTITLE, TITLE};
use crate::tui::component::Component;

const INTRO_SECS: f32 = 1.0;

const CAT: [&str; 3] = [" /\\_/\\ ", "( o.o )", " > ^ < "];

pub struct Hero {
    /// Seconds since the page was first shown.
    pub elapsed: f32,
}

impl Hero {
    pub fn new(elapsed: f32) -> Self {
        Self { elapsed }
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < INTRO_SECS
    }

    fn title_style(&self) -> Style {
        let progress = (self.elapsed / INTRO_SECS).clamp(0.0, 1.0);
        let color = if progress < 0.35 {
            Color::DarkGray
        } else if progress < 0.7 {
            Color::Gray
        } else {
            Color::White
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl Component for Hero {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let progress = (self.elapsed / INTRO_SECS).clamp(0.0, 1.0);
        // Starts one line high and settles into place
        let lift = if progress < 0.5 { 1 } else { 0 };

        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..(1 - lift) {
            lines.push(Line::raw(""));
        }
        for (i, row) in CAT.iter().enumerate() {
            let mut spans = vec![Span::styled(*row, Style::default().fg(Color::LightMagenta))];
            if i == 1 {
                spans.push(Span::raw("   "));
                spans.push(Span::styled(TITLE, self.title_style()));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )));

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {HERO_IMAGE} "),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
