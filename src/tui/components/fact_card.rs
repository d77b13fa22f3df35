//! # Fact Card
//!
//! Renders the three fact states: a spinner while loading, the fact in
//! quotation marks once loaded, and the fallback message after a failure.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::FactState;
use crate::tui::component::Component;

pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const LOADING_TEXT: &str = "Fetching a fresh cat fact...";

pub struct FactCard<'a> {
    pub fact: &'a FactState,
    pub spinner_frame: usize,
}

impl<'a> FactCard<'a> {
    pub fn new(fact: &'a FactState, spinner_frame: usize) -> Self {
        Self {
            fact,
            spinner_frame,
        }
    }

    fn body(&self) -> Line<'a> {
        match self.fact {
            FactState::Loading => {
                let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
                Line::from(vec![
                    Span::styled(format!("{glyph} "), Style::default().fg(Color::LightMagenta)),
                    Span::styled(LOADING_TEXT, Style::default().fg(Color::Gray)),
                ])
            }
            FactState::Loaded(text) => Line::from(Span::styled(
                format!("\u{201c}{text}\u{201d}"),
                Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
            )),
            FactState::Failed(fallback) => Line::from(Span::styled(
                fallback.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Component for FactCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Cat Fact of the Day ");
        let paragraph = Paragraph::new(self.body())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_loading_shows_spinner() {
        let fact = FactState::Loading;
        let body = text_of(&FactCard::new(&fact, 3).body());
        assert!(body.starts_with(SPINNER[3]));
        assert!(body.contains(LOADING_TEXT));
    }

    #[test]
    fn test_loaded_is_quoted() {
        let fact = FactState::Loaded("Cats purr at 25 Hz.".into());
        let body = text_of(&FactCard::new(&fact, 0).body());
        assert_eq!(body, "\u{201c}Cats purr at 25 Hz.\u{201d}");
    }

    #[test]
    fn test_failed_shows_fallback_without_spinner() {
        let fact = FactState::Failed("No fact today.".into());
        let body = text_of(&FactCard::new(&fact, 0).body());
        assert_eq!(body, "No fact today.");
        assert!(!SPINNER.iter().any(|c| body.contains(*c)));
    }
}
