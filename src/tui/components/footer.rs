use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::TITLE;
use crate::tui::component::Component;

pub const KEY_HELP: &str =
    "1/2 tabs · g name · l like · [ ] browse · Enter view · q quit";

/// Two-line footer: copyright + status, then key help.
pub struct Footer<'a> {
    pub status_message: &'a str,
}

pub fn copyright(year: i32) -> String {
    format!("© {year} {TITLE}")
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let top = Line::from(vec![
            Span::styled(copyright(Local::now().year()), Style::default().fg(Color::Gray)),
            Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.status_message, Style::default().fg(Color::LightMagenta)),
        ]);
        let help = Line::from(Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray)));
        frame.render_widget(
            Paragraph::new(vec![top, help]).alignment(Alignment::Center),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2026), "© 2026 All About Cats");
    }
}
