use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Shows the most recently generated cat name, or a prompt before the first one.
pub struct NameCard {
    pub name: Option<&'static str>,
}

impl Component for NameCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let headline = match self.name {
            Some(name) => Line::from(Span::styled(
                name,
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "Need a name for your cat?",
                Style::default().fg(Color::Gray),
            )),
        };
        let hint = Line::from(vec![
            Span::styled("[g]", Style::default().fg(Color::Yellow)),
            Span::styled(" Generate name", Style::default().fg(Color::DarkGray)),
        ]);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Cat Name Generator ");
        let paragraph = Paragraph::new(vec![Line::raw(""), headline, Line::raw(""), hint])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
