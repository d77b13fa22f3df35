//! # Gallery Carousel
//!
//! A paged strip of thumbnails. Terminals can't show the photos, so each
//! thumbnail is a small card with its number and caption. The page shown
//! is the one containing the keyboard cursor.
//!
//! Layout math (`thumbnail_rects`) is shared by rendering and mouse hit
//! testing so a click always lands on what was drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::action::Action;
use crate::core::content::GALLERY;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const THUMB_WIDTH: u16 = 18;

pub struct GalleryStrip {
    pub cursor: usize,
    pub selected: Option<usize>,
}

/// Number of thumbnails that fit side by side in `inner_width` columns.
pub fn per_page(inner_width: u16) -> usize {
    usize::from((inner_width / THUMB_WIDTH).max(1))
}

/// Thumbnails visible for this cursor, with the cell rect each occupies.
pub fn thumbnail_rects(inner: Rect, cursor: usize) -> Vec<(usize, Rect)> {
    let per_page = per_page(inner.width);
    let start = (cursor / per_page) * per_page;
    (start..GALLERY.len().min(start + per_page))
        .enumerate()
        .map(|(slot, index)| {
            let x = inner.x + slot as u16 * THUMB_WIDTH;
            let width = THUMB_WIDTH.min(inner.right().saturating_sub(x));
            (index, Rect::new(x, inner.y, width, inner.height))
        })
        .collect()
}

fn outer_block<'a>(cursor: usize, inner_width: u16) -> Block<'a> {
    let per_page = per_page(inner_width);
    let pages = GALLERY.len().div_ceil(per_page).max(1);
    let page = cursor / per_page + 1;
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Gallery ")
        .title_bottom(
            Line::from(Span::styled(
                format!(" ‹ {page}/{pages} ›  [ ] browse · Enter view "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        )
}

/// Area inside the gallery border.
pub fn inner_area(area: Rect) -> Rect {
    Block::bordered().inner(area)
}

/// Which thumbnail, if any, sits under screen position (`col`, `row`).
pub fn hit_test(area: Rect, cursor: usize, col: u16, row: u16) -> Option<usize> {
    let inner = inner_area(area);
    thumbnail_rects(inner, cursor)
        .into_iter()
        .find(|(_, rect)| rect.contains((col, row).into()))
        .map(|(index, _)| index)
}

/// Truncate to `max_width` display columns, adding an ellipsis if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    // No room for the ellipsis either
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl Component for GalleryStrip {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = inner_area(area);
        frame.render_widget(outer_block(self.cursor, inner.width), area);

        for (index, rect) in thumbnail_rects(inner, self.cursor) {
            let focused = index == self.cursor;
            let border_style = if focused {
                Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let marker = if self.selected == Some(index) { "◉" } else { "▣" };
            let caption_width = usize::from(rect.width.saturating_sub(2));
            let thumb = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{marker} #{}", index + 1),
                    Style::default().fg(Color::White),
                )),
                Line::from(Span::styled(
                    truncate_to_width(GALLERY[index].alt, caption_width),
                    Style::default().fg(Color::Gray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
            frame.render_widget(thumb, rect);
        }
    }
}

/// Mouse handling for the strip: clicking a thumbnail opens it.
pub struct GalleryControls {
    pub area: Rect,
    pub cursor: usize,
}

impl EventHandler for GalleryControls {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::MouseClick(col, row) => {
                hit_test(self.area, self.cursor, *col, *row).map(Action::OpenImage)
            }
            _ => None,
        }
    }
}
