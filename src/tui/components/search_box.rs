//! # SearchBox Component
//!
//! Shows the free-text query. The text itself lives in core `FilterState`;
//! every keystroke becomes `Action::SetQuery` so results update live.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct SearchBox<'a> {
    pub query: &'a str,
    /// True while keystrokes go to the query (shows the cursor).
    pub active: bool,
    pub placeholder: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(query: &'a str, active: bool, placeholder: &'a str) -> Self {
        Self {
            query,
            active,
            placeholder,
        }
    }
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(if self.active { " Search (Enter done) " } else { " Search (/) " });

        let paragraph = if self.query.is_empty() && !self.active {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.query).style(Style::default().fg(Color::Green))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.active {
            let inner_width = area.width.saturating_sub(2);
            let offset = (self.query.width() as u16).min(inner_width.saturating_sub(1));
            frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
        }
    }
}
