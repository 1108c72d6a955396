//! # RecordList Component
//!
//! The filtered rows of the active screen. Each row renders as a title line,
//! the wrapped subtitle, and a dim line of facet tags and annotations.
//!
//! An empty row set is a valid result and gets its own message instead of an
//! empty box.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::state::RecordRow;
use crate::tui::component::Component;
use crate::tui::components::truncate_str;

/// Subtitles wrap to at most this many lines per row.
const MAX_SUBTITLE_LINES: usize = 2;

pub struct RecordList<'a> {
    rows: &'a [RecordRow],
    list_state: &'a mut ListState,
    title: String,
    empty_message: &'a str,
    help: &'a str,
}

impl<'a> RecordList<'a> {
    pub fn new(
        rows: &'a [RecordRow],
        list_state: &'a mut ListState,
        title: String,
        empty_message: &'a str,
        help: &'a str,
    ) -> Self {
        Self {
            rows,
            list_state,
            title,
            empty_message,
            help,
        }
    }
}

/// Build the lines for one row at the given inner width.
pub fn row_lines(row: &RecordRow, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        truncate_str(&row.title, width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if let Some(subtitle) = &row.subtitle {
        let wrap_width = width.saturating_sub(2).max(1);
        let wrapped = textwrap::wrap(subtitle, wrap_width);
        let overflow = wrapped.len() > MAX_SUBTITLE_LINES;
        for (i, part) in wrapped.iter().take(MAX_SUBTITLE_LINES).enumerate() {
            let text = if overflow && i + 1 == MAX_SUBTITLE_LINES {
                truncate_str(&format!("{part}..."), wrap_width)
            } else {
                part.to_string()
            };
            lines.push(Line::from(Span::styled(
                format!("  {text}"),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let tags: Vec<String> = row
        .facets
        .iter()
        .filter(|(field, _)| field.as_str() != "id")
        .map(|(_, value)| value.clone())
        .chain(row.meta.iter().cloned())
        .collect();
    if !tags.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_str(&format!("  {}", tags.join(" · ")), width),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

impl Component for RecordList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(self.help).centered())
            .padding(Padding::horizontal(1));

        if self.rows.is_empty() {
            self.list_state.select(None);
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Clamp selection after the row set shrank
        let last = self.rows.len() - 1;
        let selected = self.list_state.selected().unwrap_or(0).min(last);
        self.list_state.select(Some(selected));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let mut lines = row_lines(row, inner_width);
                lines.push(Line::default());
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, area, &mut *self.list_state);
    }
}
