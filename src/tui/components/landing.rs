//! # Landing Page Component
//!
//! The `Home` screen: platform header, then the five modules as a menu.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::navigation::Screen;
use crate::tui::component::Component;

const TAGLINE: &str = "A Community-Based African AI Platform";
const QUOTE: &str = "\"Knowledge is like a baobab tree; no one individual can embrace it.\"";

pub struct LandingPage<'a> {
    list_state: &'a mut ListState,
}

impl<'a> LandingPage<'a> {
    pub fn new(list_state: &'a mut ListState) -> Self {
        Self { list_state }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area, quote_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "OURS",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::White))),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let items: Vec<ListItem> = Screen::ALL
            .iter()
            .enumerate()
            .map(|(i, screen)| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{}  ", i + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            screen.title(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", screen.description()),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Platform Modules ")
            .title_bottom(Line::from(" ↑↓ Select  Enter Open  q Quit ").centered())
            .padding(Padding::horizontal(1));

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED),
        );
        frame.render_stateful_widget(list, list_area, &mut *self.list_state);

        let quote = Paragraph::new(QUOTE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(quote, quote_area);
    }
}
