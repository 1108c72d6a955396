//! # TitleBar Component
//!
//! Top status bar: where the user is, and what the last action did.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"OURS › Access & Solutions › … | 1 of 6 shown"`
//! 2. **Default**: `"OURS › Access & Solutions"`
//!
//! The breadcrumb is truncated first so the status stays visible on narrow
//! terminals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::navigation::NavigationState;
use crate::tui::component::Component;
use crate::tui::components::truncate_str;

const SEPARATOR: &str = " › ";

pub struct TitleBar {
    pub breadcrumb: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(navigation: &NavigationState, status_message: &str) -> Self {
        Self {
            breadcrumb: breadcrumb(navigation),
            status_message: status_message.to_string(),
        }
    }

    fn format_title(&self, width: usize) -> (String, String) {
        let crumbs = self.breadcrumb.join(SEPARATOR);
        if self.status_message.is_empty() {
            return (truncate_str(&crumbs, width), String::new());
        }
        let status = format!(" | {}", self.status_message);
        let room = width.saturating_sub(status.chars().count());
        (truncate_str(&crumbs, room), status)
    }
}

/// `Home` → `["OURS"]`, `Detail(thematic, health)` → `["OURS", "Thematic Organisation", "health"]`.
pub fn breadcrumb(navigation: &NavigationState) -> Vec<String> {
    let mut crumbs = vec!["OURS".to_string()];
    if let Some(screen) = navigation.screen() {
        crumbs.push(screen.title().to_string());
    }
    if let Some(sub) = navigation.sub_selection() {
        crumbs.push(sub.to_string());
    }
    crumbs
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (crumbs, status) = self.format_title(area.width as usize);
        let line = Line::from(vec![
            Span::styled(
                crumbs,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(line, area);
    }
}
