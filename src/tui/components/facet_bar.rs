//! # FacetBar Component
//!
//! One chip per facet dimension: `[All Countries (6)]  [Ecology (2)]`.
//! The focused chip is highlighted; Left/Right in the event loop step its
//! value through `FacetCounts::cycle`.
//!
//! Counts always come from the unfiltered collection, so the option list
//! and its numbers stay put while other facets change.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::filter::{FacetCounts, FacetValue};
use crate::tui::component::Component;
use crate::tui::components::{all_label, capitalize};

pub struct FacetBar<'a> {
    pub counts: &'a [FacetCounts],
    /// Current value per dimension, parallel to `counts`.
    pub values: &'a [FacetValue],
    pub focused: Option<usize>,
    pub show_counts: bool,
}

impl<'a> FacetBar<'a> {
    pub fn new(
        counts: &'a [FacetCounts],
        values: &'a [FacetValue],
        focused: Option<usize>,
        show_counts: bool,
    ) -> Self {
        Self {
            counts,
            values,
            focused,
            show_counts,
        }
    }

    pub fn chip_label(&self, index: usize) -> String {
        let counts = &self.counts[index];
        let value = self.values.get(index).cloned().unwrap_or_default();
        let name = match &value {
            FacetValue::All => all_label(&counts.field),
            FacetValue::Only(v) => capitalize(v),
        };
        if self.show_counts {
            format!("{} ({})", name, counts.get(&value))
        } else {
            name
        }
    }
}

impl Component for FacetBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.counts.len() * 2 + 1);
        if self.counts.is_empty() {
            spans.push(Span::styled(
                "No filters on this screen",
                Style::default().fg(Color::DarkGray),
            ));
        }
        for index in 0..self.counts.len() {
            let style = if self.focused == Some(index) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if self.values.get(index).is_some_and(|v| !v.is_all()) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("[{}]", self.chip_label(index)), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::aggregate;
    use crate::test_support::sample_catalog;

    #[test]
    fn test_chip_labels_show_value_and_count() {
        let catalog = sample_catalog();
        let counts = vec![
            aggregate(&catalog.datasets, "country"),
            aggregate(&catalog.datasets, "category"),
        ];
        let values = vec![FacetValue::All, FacetValue::parse("Ecology")];
        let bar = FacetBar::new(&counts, &values, Some(0), true);
        assert_eq!(bar.chip_label(0), "All Countries (6)");
        assert_eq!(bar.chip_label(1), "Ecology (2)");
    }

    #[test]
    fn test_chip_labels_without_counts() {
        let catalog = sample_catalog();
        let counts = vec![aggregate(&catalog.stories, "status")];
        let values = vec![FacetValue::parse("review")];
        let bar = FacetBar::new(&counts, &values, None, false);
        assert_eq!(bar.chip_label(0), "Review");
    }
}
