//! # Actions
//!
//! Everything that can happen in OURS becomes an `Action`.
//! User picks a module? That's `Action::Navigate(Screen::Access)`.
//! User types in the search box? That's `Action::SetQuery(text)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply actions, then assert on `app.snapshot()`.

use log::debug;

use crate::core::filter::FacetValue;
use crate::core::navigation::Screen;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Screen),
    DrillInto(String),
    Back,
    SetQuery(String),
    SetFacet {
        dimension: String,
        value: FacetValue,
    },
    /// Drop the query and every user facet, keeping navigation as is.
    ClearFilters,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(screen) => {
            app.navigate_to(screen);
        }
        Action::DrillInto(sub) => {
            app.drill_into(&sub);
        }
        Action::Back => {
            app.back();
        }
        Action::SetQuery(query) => {
            if app.navigation().is_home() {
                return Effect::None;
            }
            app.filters.query = query;
            refresh_status(app);
        }
        Action::SetFacet { dimension, value } => {
            if app.navigation().is_home() {
                return Effect::None;
            }
            app.filters.facets.set(&dimension, value);
            refresh_status(app);
        }
        Action::ClearFilters => {
            if app.navigation().is_home() {
                return Effect::None;
            }
            app.filters = Default::default();
            refresh_status(app);
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn refresh_status(app: &mut App) {
    let snapshot = app.snapshot();
    app.status_message = if snapshot.is_empty() {
        "No matches".to_string()
    } else {
        format!("{} of {} shown", snapshot.matched, snapshot.total)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn facet(dimension: &str, value: &str) -> Action {
        Action::SetFacet {
            dimension: dimension.to_string(),
            value: FacetValue::parse(value),
        }
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Access));
        assert_eq!(app.navigation().screen(), Some(Screen::Access));
        update(&mut app, Action::Back);
        assert!(app.navigation().is_home());
    }

    #[test]
    fn test_set_facet_then_all_restores_results() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Access));
        let before = app.snapshot();

        update(&mut app, facet("category", "Ecology"));
        assert_eq!(app.snapshot().rows.len(), 2);
        assert_eq!(app.status_message, "2 of 6 shown");

        update(&mut app, facet("category", "all"));
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_empty_result_sets_no_matches_status() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Access));
        update(&mut app, facet("country", "Nigeria"));
        update(&mut app, Action::SetQuery("forest".into()));
        assert!(app.snapshot().is_empty());
        assert_eq!(app.status_message, "No matches");
    }

    #[test]
    fn test_filters_ignored_on_home() {
        let mut app = test_app();
        update(&mut app, Action::SetQuery("water".into()));
        update(&mut app, facet("country", "Kenya"));
        assert!(app.filters.query.is_empty());
        assert!(app.filters.facets.is_empty());
    }

    #[test]
    fn test_clear_filters_keeps_navigation() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Verification));
        update(&mut app, facet("status", "pending"));
        update(&mut app, Action::SetQuery("forest".into()));
        assert_eq!(app.snapshot().rows.len(), 1);

        update(&mut app, Action::ClearFilters);
        assert_eq!(app.navigation().screen(), Some(Screen::Verification));
        assert_eq!(app.snapshot().rows.len(), 6);
    }

    #[test]
    fn test_drill_into_ignored_on_access() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Access));
        update(&mut app, Action::DrillInto("health".into()));
        assert_eq!(app.navigation().depth(), 1);
    }

    #[test]
    fn test_framework_query_without_matches_reports_no_matches() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Framework));
        update(&mut app, Action::SetQuery("zzzz".into()));
        assert!(app.snapshot().is_empty());
        assert_eq!(app.status_message, "No matches");

        update(&mut app, Action::SetQuery("design".into()));
        assert_eq!(app.status_message, "4 of 9 shown");
    }

    #[test]
    fn test_theme_detail_status_counts_datasets() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Thematic));
        update(&mut app, Action::DrillInto("ecology".into()));
        update(&mut app, Action::SetQuery("water".into()));
        assert_eq!(app.snapshot().titles(), vec!["Water Conservation Systems"]);
        assert_eq!(app.status_message, "1 of 4 shown");
    }
}
