//! # Application State
//!
//! Core browsing state for OURS. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // immutable record collections
//! ├── nav: NavigationController     // Home / Screen / Detail
//! ├── filters: FilterState          // query + facets for the active screen
//! ├── status_message: String        // status bar text
//! └── show_counts: bool             // facet option counts on/off
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Renderers read [`ScreenSnapshot`]s built by [`App::snapshot`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::catalog::{Catalog, DocumentKind};
use crate::core::config::ResolvedConfig;
use crate::core::filter::{FacetCounts, FacetSet, FacetValue, Record, aggregate, apply};
use crate::core::navigation::{NavigationController, NavigationState, Screen};

/// Query and facet constraints of the active screen. Reset on screen entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub facets: FacetSet,
}

pub struct App {
    pub catalog: Catalog,
    nav: NavigationController,
    pub filters: FilterState,
    pub status_message: String,
    pub show_counts: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            nav: NavigationController::new(),
            filters: FilterState::default(),
            status_message: String::from("Welcome to OURS"),
            show_counts: true,
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.show_counts = config.show_counts;
        if let Some(screen) = config.start_screen {
            app.navigate_to(screen);
        }
        app
    }

    pub fn navigation(&self) -> &NavigationState {
        self.nav.state()
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        self.nav.navigate_to(screen);
        self.filters = FilterState::default();
        self.status_message = screen.title().to_string();
    }

    pub fn drill_into(&mut self, sub: &str) {
        self.nav.drill_into(sub);
    }

    pub fn back(&mut self) {
        self.nav.back();
        if self.nav.state().is_home() {
            self.filters = FilterState::default();
            self.status_message = String::from("Welcome to OURS");
        }
    }

    /// Active facets plus the implicit drill-down constraint, if any.
    pub fn constraints(&self) -> FacetSet {
        let mut facets = self.filters.facets.clone();
        if let NavigationState::Detail { screen, sub } = self.nav.state() {
            facets.set(screen.facet(), FacetValue::Only(sub.clone()));
        }
        facets
    }

    /// Read-only view of the active screen for renderers and `--snapshot`.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let navigation = self.nav.state().clone();
        let facets = self.constraints();
        let query = self.filters.query.as_str();

        let view = match navigation.screen() {
            None => ScreenView::default(),
            Some(Screen::Access) => self.view(&self.catalog.datasets, Screen::Access),
            Some(Screen::Verification) => self.view(&self.catalog.stories, Screen::Verification),
            Some(Screen::Upload) => self.view(&self.catalog.uploads, Screen::Upload),
            Some(Screen::Thematic) => match navigation.sub_selection() {
                Some(id) => self.theme_view(id, query),
                None => self.view(&self.catalog.themes, Screen::Thematic),
            },
            Some(Screen::Framework) => {
                let view = self.view(&self.catalog.documents, Screen::Framework);
                match navigation.sub_selection() {
                    Some(_) => view,
                    None => ScreenView {
                        rows: self.kind_rows(query, &facets),
                        ..view
                    },
                }
            }
        };

        ScreenSnapshot {
            navigation,
            query: self.filters.query.clone(),
            facets: facets
                .active()
                .map(|(dimension, value)| (dimension.to_string(), value.to_string()))
                .collect(),
            rows: view.rows,
            matched: view.matched,
            total: view.total,
            facet_counts: view.facet_counts,
        }
    }

    fn view<R: Record>(&self, records: &[R], screen: Screen) -> ScreenView {
        let result = apply(records, &self.filters.query, &self.constraints());
        ScreenView {
            rows: result.iter().map(RecordRow::from_record).collect(),
            matched: result.len(),
            total: records.len(),
            facet_counts: screen
                .facet_dimensions()
                .iter()
                .map(|dimension| aggregate(records, dimension))
                .collect(),
        }
    }

    /// Datasets listed by the selected theme, narrowed by the query.
    fn theme_view(&self, id: &str, query: &str) -> ScreenView {
        let entries: Vec<ThemeDataset> = self
            .catalog
            .theme(id)
            .map(|theme| {
                theme
                    .datasets
                    .iter()
                    .map(|title| ThemeDataset(title.as_str()))
                    .collect()
            })
            .unwrap_or_default();
        let result = apply(&entries, query, &FacetSet::new());
        ScreenView {
            rows: result.iter().map(RecordRow::from_record).collect(),
            matched: result.len(),
            total: entries.len(),
            facet_counts: Vec::new(),
        }
    }

    /// One row per document kind that still has documents passing the filters.
    fn kind_rows(&self, query: &str, facets: &FacetSet) -> Vec<RecordRow> {
        let documents = apply(&self.catalog.documents, query, facets);
        let counts = aggregate(documents.iter(), "kind");
        DocumentKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let count = counts.get(&FacetValue::Only(kind.as_str().to_string()));
                (count > 0).then(|| RecordRow {
                    key: Some(kind.as_str().to_string()),
                    title: kind.label().to_string(),
                    meta: vec![match count {
                        1 => "1 document".to_string(),
                        n => format!("{n} documents"),
                    }],
                    ..Default::default()
                })
            })
            .collect()
    }
}

/// Rows and counts of the active screen before they go into a snapshot.
#[derive(Default)]
struct ScreenView {
    rows: Vec<RecordRow>,
    matched: usize,
    total: usize,
    facet_counts: Vec<FacetCounts>,
}

/// A dataset title inside a theme, searchable by that title.
struct ThemeDataset<'a>(&'a str);

impl Record for ThemeDataset<'_> {
    const FACETS: &'static [&'static str] = &[];

    fn title(&self) -> &str {
        self.0
    }

    fn facet(&self, _field: &str) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.0]
    }
}

/// Display-ready form of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    /// Sub-selection id passed to `drill_into` when this row is opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub facets: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<String>,
}

impl RecordRow {
    pub fn from_record<R: Record>(record: &R) -> Self {
        let facets = R::FACETS
            .iter()
            .filter_map(|field| {
                record
                    .facet(field)
                    .map(|value| (field.to_string(), value.to_string()))
            })
            .collect();
        // Themes are the only records opened by id.
        let key = record.facet("id").map(str::to_string);
        Self {
            key,
            title: record.title().to_string(),
            subtitle: record.subtitle().map(str::to_string),
            facets,
            meta: record.meta(),
        }
    }
}

/// Everything a renderer needs for the current navigation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenSnapshot {
    pub navigation: NavigationState,
    pub query: String,
    /// Active constraints including the drill-down facet.
    pub facets: BTreeMap<String, String>,
    pub rows: Vec<RecordRow>,
    /// Records passing every constraint. Framework's overview groups them into kind rows.
    pub matched: usize,
    /// Size of the unfiltered base collection.
    pub total: usize,
    /// Option counts per user-facing facet dimension, over the unfiltered collection.
    pub facet_counts: Vec<FacetCounts>,
}

impl ScreenSnapshot {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.title.as_str()).collect()
    }

    /// Current value of a facet dimension as the renderer should show it.
    pub fn facet_value(&self, dimension: &str) -> FacetValue {
        self.facets
            .get(dimension)
            .map(|value| FacetValue::Only(value.clone()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to OURS");
        assert!(app.navigation().is_home());
        assert_eq!(app.filters, FilterState::default());
        assert!(app.show_counts);
    }

    #[test]
    fn test_home_snapshot_is_empty() {
        let snapshot = test_app().snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.facet_counts.is_empty());
    }

    #[test]
    fn test_access_snapshot_lists_all_datasets_with_counts() {
        let mut app = test_app();
        app.navigate_to(Screen::Access);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.rows.len(), 6);
        assert_eq!(snapshot.total, 6);
        let fields: Vec<_> = snapshot.facet_counts.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["country", "category"]);
        assert_eq!(snapshot.facet_counts[0].entries.len(), 6);
    }

    #[test]
    fn test_facet_counts_ignore_other_active_facets() {
        let mut app = test_app();
        app.navigate_to(Screen::Access);
        app.filters.facets.set("category", "Ecology");
        let snapshot = app.snapshot();
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.facet_counts[0].entries.len(), 6);
        assert_eq!(snapshot.facet_value("category"), FacetValue::Only("Ecology".into()));
    }

    #[test]
    fn test_navigate_resets_filters() {
        let mut app = test_app();
        app.navigate_to(Screen::Access);
        app.filters.query = "water".into();
        app.filters.facets.set("country", "Tanzania");
        app.navigate_to(Screen::Access);
        assert_eq!(app.filters, FilterState::default());
    }

    #[test]
    fn test_thematic_detail_lists_theme_datasets() {
        let mut app = test_app();
        app.navigate_to(Screen::Thematic);
        let overview = app.snapshot();
        assert_eq!(overview.rows.len(), 5);
        assert_eq!(overview.rows[0].key.as_deref(), Some("health"));

        app.drill_into("health");
        let detail = app.snapshot();
        assert_eq!(detail.facets.get("id").map(String::as_str), Some("health"));
        assert_eq!(
            detail.titles(),
            vec![
                "Traditional Akan Healing Practices",
                "Herbal Medicine in West Africa",
                "Community Health Systems",
                "Mental Wellness Traditions",
            ]
        );
    }

    #[test]
    fn test_framework_overview_lists_kinds() {
        let mut app = test_app();
        app.navigate_to(Screen::Framework);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.titles(), vec!["Frameworks", "Policy", "Briefs"]);
        assert_eq!(snapshot.rows[1].key.as_deref(), Some("policy"));
        assert_eq!(snapshot.rows[1].meta, vec!["3 documents"]);
    }

    #[test]
    fn test_framework_detail_narrows_by_kind_and_category() {
        let mut app = test_app();
        app.navigate_to(Screen::Framework);
        app.drill_into("briefs");
        assert_eq!(app.snapshot().rows.len(), 3);

        app.filters.facets.set("category", "Health");
        assert_eq!(
            app.snapshot().titles(),
            vec!["Community Health Center Design Brief"]
        );
    }

    #[test]
    fn test_back_to_home_clears_filters() {
        let mut app = test_app();
        app.navigate_to(Screen::Verification);
        app.filters.facets.set("status", "pending");
        app.back();
        assert!(app.navigation().is_home());
        assert_eq!(app.filters, FilterState::default());
    }

    #[test]
    fn test_back_from_detail_keeps_filters() {
        let mut app = test_app();
        app.navigate_to(Screen::Framework);
        app.filters.facets.set("category", "Culture");
        app.drill_into("policy");
        app.back();
        assert_eq!(app.filters.facets.get("category"), FacetValue::Only("Culture".into()));
    }

    #[test]
    fn test_framework_overview_is_empty_when_no_document_matches() {
        let mut app = test_app();
        app.navigate_to(Screen::Framework);
        app.filters.query = "zzzz".into();
        let snapshot = app.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.matched, 0);
        assert_eq!(snapshot.total, 9);
    }

    #[test]
    fn test_framework_overview_drops_kinds_without_documents() {
        let mut app = test_app();
        app.navigate_to(Screen::Framework);
        app.filters.facets.set("category", "Culture");
        let snapshot = app.snapshot();
        assert_eq!(snapshot.titles(), vec!["Policy"]);
        assert_eq!(snapshot.rows[0].meta, vec!["1 document"]);
        assert_eq!(snapshot.matched, 1);
    }

    #[test]
    fn test_theme_detail_query_searches_dataset_titles() {
        let mut app = test_app();
        app.navigate_to(Screen::Thematic);
        app.drill_into("ecology");
        assert_eq!(app.snapshot().total, 4);

        app.filters.query = "WATER".into();
        let snapshot = app.snapshot();
        assert_eq!(snapshot.titles(), vec!["Water Conservation Systems"]);
        assert_eq!(snapshot.matched, 1);
        assert_eq!(snapshot.total, 4);
    }

    #[test]
    fn test_unknown_theme_detail_is_empty() {
        let mut app = test_app();
        app.navigate_to(Screen::Thematic);
        app.drill_into("astronomy");
        let snapshot = app.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total, 0);
    }
}
