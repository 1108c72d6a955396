use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::catalog::{ReviewStatus, thousands};
use crate::core::navigation::{NavigationState, Screen};
use crate::core::state::{App, ScreenSnapshot};
use crate::tui::component::Component;
use crate::tui::components::{FacetBar, LandingPage, RecordList, SearchBox, TitleBar};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let snapshot = app.snapshot();

    TitleBar::new(&snapshot.navigation, &app.status_message).render(frame, title_area);

    match snapshot.navigation.screen() {
        None => LandingPage::new(&mut tui.list_state).render(frame, body_area),
        Some(screen) => draw_screen(frame, body_area, app, &snapshot, screen, tui),
    }

    let help = footer_help(&snapshot.navigation, tui.input_mode);
    frame.render_widget(
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
        footer_area,
    );
}

fn draw_screen(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    snapshot: &ScreenSnapshot,
    screen: Screen,
    tui: &mut TuiState,
) {
    use Constraint::{Length, Min};
    let [search_area, facet_area, summary_area, list_area] =
        Layout::vertical([Length(3), Length(1), Length(1), Min(0)]).areas(area);

    SearchBox::new(
        &snapshot.query,
        tui.input_mode == InputMode::Search,
        search_placeholder(screen),
    )
    .render(frame, search_area);

    let values: Vec<_> = snapshot
        .facet_counts
        .iter()
        .map(|counts| snapshot.facet_value(&counts.field))
        .collect();
    let focused = (!snapshot.facet_counts.is_empty()).then_some(tui.facet_focus);
    FacetBar::new(&snapshot.facet_counts, &values, focused, app.show_counts)
        .render(frame, facet_area);

    frame.render_widget(
        Line::from(Span::styled(
            summary_line(app, screen),
            Style::default().fg(Color::Gray),
        )),
        summary_area,
    );

    let title = list_title(snapshot, screen);
    let help = if drillable_overview(&snapshot.navigation) {
        " ↑↓ Select  Enter Open  Esc Back "
    } else {
        " ↑↓ Select  Esc Back "
    };
    RecordList::new(
        &snapshot.rows,
        &mut tui.list_state,
        title,
        empty_message(&snapshot.navigation, screen),
        help,
    )
    .render(frame, list_area);
}

/// True on a drill-down screen's first level, where Enter opens a row.
pub fn drillable_overview(navigation: &NavigationState) -> bool {
    matches!(navigation, NavigationState::Screen { screen } if screen.supports_drill_down())
}

fn search_placeholder(screen: Screen) -> &'static str {
    match screen {
        Screen::Access => "Search datasets...",
        Screen::Verification => "Search stories or authors...",
        Screen::Thematic => "Search themes...",
        Screen::Framework => "Search documents...",
        Screen::Upload => "Search recent uploads...",
    }
}

fn empty_message(navigation: &NavigationState, screen: Screen) -> &'static str {
    match (navigation, screen) {
        (NavigationState::Detail { .. }, Screen::Thematic) => {
            "No datasets in this theme match your search"
        }
        (_, Screen::Access) => "No datasets found matching your criteria",
        (_, Screen::Verification) => "No stories match this filter",
        (_, Screen::Thematic) => "No themes match your search",
        (_, Screen::Framework) => "No documents match your criteria",
        (_, Screen::Upload) => "No uploads match your criteria",
    }
}

fn list_title(snapshot: &ScreenSnapshot, screen: Screen) -> String {
    let noun = match (&snapshot.navigation, screen) {
        (NavigationState::Detail { .. }, Screen::Thematic) => "Datasets",
        (NavigationState::Detail { .. }, Screen::Framework) => "Documents",
        (_, Screen::Thematic) => "Themes",
        (_, Screen::Framework) => "Document Types",
        (_, Screen::Access) => "Datasets",
        (_, Screen::Verification) => "Stories",
        (_, Screen::Upload) => "Recent Uploads",
    };
    match snapshot.navigation.sub_selection() {
        Some(sub) => format!("{noun} in {sub}"),
        None => format!("{noun} ({})", snapshot.rows.len()),
    }
}

/// Screen-level statistics line.
pub fn summary_line(app: &App, screen: Screen) -> String {
    match screen {
        Screen::Access => {
            let totals = app.catalog.dataset_totals();
            format!(
                "{} datasets · {} records · {} contributors · {} countries",
                totals.datasets,
                thousands(totals.records),
                thousands(totals.contributors),
                totals.countries
            )
        }
        Screen::Verification => {
            let counts = app.catalog.story_status_counts();
            [ReviewStatus::Verified, ReviewStatus::Review, ReviewStatus::Pending]
                .iter()
                .map(|status| {
                    let count = counts.get(&status.as_str().into());
                    format!("{} {}", status.label(), count)
                })
                .collect::<Vec<_>>()
                .join(" · ")
        }
        Screen::Thematic => format!("{} themes", app.catalog.themes.len()),
        Screen::Framework => format!("{} documents", app.catalog.documents.len()),
        Screen::Upload => {
            "Documents, audio and video that preserve community knowledge".to_string()
        }
    }
}

fn footer_help(navigation: &NavigationState, mode: InputMode) -> &'static str {
    match (navigation, mode) {
        (NavigationState::Home, _) => " 1-5 Jump  Enter Open  q Quit",
        (_, InputMode::Search) => " Type to filter  Enter/Esc Done  Ctrl+C Quit",
        (_, InputMode::Browse) => " / Search  Tab Facet  ←→ Value  c Clear  Esc Back  q Quit",
    }
}
