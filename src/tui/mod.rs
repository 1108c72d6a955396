//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! Another front end (web, snapshot export) can drive the same core
//! through `update()` and `App::snapshot()`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms per poll and only
//! redraws after an event or a terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::core::action::{Action, Effect, update};
use crate::core::filter::FacetValue;
use crate::core::navigation::{NavigationState, Screen};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arrow keys move the selection and step facet values.
    Browse,
    /// Keystrokes edit the search query.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_mode: InputMode,
    /// Selection in the landing menu or the record list.
    pub list_state: ListState,
    /// Index into the screen's facet dimensions.
    pub facet_focus: usize,
    // Navigation seen on the last dispatch; a change resets the selection.
    last_navigation: NavigationState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Browse,
            list_state: ListState::default().with_selected(Some(0)),
            facet_focus: 0,
            last_navigation: NavigationState::Home,
        }
    }

    fn sync_navigation(&mut self, navigation: &NavigationState) {
        if &self.last_navigation != navigation {
            debug!("Navigation changed to {:?}, resetting selection", navigation);
            self.last_navigation = navigation.clone();
            self.list_state.select(Some(0));
            self.facet_focus = 0;
            self.input_mode = InputMode::Browse;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = (|| -> std::io::Result<()> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(IDLE_POLL);
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Drain everything pending before the next draw
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                if dispatch(&mut app, &mut tui, event) == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
        }
    })();

    ratatui::restore();
    result
}

/// Route one terminal event through the modal keymap into core actions.
pub(crate) fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    tui.sync_navigation(app.navigation());
    let effect = match event {
        TuiEvent::Resize => Effect::None,
        // Ctrl+C always quits regardless of mode
        TuiEvent::ForceQuit => update(app, Action::Quit),
        _ if app.navigation().is_home() => dispatch_home(app, tui, event),
        _ => match tui.input_mode {
            InputMode::Search => dispatch_search(app, tui, event),
            InputMode::Browse => dispatch_browse(app, tui, event),
        },
    };
    tui.sync_navigation(app.navigation());
    effect
}

fn dispatch_home(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let count = Screen::ALL.len();
    match event {
        TuiEvent::CursorUp => {
            step_selection(&mut tui.list_state, count, false);
            Effect::None
        }
        TuiEvent::CursorDown => {
            step_selection(&mut tui.list_state, count, true);
            Effect::None
        }
        TuiEvent::Submit => {
            let index = tui.list_state.selected().unwrap_or(0);
            match Screen::ALL.get(index) {
                Some(&screen) => update(app, Action::Navigate(screen)),
                None => Effect::None,
            }
        }
        TuiEvent::InputChar(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            match Screen::ALL.get(index) {
                Some(&screen) => update(app, Action::Navigate(screen)),
                None => Effect::None,
            }
        }
        TuiEvent::InputChar('q') | TuiEvent::Escape => update(app, Action::Quit),
        _ => Effect::None,
    }
}

fn dispatch_search(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let mut query = app.filters.query.clone();
    match event {
        TuiEvent::Submit | TuiEvent::Escape => {
            tui.input_mode = InputMode::Browse;
            return Effect::None;
        }
        TuiEvent::InputChar(c) => query.push(c),
        TuiEvent::Paste(text) => query.push_str(text.trim_end_matches(['\r', '\n'])),
        TuiEvent::Backspace => {
            query.pop();
        }
        _ => return Effect::None,
    }
    tui.list_state.select(Some(0));
    update(app, Action::SetQuery(query))
}

fn dispatch_browse(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let snapshot = app.snapshot();
    match event {
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
            Effect::None
        }
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('c') => update(app, Action::ClearFilters),
        TuiEvent::CursorUp => {
            step_selection(&mut tui.list_state, snapshot.rows.len(), false);
            Effect::None
        }
        TuiEvent::CursorDown => {
            step_selection(&mut tui.list_state, snapshot.rows.len(), true);
            Effect::None
        }
        TuiEvent::NextFacet | TuiEvent::PreviousFacet => {
            let dimensions = snapshot.facet_counts.len();
            if dimensions > 0 {
                tui.facet_focus = if event == TuiEvent::NextFacet {
                    (tui.facet_focus + 1) % dimensions
                } else {
                    (tui.facet_focus + dimensions - 1) % dimensions
                };
            }
            Effect::None
        }
        TuiEvent::CursorLeft | TuiEvent::CursorRight => {
            let Some(counts) = snapshot.facet_counts.get(tui.facet_focus) else {
                return Effect::None;
            };
            let current = snapshot.facet_value(&counts.field);
            let value: FacetValue = counts.cycle(&current, event == TuiEvent::CursorRight);
            tui.list_state.select(Some(0));
            update(
                app,
                Action::SetFacet {
                    dimension: counts.field.clone(),
                    value,
                },
            )
        }
        TuiEvent::Submit => {
            if !ui::drillable_overview(&snapshot.navigation) {
                return Effect::None;
            }
            let selected = tui.list_state.selected().unwrap_or(0);
            match snapshot.rows.get(selected).and_then(|row| row.key.clone()) {
                Some(key) => update(app, Action::DrillInto(key)),
                None => Effect::None,
            }
        }
        TuiEvent::Escape | TuiEvent::Backspace => update(app, Action::Back),
        _ => Effect::None,
    }
}

/// Move a list selection one step, clamped to `[0, len)`.
fn step_selection(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0).min(len - 1);
    let next = if forward {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    };
    state.select(Some(next));
}
