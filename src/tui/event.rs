use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    ForceQuit, // Ctrl+C
    Escape,
    Submit,

    InputChar(char),
    Paste(String),
    Backspace,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    NextFacet,     // Tab
    PreviousFacet, // Shift+Tab
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Terminal read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Tab) => Some(TuiEvent::NextFacet),
                (_, KeyCode::BackTab) => Some(TuiEvent::PreviousFacet),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let event = translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(event, Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_plain_chars_are_input() {
        let event = translate(key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(event, Some(TuiEvent::InputChar('q')));
    }

    #[test]
    fn test_tab_cycles_facets() {
        assert_eq!(
            translate(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::NextFacet)
        );
        assert_eq!(
            translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PreviousFacet)
        );
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        assert_eq!(
            translate(Event::Paste("kenya".into())),
            Some(TuiEvent::Paste("kenya".into()))
        );
    }
}
