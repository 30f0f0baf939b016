//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to preview messages.

use std::time::Duration;

use cardex_protocol::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to a preview message.
///
/// Only key presses are handled; releases, mouse and resize events map to
/// `None` (a resize is picked up by the next redraw).
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key),
        _ => None,
    }
}

/// Converts a terminal key event to a preview message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Left` or `h` | Previous work item |
/// | `Right` or `l` | Next work item |
/// | `Home` or `g` | First work item |
/// | `End` or `G` | Last work item |
/// | `r` | Reload the configuration |
/// | `q`, `Esc` or `Ctrl+C` | Quit |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Message::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Message::PreviousItem),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::NextItem),
        KeyCode::Home | KeyCode::Char('g') => Some(Message::FirstItem),
        KeyCode::End | KeyCode::Char('G') => Some(Message::LastItem),
        KeyCode::Char('r') => Some(Message::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), Some(Message::Quit));
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Quit));
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::PreviousItem)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NextItem)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Home)),
            Some(Message::FirstItem)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::End)),
            Some(Message::LastItem)
        );
    }

    #[test]
    fn vim_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('h'))),
            Some(Message::PreviousItem)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('l'))),
            Some(Message::NextItem)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('g'))),
            Some(Message::FirstItem)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('G'),
                KeyModifiers::SHIFT
            )),
            Some(Message::LastItem)
        );
    }

    #[test]
    fn reload_key() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('r'))),
            Some(Message::Reload)
        );
    }

    #[test]
    fn other_control_chords_are_ignored() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('r'),
                KeyModifiers::CONTROL
            )),
            None
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), None);
    }

    #[test]
    fn event_to_message_handles_key_presses() {
        let event = Event::Key(make_key(KeyCode::Right));
        assert_eq!(event_to_message(&event), Some(Message::NextItem));
    }

    #[test]
    fn event_to_message_ignores_key_releases() {
        let event = Event::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..make_key(KeyCode::Right)
        });
        assert_eq!(event_to_message(&event), None);
    }

    #[test]
    fn event_to_message_ignores_resize() {
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
