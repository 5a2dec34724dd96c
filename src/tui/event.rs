use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C quits from anywhere
    Submit,
    Back, // Esc / Backspace
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    NextCountry,
    PrevCountry,
    NextSection,
    PrevSection,
    /// Digit shortcut for a header target (0 = logo).
    Jump(u8),
    ScrollPageUp,
    ScrollPageDown,
    ScrollUp,   // mouse wheel
    ScrollDown, // mouse wheel
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`. Read errors are logged and
/// treated as "no event".
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Map a raw crossterm event to a `TuiEvent`.
pub fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too; only act on presses
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Char(']')) | (_, KeyCode::Char('.')) => Some(TuiEvent::NextCountry),
        (_, KeyCode::Char('[')) | (_, KeyCode::Char(',')) => Some(TuiEvent::PrevCountry),
        (_, KeyCode::Tab) => Some(TuiEvent::NextSection),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevSection),
        (_, KeyCode::Home) => Some(TuiEvent::Jump(0)),
        (_, KeyCode::Char(c @ '0'..='4')) => Some(TuiEvent::Jump(c as u8 - b'0')),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digits_map_to_jumps() {
        assert_eq!(translate(key(KeyCode::Char('0'))), Some(TuiEvent::Jump(0)));
        assert_eq!(translate(key(KeyCode::Char('4'))), Some(TuiEvent::Jump(4)));
        assert_eq!(translate(key(KeyCode::Char('5'))), None);
        assert_eq!(translate(key(KeyCode::Home)), Some(TuiEvent::Jump(0)));
    }

    #[test]
    fn ctrl_c_is_force_quit() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ev), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn enter_and_space_submit() {
        assert_eq!(translate(key(KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyCode::Char(' '))), Some(TuiEvent::Submit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn left_click_carries_position() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(ev), Some(TuiEvent::MouseClick(7, 3)));
    }
}
