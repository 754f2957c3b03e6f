use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    /// The action button (Submit / Next / Try Again / Retry).
    Confirm,
    Restart,
    SelectPrev,
    SelectNext,
    /// Digit keys pick a choice directly (0-based).
    SelectIndex(usize),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
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
        Ok(ev) => map_event(ev),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::SelectPrev),
            MouseEventKind::ScrollDown => Some(TuiEvent::SelectNext),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Only react to presses; release/repeat reports would double-fire.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Confirm),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Restart),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::SelectPrev),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) | (_, KeyCode::Tab) => {
            Some(TuiEvent::SelectNext)
        }
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::SelectIndex(c as usize - '1' as usize)),
        _ => None,
    }
}
