use std::time::Duration;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crate::shared::InputEvent;

// poll for a key press from the terminal and resolve it into input events
// for the middle layer; releases and repeats are ignored
pub fn poll_input(timeout: Duration) -> anyhow::Result<Vec<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(vec![]);
    }

    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(vec![]);
        }
        return Ok(handle_key(key.code));
    }
    Ok(vec![])
}

pub fn handle_key(code: KeyCode) -> Vec<InputEvent> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => vec![InputEvent::Quit],
        KeyCode::Char(' ') => vec![InputEvent::PlayPress],

        // tempo nudges, restart the loop if it's running
        KeyCode::Char('[') => vec![InputEvent::BpmDown],
        KeyCode::Char(']') => vec![InputEvent::BpmUp],

        KeyCode::Char('g') => vec![InputEvent::NextGenre],
        KeyCode::Char('p') => vec![InputEvent::NextPart],

        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_events() {
        assert_eq!(handle_key(KeyCode::Esc), vec![InputEvent::Quit]);
        assert_eq!(handle_key(KeyCode::Char(' ')), vec![InputEvent::PlayPress]);
        assert_eq!(handle_key(KeyCode::Char(']')), vec![InputEvent::BpmUp]);
        assert_eq!(handle_key(KeyCode::Char('g')), vec![InputEvent::NextGenre]);
        assert!(handle_key(KeyCode::Char('x')).is_empty());
    }
}
