//! Keyboard input dispatch — quit keys, then the two game actions.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::error;

use crate::app::AppState;

pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('c') | KeyCode::Enter => app.check(now),
        KeyCode::Char('n') => {
            if let Err(err) = app.new_game(now) {
                error!(%err, "failed to generate a new series");
                app.set_error(format!("New game failed: {err}"));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    use chartguessr_core::Phase;

    use crate::test_helpers::loaded_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let (mut app, now) = loaded_app(1);
        handle_key(&mut app, press(KeyCode::Char('q')), now);
        assert!(!app.running);
    }

    #[test]
    fn c_and_enter_check() {
        let (mut app, now) = loaded_app(1);
        handle_key(&mut app, press(KeyCode::Char('c')), now);
        assert_eq!(app.game.phase(), Phase::CheckedPaused);
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert_eq!(app.game.phase(), Phase::CheckedResumed);
    }

    #[test]
    fn n_starts_new_round() {
        let (mut app, now) = loaded_app(1);
        handle_key(&mut app, press(KeyCode::Char('c')), now);
        handle_key(&mut app, press(KeyCode::Char('n')), now);
        assert_eq!(app.round(), 2);
        assert_eq!(app.game.phase(), Phase::Playing);
    }

    #[test]
    fn release_events_ignored() {
        let (mut app, now) = loaded_app(1);
        let release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release, now);
        assert_eq!(app.game.phase(), Phase::Playing);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let (mut app, now) = loaded_app(1);
        handle_key(&mut app, press(KeyCode::Char('x')), now);
        assert!(app.running);
        assert_eq!(app.game.phase(), Phase::Playing);
        assert!(app.status_message.is_none());
    }
}
