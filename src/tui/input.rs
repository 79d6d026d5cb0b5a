// Key debounce for page keys
//
// Scrolling keys repeat while held; every other page key fires once per
// press. Text typed into the contact form never goes through here.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Terminals without release events resend a held key; accept it again after this
const RESEND_GAP: Duration = Duration::from_millis(150);

/// How a held key repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// One action per press
    Once,
    /// Repeat after `delay`, then every `interval`
    Held { delay: Duration, interval: Duration },
}

impl Repeat {
    const LINE: Repeat = Repeat::Held {
        delay: Duration::from_millis(500),
        interval: Duration::from_millis(50),
    };

    const PAGE: Repeat = Repeat::Held {
        delay: Duration::from_millis(300),
        interval: Duration::from_millis(30),
    };

    /// Page keymap: line and page scrolling repeat, everything else is once
    pub fn for_key(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => Self::LINE,
            KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => Self::PAGE,
            _ => Self::Once,
        }
    }
}

/// A key currently held down
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Decides whether a key press (or terminal resend) should act
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key's action should run now
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now(), Repeat::for_key(key))
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant, repeat: Repeat) -> bool {
        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let due = match repeat {
            Repeat::Once => now.duration_since(held.last_fired) >= RESEND_GAP,
            Repeat::Held { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if due {
            held.last_fired = now;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_keys_fire_once_per_press() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_key_press(KeyCode::Char('t')));
        assert!(!handler.handle_key_press(KeyCode::Char('t')));
        assert!(!handler.handle_key_press(KeyCode::Char('t')));

        handler.handle_key_release(KeyCode::Char('t'));
        assert!(handler.handle_key_press(KeyCode::Char('t')));
    }

    #[test]
    fn once_keys_accept_resend_after_gap() {
        let mut handler = InputHandler::new();
        let start = Instant::now();

        assert!(handler.press_at(KeyCode::Enter, start, Repeat::Once));
        assert!(!handler.press_at(KeyCode::Enter, start + Duration::from_millis(50), Repeat::Once));
        assert!(handler.press_at(KeyCode::Enter, start + RESEND_GAP, Repeat::Once));
    }

    #[test]
    fn held_keys_repeat_after_delay() {
        let mut handler = InputHandler::new();
        let repeat = Repeat::Held {
            delay: Duration::from_millis(100),
            interval: Duration::from_millis(50),
        };
        let start = Instant::now();
        let at = |ms| start + Duration::from_millis(ms);

        assert!(handler.press_at(KeyCode::Down, start, repeat));
        assert!(!handler.press_at(KeyCode::Down, at(20), repeat));
        assert!(handler.press_at(KeyCode::Down, at(110), repeat));
        assert!(!handler.press_at(KeyCode::Down, at(130), repeat));
        assert!(handler.press_at(KeyCode::Down, at(170), repeat));
    }

    #[test]
    fn keymap_repeats_only_scrolling() {
        assert_eq!(Repeat::for_key(KeyCode::Char('j')), Repeat::LINE);
        assert_eq!(Repeat::for_key(KeyCode::PageDown), Repeat::PAGE);
        assert_eq!(Repeat::for_key(KeyCode::Char('m')), Repeat::Once);
        assert_eq!(Repeat::for_key(KeyCode::Char('z')), Repeat::Once);
    }
}
