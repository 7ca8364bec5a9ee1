//! Keyboard input handling
//!
//! Maps crossterm key events onto widget actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operation;
use crate::keypad::{CounterAction, KeypadAction};

/// Result of interpreting a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction<A> {
    /// Forward an action to the widget
    Widget(A),
    /// Leave the interactive loop
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a calculator action
    #[must_use]
    pub fn calculator_key(&self, event: KeyEvent) -> KeyAction<KeypadAction> {
        if let Some(quit) = Self::quit_key(event) {
            return quit;
        }

        match event.code {
            KeyCode::Enter => KeyAction::Widget(KeypadAction::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Widget(KeypadAction::Clear),
            KeyCode::Char(c) => {
                KeypadAction::try_from(c).map_or(KeyAction::None, KeyAction::Widget)
            }
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to a counter action
    #[must_use]
    pub fn counter_key(&self, event: KeyEvent) -> KeyAction<CounterAction> {
        if let Some(quit) = Self::quit_key(event) {
            return quit;
        }

        match event.code {
            KeyCode::Up | KeyCode::Right => KeyAction::Widget(CounterAction::Increment),
            KeyCode::Down | KeyCode::Left => KeyAction::Widget(CounterAction::Decrement),
            KeyCode::Char(c) => match Operation::try_from(c) {
                Ok(Operation::Add) => KeyAction::Widget(CounterAction::Increment),
                Ok(Operation::Subtract) => KeyAction::Widget(CounterAction::Decrement),
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    /// Quit bindings shared by both widgets: `q`, Ctrl+C and Ctrl+Q
    fn quit_key<A>(event: KeyEvent) -> Option<KeyAction<A>> {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return Some(match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            });
        }

        matches!(code, KeyCode::Char('q' | 'Q')).then_some(KeyAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Calculator keys =====

    #[test]
    fn test_calculator_digits() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.calculator_key(key_event(KeyCode::Char(c))),
                KeyAction::Widget(KeypadAction::Digit(Digit::ALL[usize::from(d)]))
            );
        }
    }

    #[test]
    fn test_calculator_operators() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.calculator_key(key_event(KeyCode::Char('*'))),
            KeyAction::Widget(KeypadAction::Operator(Operation::Multiply))
        );
        assert_eq!(
            handler.calculator_key(key_event(KeyCode::Char('/'))),
            KeyAction::Widget(KeypadAction::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_calculator_enter_is_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.calculator_key(key_event(KeyCode::Enter)),
            KeyAction::Widget(KeypadAction::Equals)
        );
        assert_eq!(
            handler.calculator_key(key_event(KeyCode::Char('='))),
            KeyAction::Widget(KeypadAction::Equals)
        );
    }

    #[test]
    fn test_calculator_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Delete, KeyCode::Char('c')] {
            assert_eq!(
                handler.calculator_key(key_event(code)),
                KeyAction::Widget(KeypadAction::Clear)
            );
        }
    }

    #[test]
    fn test_calculator_ignores_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.calculator_key(key_event(KeyCode::Char('('))),
            KeyAction::None
        );
        assert_eq!(handler.calculator_key(key_event(KeyCode::Tab)), KeyAction::None);
    }

    // ===== Counter keys =====

    #[test]
    fn test_counter_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Char('+'), KeyCode::Up, KeyCode::Right] {
            assert_eq!(
                handler.counter_key(key_event(code)),
                KeyAction::Widget(CounterAction::Increment)
            );
        }
        for code in [KeyCode::Char('-'), KeyCode::Down, KeyCode::Left] {
            assert_eq!(
                handler.counter_key(key_event(code)),
                KeyAction::Widget(CounterAction::Decrement)
            );
        }
        assert_eq!(
            handler.counter_key(key_event(KeyCode::Char('*'))),
            KeyAction::None
        );
    }

    // ===== Quit =====

    #[test]
    fn test_quit_bindings() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.calculator_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.calculator_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.counter_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_c_is_quit_not_clear() {
        let handler = InputHandler::new();
        assert_ne!(
            handler.calculator_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Widget(KeypadAction::Clear)
        );
    }

    #[test]
    fn test_other_ctrl_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.counter_key(key_event_ctrl(KeyCode::Up)),
            KeyAction::None
        );
    }
}
