//! Mapping from menu input to menu choices.

use crate::types::OperationKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(OperationKind),
    Undo,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Run(OperationKind::Play),
        MenuChoice::Run(OperationKind::Reserve),
        MenuChoice::Run(OperationKind::UseReserved),
        MenuChoice::Run(OperationKind::SwapTopFront),
        MenuChoice::Undo,
        MenuChoice::Run(OperationKind::Invert),
        MenuChoice::Quit,
    ];

    /// Map a menu digit to a choice.
    pub fn from_digit(d: u32) -> Option<Self> {
        match d {
            1 => Some(MenuChoice::Run(OperationKind::Play)),
            2 => Some(MenuChoice::Run(OperationKind::Reserve)),
            3 => Some(MenuChoice::Run(OperationKind::UseReserved)),
            4 => Some(MenuChoice::Run(OperationKind::SwapTopFront)),
            5 => Some(MenuChoice::Undo),
            6 => Some(MenuChoice::Run(OperationKind::Invert)),
            0 => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    pub fn digit(&self) -> u32 {
        match self {
            MenuChoice::Run(OperationKind::Play) => 1,
            MenuChoice::Run(OperationKind::Reserve) => 2,
            MenuChoice::Run(OperationKind::UseReserved) => 3,
            MenuChoice::Run(OperationKind::SwapTopFront) => 4,
            MenuChoice::Undo => 5,
            MenuChoice::Run(OperationKind::Invert) => 6,
            MenuChoice::Quit => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Run(OperationKind::Play) => "Play piece",
            MenuChoice::Run(OperationKind::Reserve) => "Reserve piece",
            MenuChoice::Run(OperationKind::UseReserved) => "Use reserved piece",
            MenuChoice::Run(OperationKind::SwapTopFront) => "Swap stack top with queue front",
            MenuChoice::Undo => "Undo last action",
            MenuChoice::Run(OperationKind::Invert) => "Invert queue and stack",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Parse one line of the plain menu.
///
/// Accepts the menu digit or an operation name (`play`, `reserve`, `use`,
/// `swap`, `invert`, `undo`, `quit`). Surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let line = line.trim();
    if let Ok(d) = line.parse::<u32>() {
        return MenuChoice::from_digit(d);
    }
    match line.to_lowercase().as_str() {
        "undo" | "u" => Some(MenuChoice::Undo),
        "quit" | "exit" | "q" => Some(MenuChoice::Quit),
        other => OperationKind::from_str(other).map(MenuChoice::Run),
    }
}

/// Map a key press to a menu choice.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuChoice> {
    match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => Some(MenuChoice::Undo),
        KeyCode::Char(c) => c.to_digit(10).and_then(MenuChoice::from_digit),
        KeyCode::Esc => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_digits_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_digit(choice.digit()), Some(choice));
        }
        assert_eq!(MenuChoice::from_digit(7), None);
    }

    #[test]
    fn test_parse_choice_lines() {
        assert_eq!(
            parse_choice(" 1\n"),
            Some(MenuChoice::Run(OperationKind::Play))
        );
        assert_eq!(parse_choice("5"), Some(MenuChoice::Undo));
        assert_eq!(parse_choice("0"), Some(MenuChoice::Quit));
        assert_eq!(
            parse_choice("Swap"),
            Some(MenuChoice::Run(OperationKind::SwapTopFront))
        );
        assert_eq!(parse_choice("undo"), Some(MenuChoice::Undo));
        assert_eq!(parse_choice("9"), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("abc"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(MenuChoice::Run(OperationKind::Reserve))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('6'))),
            Some(MenuChoice::Run(OperationKind::Invert))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(MenuChoice::Quit)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('8'))), None);
    }

    #[test]
    fn test_undo_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(MenuChoice::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(MenuChoice::Undo)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
