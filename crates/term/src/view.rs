//! StateView: maps a `core::Session` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Session;
use crate::style::{kind_color, Line, Rgb, Span, Style};
use crate::types::Piece;

const HEADER: Style = Style::fg(Rgb::new(200, 200, 200)).bold();
const MUTED: Style = Style::fg(Rgb::new(140, 140, 140)).dim();

/// Menu entry as shown under the state: digit and label.
pub type MenuEntry = (u32, &'static str);

/// Renders queue, stack, undo status and an optional message.
#[derive(Debug, Clone, Default)]
pub struct StateView {
    menu: Vec<MenuEntry>,
}

impl StateView {
    pub fn new() -> Self {
        Self { menu: Vec::new() }
    }

    /// Append a menu below the state.
    pub fn with_menu(mut self, entries: impl IntoIterator<Item = MenuEntry>) -> Self {
        self.menu = entries.into_iter().collect();
        self
    }

    pub fn render(&self, session: &Session, message: Option<&str>) -> Vec<Line> {
        let mut out = Vec::new();

        out.push(Line::styled("=== Queue (front -> back) ===", HEADER));
        let mut any = false;
        for (i, piece) in session.queue_view().enumerate() {
            out.push(piece_line(&format!("Pos {}", i + 1), piece));
            any = true;
        }
        if !any {
            out.push(Line::styled("[empty]", MUTED));
        }

        out.push(Line::styled("=== Reserve stack (top -> base) ===", HEADER));
        let depth = session.stack().len();
        let mut any = false;
        for (i, piece) in session.stack_view().enumerate() {
            out.push(piece_line(&format!("Level {}", depth - i), piece));
            any = true;
        }
        if !any {
            out.push(Line::styled("[empty]", MUTED));
        }

        let undo = if session.undo_available() {
            "undo: available"
        } else {
            "undo: none"
        };
        out.push(Line::styled(undo, MUTED));

        if let Some(msg) = message {
            out.push(Line::new());
            out.push(Line::plain(format!(">> {}", msg)));
        }

        if !self.menu.is_empty() {
            out.push(Line::new());
            out.push(Line::styled("Menu:", HEADER));
            for (digit, label) in &self.menu {
                out.push(Line::plain(format!("{} - {}", digit, label)));
            }
        }

        out
    }
}

fn piece_line(prefix: &str, piece: &Piece) -> Line {
    Line::plain(format!("{}: ", prefix))
        .push(Span::new(
            piece.kind.as_char().to_string(),
            Style::fg(kind_color(piece.kind)).bold(),
        ))
        .push(Span::plain(format!(" (id {})", piece.id)))
}

/// Join lines into plain text, one per row.
pub fn plain_text(lines: &[Line]) -> String {
    let mut s = String::new();
    for line in lines {
        s.push_str(&line.text());
        s.push('\n');
    }
    s
}
