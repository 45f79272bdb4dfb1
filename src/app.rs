//! Menu driver: turns menu choices into session calls and messages.
//!
//! Independent of the terminal so both the raw-mode loop in `main.rs` and the
//! line-oriented loop here share one code path.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::Session;
use crate::input::{parse_choice, MenuChoice};
use crate::report::StateReport;
use crate::term::{plain_text, MenuEntry, StateView};

pub const INVALID_CHOICE: &str = "invalid choice, try again";
pub const UNDONE: &str = "last action undone (state restored)";
pub const NOTHING_TO_UNDO: &str = "nothing to undo";

/// Result of handling one menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub message: String,
    /// Outcome tag for operations, `None` for undo and quit.
    pub outcome: Option<&'static str>,
    pub quit: bool,
}

pub struct MenuApp {
    session: Session,
    seq: u64,
}

impl MenuApp {
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(seed),
            seq: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of choices handled so far (quit excluded).
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn handle(&mut self, choice: MenuChoice) -> Step {
        match choice {
            MenuChoice::Run(kind) => {
                self.seq += 1;
                let outcome = self.session.step(kind);
                Step {
                    message: outcome.to_string(),
                    outcome: Some(outcome.as_str()),
                    quit: false,
                }
            }
            MenuChoice::Undo => {
                self.seq += 1;
                let message = match self.session.undo() {
                    Ok(()) => UNDONE,
                    Err(_) => NOTHING_TO_UNDO,
                };
                Step {
                    message: message.to_string(),
                    outcome: None,
                    quit: false,
                }
            }
            MenuChoice::Quit => Step {
                message: "exiting".to_string(),
                outcome: None,
                quit: true,
            },
        }
    }

    /// Handle a typed line; unknown input leaves the session untouched.
    pub fn handle_line(&mut self, line: &str) -> Step {
        match parse_choice(line) {
            Some(choice) => self.handle(choice),
            None => {
                self.seq += 1;
                Step {
                    message: INVALID_CHOICE.to_string(),
                    outcome: None,
                    quit: false,
                }
            }
        }
    }

    pub fn report(&self, step: &Step) -> StateReport {
        StateReport::from_session(self.seq, &self.session, step.outcome, &step.message)
    }
}

/// Menu entries for display, in menu order.
pub fn menu_entries() -> Vec<MenuEntry> {
    MenuChoice::ALL
        .iter()
        .map(|c| (c.digit(), c.label()))
        .collect()
}

/// Line-oriented loop: read one choice per line until quit or EOF.
///
/// Text mode prints the state after every attempted action (quit excluded);
/// JSON mode prints one [`StateReport`] per line instead.
pub fn run_lines<R: BufRead, W: Write>(
    app: &mut MenuApp,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<()> {
    let view = StateView::new();

    if !json {
        write!(out, "{}", plain_text(&view.render(app.session(), None)))?;
        write_menu(out)?;
    }

    for line in input.lines() {
        let line = line?;
        let step = app.handle_line(&line);
        if step.quit {
            if !json {
                writeln!(out, "{}", step.message)?;
            }
            break;
        }

        if json {
            serde_json::to_writer(&mut *out, &app.report(&step))?;
            writeln!(out)?;
        } else {
            write!(
                out,
                "{}",
                plain_text(&view.render(app.session(), Some(&step.message)))
            )?;
            write_menu(out)?;
        }
        out.flush()?;
    }

    Ok(())
}

fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    for (digit, label) in menu_entries() {
        writeln!(out, "{} - {}", digit, label)?;
    }
    write!(out, "Choice: ")?;
    out.flush()?;
    Ok(())
}
