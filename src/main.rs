//! Next Pieces menu (default binary).
//!
//! Interactive terminals get a raw-mode, single-keypress menu drawn with
//! crossterm. `--plain`, `--json`, or a non-terminal stdin switch to the
//! line-oriented loop in [`next_pieces::app::run_lines`].

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::tty::IsTty;

use next_pieces::app::{menu_entries, run_lines, MenuApp, INVALID_CHOICE};
use next_pieces::config::{parse_args, AppConfig, SEED_ENV, USAGE};
use next_pieces::input::{handle_key_event, should_quit};
use next_pieces::term::{StateView, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_seed = std::env::var(SEED_ENV).ok();

    let config = match parse_args(&args, env_seed.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[next-pieces] {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut app = MenuApp::new(config.seed);

    if config.plain || config.json || !io::stdin().is_tty() {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return run_lines(&mut app, stdin.lock(), &mut stdout, config.json);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        eprintln!("[next-pieces] {}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut MenuApp, config: &AppConfig) -> Result<()> {
    let view = StateView::new().with_menu(menu_entries());
    let mut message = format!("seed {} - press a menu digit, q to quit", config.seed);
    term.draw(&view.render(app.session(), Some(&message)))?;

    loop {
        message = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(choice) => {
                        let step = app.handle(choice);
                        if step.quit {
                            return Ok(());
                        }
                        step.message
                    }
                    None => INVALID_CHOICE.to_string(),
                }
            }
            Event::Resize(_, _) => message,
            _ => continue,
        };

        term.draw(&view.render(app.session(), Some(&message)))?;
    }
}
