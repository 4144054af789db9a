//! Entering and leaving the game's terminal mode.
//!
//! Restoring runs every step even when an earlier one fails, so a broken
//! step never leaves the shell in raw mode.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

pub type Step<'a> = (&'static str, Box<dyn FnOnce() -> io::Result<()> + 'a>);

/// Run all steps in order. Failures are logged and the first one is returned.
pub fn run_steps(steps: Vec<Step<'_>>) -> io::Result<()> {
    let mut first_error = None;
    for (name, step) in steps {
        if let Err(e) = step() {
            log::error!("terminal {} failed: {}", name, e);
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Raw mode, alternate screen and mouse capture. On failure whatever was
/// already switched on is undone before the error is returned.
pub fn setup() -> io::Result<Term> {
    let result = (|| -> io::Result<Term> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })();
    if result.is_err() {
        let _ = restore(None);
    }
    result
}

/// Undo [`setup`]. Every step runs even if an earlier one fails.
pub fn restore(terminal: Option<&mut Term>) -> io::Result<()> {
    let mut steps: Vec<Step<'_>> = vec![
        (
            "mouse capture release",
            Box::new(|| io::stdout().execute(DisableMouseCapture).map(|_| ())),
        ),
        (
            "alternate screen exit",
            Box::new(|| io::stdout().execute(LeaveAlternateScreen).map(|_| ())),
        ),
        ("raw mode exit", Box::new(disable_raw_mode)),
    ];
    if let Some(terminal) = terminal {
        steps.push(("cursor restore", Box::new(move || terminal.show_cursor())));
    }
    run_steps(steps)
}
