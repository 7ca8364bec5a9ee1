//! Interactive raw-mode loop
//!
//! Redraws the widget readout after every key press until a quit key.

use std::io::{self, IsTerminal, Write};

use console::style;
use crossterm::cursor::{Hide, MoveTo, MoveToNextLine, Show};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use deskcalc::prelude::*;

use crate::error::{CliError, CliResult};

/// Static text around the readout
#[derive(Debug, Clone)]
pub struct Screen {
    /// Heading line
    pub title: String,
    /// Lines printed under the readout (keypad legend, key help)
    pub footer: Vec<String>,
    /// Whether to style the readout
    pub use_color: bool,
}

impl Screen {
    /// Screen for the calculator: title, keypad legend and key help
    #[must_use]
    pub fn calculator(use_color: bool) -> Self {
        let mut footer: Vec<String> = Keypad::new().legend().lines().map(String::from).collect();
        footer.push(String::new());
        footer.push("Enter: =   Esc: Clear   q: quit".into());
        Self {
            title: "Calculator".into(),
            footer,
            use_color,
        }
    }

    /// Screen for the counter
    #[must_use]
    pub fn counter(use_color: bool) -> Self {
        Self {
            title: "Counter".into(),
            footer: vec!["+ / Up: increment   - / Down: decrement   q: quit".into()],
            use_color,
        }
    }

    /// Lines to draw for `readout`, top to bottom
    #[must_use]
    pub fn lines(&self, readout: &Readout) -> Vec<String> {
        let mut lines = vec![
            style(&self.title).bold().force_styling(self.use_color).to_string(),
            String::new(),
            style(&readout.history).dim().force_styling(self.use_color).to_string(),
            style(&readout.display)
                .bold()
                .cyan()
                .force_styling(self.use_color)
                .to_string(),
            String::new(),
        ];
        lines.extend(self.footer.iter().cloned());
        lines
    }
}

/// Runs `widget` interactively until a quit key.
///
/// The terminal is restored even when the loop fails.
pub fn run<W, F>(widget: &mut W, screen: &Screen, map_key: F) -> CliResult<()>
where
    W: Widget,
    F: Fn(KeyEvent) -> KeyAction<W::Action>,
{
    ensure_terminal()?;
    enable_raw_mode()?;
    let mut terminal = TerminalGuard::new(io::stdout());
    execute!(terminal.out, EnterAlternateScreen, Hide)?;

    event_loop(&mut terminal.out, widget, screen, &map_key)
}

/// Fails unless both stdin and stdout are a terminal
pub fn ensure_terminal() -> CliResult<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Ok(())
    } else {
        Err(CliError::invalid_argument(
            "interactive mode needs a terminal; pass a SCRIPT instead",
        ))
    }
}

/// Puts the terminal back in cooked mode when dropped, on every exit path
struct TerminalGuard<O: Write> {
    out: O,
}

impl<O: Write> TerminalGuard<O> {
    const fn new(out: O) -> Self {
        Self { out }
    }
}

impl<O: Write> Drop for TerminalGuard<O> {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to leave raw mode");
        }
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            tracing::warn!(%err, "failed to leave alternate screen");
        }
    }
}

fn event_loop<W, F, O>(out: &mut O, widget: &mut W, screen: &Screen, map_key: &F) -> CliResult<()>
where
    W: Widget,
    F: Fn(KeyEvent) -> KeyAction<W::Action>,
    O: Write,
{
    loop {
        draw(out, &screen.lines(&widget.readout()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key) {
            KeyAction::Widget(action) => {
                tracing::trace!(?action, "key pressed");
                widget.apply(action);
            }
            KeyAction::Quit => return Ok(()),
            KeyAction::None => {}
        }
    }
}

fn draw<O: Write>(out: &mut O, lines: &[String]) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in lines {
        queue!(out, Print(line), MoveToNextLine(1))?;
    }
    out.flush()
}
