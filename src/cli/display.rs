//! Terminal rendering and the interactive console
//!
//! Raw mode stays on for the session (line endings are `\r\n` throughout);
//! it is restored on drop even when the loop errors out.

use std::io::{self, stdout, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use super::input::LineReader;
use super::{Console, Guess, Signal};
use crate::session::SessionSummary;
use crate::trial::TrialConfig;

/// Interactive console backed by the local terminal
pub struct Terminal {
    reader: LineReader,
}

impl Terminal {
    /// Switches the terminal to raw mode
    pub fn new() -> io::Result<Self> {
        LineReader::enable_raw_mode()?;
        Ok(Terminal {
            reader: LineReader::new(),
        })
    }

    /// Final counts, printed on clean exit only
    pub fn show_summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        let mut out = stdout();
        execute!(
            out,
            Print("\r\n\r\n"),
            SetForegroundColor(Color::Cyan),
            Print("Correct answers: "),
            ResetColor,
            Print(format!(
                "{}/{} ({}%)\r\n",
                summary.correct, summary.total, summary.percentage
            )),
        )?;
        out.flush()
    }
}

impl Console for Terminal {
    fn intro(&mut self, config: &TrialConfig) -> io::Result<()> {
        let mut out = stdout();
        let extra = if config.add_number { " + a number" } else { "" };
        execute!(
            out,
            SetForegroundColor(Color::Cyan),
            Print("Spelling Practice: a game to practice acronym spelling.\r\n\r\n"),
            ResetColor,
            Print(format!(
                "Hear a speaker saying a random acronym of length {}{} and write it. \
                 Press Ctrl+C anytime to exit.\r\n\r\n",
                config.length, extra
            )),
        )?;
        out.flush()
    }

    fn wait_ack(&mut self) -> io::Result<Signal> {
        let mut out = stdout();
        execute!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print("Press ENTER to continue..."),
            ResetColor,
        )?;
        out.flush()?;

        let signal = self.reader.read_ack()?;
        execute!(stdout(), Print("\r\n\r\n"))?;
        Ok(signal)
    }

    fn read_guess(&mut self) -> io::Result<Guess> {
        let mut out = stdout();
        execute!(
            out,
            SetForegroundColor(Color::Yellow),
            Print("Acronym: "),
            ResetColor,
        )?;
        out.flush()?;
        self.reader.read_line()
    }

    fn show_verdict(&mut self, is_correct: bool, expected: &str) -> io::Result<()> {
        let mut out = stdout();
        if is_correct {
            execute!(
                out,
                SetForegroundColor(Color::Green),
                Print("Correct!\r\n"),
                ResetColor,
            )?;
        } else {
            execute!(
                out,
                SetForegroundColor(Color::Red),
                Print("Incorrect."),
                ResetColor,
                Print(format!(" It was {}.\r\n", expected)),
            )?;
        }
        out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = LineReader::disable_raw_mode();
    }
}
