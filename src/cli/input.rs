//! Raw-mode line capture using crossterm
//!
//! Reads key events into a line buffer with echo and backspace handling.
//! Ctrl+C and Esc surface as an interrupt value instead of killing the
//! process, so the session loop decides whether the exit is clean.

use std::io::{self, stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::{Guess, Signal};

/// Reads acknowledgments and guess lines from the terminal
pub struct LineReader;

impl LineReader {
    pub fn new() -> Self {
        LineReader
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    /// Block until ENTER or an interrupt key
    pub fn read_ack(&mut self) -> io::Result<Signal> {
        loop {
            let key = self.next_key()?;
            if Self::is_interrupt(&key) {
                return Ok(Signal::Interrupt);
            }
            if matches!(key.code, KeyCode::Enter) {
                return Ok(Signal::Proceed);
            }
        }
    }

    /// Block until a full line is entered, echoing as it goes
    pub fn read_line(&mut self) -> io::Result<Guess> {
        let mut line = String::new();
        let mut out = stdout();

        loop {
            let key = self.next_key()?;
            if Self::is_interrupt(&key) {
                return Ok(Guess::Interrupt);
            }

            match key.code {
                KeyCode::Enter => {
                    write!(out, "\r\n")?;
                    out.flush()?;
                    return Ok(Guess::Line(line));
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        write!(out, "\u{8} \u{8}")?;
                        out.flush()?;
                    }
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    line.push(c);
                    write!(out, "{}", c)?;
                    out.flush()?;
                }
                _ => {}
            }
        }
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }

    /// Ctrl+C or Escape ends the session
    fn is_interrupt(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(LineReader::is_interrupt(&key));
    }

    #[test]
    fn test_escape_is_interrupt() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(LineReader::is_interrupt(&key));
    }

    #[test]
    fn test_plain_c_is_not_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!LineReader::is_interrupt(&key));
    }
}
