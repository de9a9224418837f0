//! CLI interface: prompts, line input, and terminal rendering
//!
//! # Components
//! - `input.rs`: raw-mode line capture using crossterm
//! - `display.rs`: colored prompts, verdicts, and the session summary

pub mod display;
pub mod input;

pub use display::Terminal;

use std::io;

use crate::trial::TrialConfig;

/// Outcome of a pacing acknowledgment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Proceed,
    Interrupt,
}

/// Outcome of a guess read
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guess {
    Line(String),
    Interrupt,
}

/// Blocking console interactions the session loop depends on
pub trait Console {
    /// Session banner, shown once before the first acknowledgment
    fn intro(&mut self, config: &TrialConfig) -> io::Result<()>;

    /// Pacing gate before each trial and after each verdict
    fn wait_ack(&mut self) -> io::Result<Signal>;

    /// Read one line as the user's guess
    fn read_guess(&mut self) -> io::Result<Guess>;

    /// Report the verdict; `expected` is shown on a mismatch
    fn show_verdict(&mut self, is_correct: bool, expected: &str) -> io::Result<()>;
}
