//! Spelldrill - acronym spelling practice by ear
//!
//! Generates random acronyms, speaks them aloud, and scores written
//! guesses across an interactive session. Ctrl+C ends the session; a
//! summary is printed when at least one trial completed.

mod cli;
mod session;
mod speech;
mod trial;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::Terminal;
use session::{SessionController, SessionOutcome};
use speech::GoogleSpeaker;
use trial::TrialConfig;

const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Conventional exit code for a session interrupted before any trial
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "spelldrill")]
#[command(about = "Game to practice acronym spelling by listening and writing")]
struct Args {
    /// Alphabet to use for the random sampling
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Acronym length
    #[arg(long, default_value = "5")]
    length: usize,

    /// Add a number sampled from [start-number, end-number] to some part of the acronym
    #[arg(long)]
    add_number: bool,

    /// Lowest number to sample, if --add-number is used
    #[arg(long, default_value = "0")]
    start_number: i64,

    /// Highest number to sample, if --add-number is used
    #[arg(long, default_value = "99")]
    end_number: i64,

    /// Language passed to speech synthesis (you may want to change the alphabet too)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Make the speaker talk slowly
    #[arg(long)]
    slow: bool,

    /// Wait for audio to finish before prompting for the guess
    #[arg(long)]
    blocking_audio: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
    let config = TrialConfig {
        alphabet: args.alphabet.chars().collect(),
        length: args.length,
        add_number: args.add_number,
        number_low: args.start_number,
        number_high: args.end_number,
    };

    let mut speaker = GoogleSpeaker::new(&args.lang, args.slow, args.blocking_audio)?;
    let mut terminal = Terminal::new()?;
    let rng = rand::thread_rng();

    let outcome =
        SessionController::new(config, &mut speaker, &mut terminal, rng).run()?;

    match outcome {
        SessionOutcome::Completed(summary) => {
            terminal.show_summary(&summary)?;
            Ok(ExitCode::SUCCESS)
        }
        SessionOutcome::Aborted(reason) => {
            // Cancelled before anything completed: no summary, abnormal exit.
            debug!("session aborted: {:?}", reason);
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
