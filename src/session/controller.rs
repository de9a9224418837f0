//! Session loop: play a trial, read a guess, score it, repeat
//!
//! States: AwaitStart → Playing → AwaitingGuess → Evaluating → (loop), with
//! cancellation observable at every blocking read. The handoff to the
//! speaker is non-blocking: synthesis errors propagate, but the audible
//! rendering does not gate the guess prompt.

use rand::Rng;
use thiserror::Error;

use super::score::ScoreTracker;
use crate::cli::{Console, Guess, Signal};
use crate::speech::{Speaker, SpeechError};
use crate::trial::{self, ConfigError, TrialConfig};

/// Why a session ended without a summary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// Interrupted before any trial completed
    CancelledBeforeFirstTrial,
}

/// Final counts reported on clean exit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSummary {
    pub correct: u32,
    pub total: u32,
    /// Unrounded percentage of correct answers
    pub percentage: f64,
}

/// How the session ended
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// At least one trial completed; a summary is due
    Completed(SessionSummary),
    /// Nothing completed; the interrupt stays abnormal
    Aborted(AbortReason),
}

/// Errors that abort the loop outright. No retries anywhere.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Drives the drill until the user interrupts
pub struct SessionController<'a, S, C, R> {
    config: TrialConfig,
    speaker: &'a mut S,
    console: &'a mut C,
    rng: R,
    scores: ScoreTracker,
}

impl<'a, S: Speaker, C: Console, R: Rng> SessionController<'a, S, C, R> {
    pub fn new(config: TrialConfig, speaker: &'a mut S, console: &'a mut C, rng: R) -> Self {
        SessionController {
            config,
            speaker,
            console,
            rng,
            scores: ScoreTracker::new(),
        }
    }

    /// Run trials until an interrupt or an unrecoverable error
    pub fn run(mut self) -> Result<SessionOutcome, SessionError> {
        self.console.intro(&self.config)?;

        if self.console.wait_ack()? == Signal::Interrupt {
            return Ok(self.finish());
        }

        loop {
            let trial = trial::generate(&self.config, &mut self.rng)?;
            self.speaker.speak(&trial.spoken_form)?;

            let guess = match self.console.read_guess()? {
                Guess::Line(line) => line,
                Guess::Interrupt => return Ok(self.finish()),
            };

            let is_correct = guess.to_uppercase() == trial.compact_form;
            self.console.show_verdict(is_correct, &trial.compact_form)?;
            self.scores.record(is_correct);

            if self.console.wait_ack()? == Signal::Interrupt {
                return Ok(self.finish());
            }
        }
    }

    fn finish(&self) -> SessionOutcome {
        match self.scores.percentage() {
            Some(percentage) => SessionOutcome::Completed(SessionSummary {
                correct: self.scores.correct(),
                total: self.scores.total(),
                percentage,
            }),
            None => SessionOutcome::Aborted(AbortReason::CancelledBeforeFirstTrial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::VecDeque;
    use std::io;

    /// Console double fed from scripted queues; empty queues interrupt.
    #[derive(Default)]
    struct ScriptedConsole {
        acks: VecDeque<Signal>,
        guesses: VecDeque<Guess>,
        verdicts: Vec<(bool, String)>,
    }

    impl ScriptedConsole {
        fn with(acks: Vec<Signal>, guesses: Vec<&str>) -> Self {
            ScriptedConsole {
                acks: acks.into(),
                guesses: guesses
                    .into_iter()
                    .map(|g| Guess::Line(g.to_string()))
                    .collect(),
                verdicts: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn intro(&mut self, _config: &TrialConfig) -> io::Result<()> {
            Ok(())
        }

        fn wait_ack(&mut self) -> io::Result<Signal> {
            Ok(self.acks.pop_front().unwrap_or(Signal::Interrupt))
        }

        fn read_guess(&mut self) -> io::Result<Guess> {
            Ok(self.guesses.pop_front().unwrap_or(Guess::Interrupt))
        }

        fn show_verdict(&mut self, is_correct: bool, expected: &str) -> io::Result<()> {
            self.verdicts.push((is_correct, expected.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: Vec<String>,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
            self.spoken.push(text.to_string());
            Ok(())
        }
    }

    struct FailingSpeaker;

    impl Speaker for FailingSpeaker {
        fn speak(&mut self, _text: &str) -> Result<(), SpeechError> {
            Err(SpeechError::Device("no output device".to_string()))
        }
    }

    fn singleton_config(length: usize) -> TrialConfig {
        // A one-symbol alphabet makes every trial "A..A" regardless of the
        // random source, so guesses can be scripted deterministically.
        TrialConfig {
            alphabet: vec!['A'],
            length,
            add_number: false,
            number_low: 0,
            number_high: 99,
        }
    }

    #[test]
    fn test_interrupt_before_first_trial_aborts() {
        let mut speaker = RecordingSpeaker::default();
        let mut console = ScriptedConsole::default();
        let outcome = SessionController::new(
            singleton_config(3),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run()
        .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Aborted(AbortReason::CancelledBeforeFirstTrial)
        );
        assert!(speaker.spoken.is_empty());
    }

    #[test]
    fn test_one_of_two_correct_scores_fifty_percent() {
        let mut speaker = RecordingSpeaker::default();
        let mut console = ScriptedConsole::with(
            vec![Signal::Proceed, Signal::Proceed, Signal::Proceed],
            vec!["AAA", "AAB"],
        );
        let outcome = SessionController::new(
            singleton_config(3),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run()
        .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Completed(SessionSummary {
                correct: 1,
                total: 2,
                percentage: 50.0,
            })
        );
        assert_eq!(console.verdicts.len(), 2);
        assert_eq!(console.verdicts[0], (true, "AAA".to_string()));
        assert_eq!(console.verdicts[1], (false, "AAA".to_string()));
    }

    #[test]
    fn test_guess_comparison_is_case_insensitive() {
        let mut speaker = RecordingSpeaker::default();
        let mut console =
            ScriptedConsole::with(vec![Signal::Proceed, Signal::Proceed], vec!["aaa"]);
        let outcome = SessionController::new(
            singleton_config(3),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run()
        .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Completed(SessionSummary {
                correct: 1,
                total: 1,
                percentage: 100.0,
            })
        );
    }

    #[test]
    fn test_spoken_form_is_handed_to_speaker() {
        let mut speaker = RecordingSpeaker::default();
        let mut console =
            ScriptedConsole::with(vec![Signal::Proceed, Signal::Proceed], vec!["AAA"]);
        SessionController::new(
            singleton_config(3),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run()
        .unwrap();

        assert_eq!(speaker.spoken, vec!["A A A".to_string()]);
    }

    #[test]
    fn test_interrupt_mid_guess_keeps_earlier_scores() {
        // One completed trial, then interrupt at the guess prompt.
        let mut speaker = RecordingSpeaker::default();
        let mut console =
            ScriptedConsole::with(vec![Signal::Proceed, Signal::Proceed], vec!["AAA"]);
        let outcome = SessionController::new(
            singleton_config(3),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run()
        .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Completed(SessionSummary {
                correct: 1,
                total: 1,
                percentage: 100.0,
            })
        );
        // Playback for the second trial had already been dispatched.
        assert_eq!(speaker.spoken.len(), 2);
    }

    #[test]
    fn test_empty_trial_compares_without_panicking() {
        let mut speaker = RecordingSpeaker::default();
        let mut console =
            ScriptedConsole::with(vec![Signal::Proceed, Signal::Proceed], vec![""]);
        let outcome = SessionController::new(
            singleton_config(0),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run()
        .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Completed(SessionSummary {
                correct: 1,
                total: 1,
                percentage: 100.0,
            })
        );
    }

    #[test]
    fn test_speech_error_propagates() {
        let mut speaker = FailingSpeaker;
        let mut console = ScriptedConsole::with(vec![Signal::Proceed], vec!["AAA"]);
        let result = SessionController::new(
            singleton_config(3),
            &mut speaker,
            &mut console,
            StepRng::new(0, 0),
        )
        .run();

        assert!(matches!(result, Err(SessionError::Speech(_))));
    }

    #[test]
    fn test_invalid_config_aborts_before_any_trial() {
        let config = TrialConfig {
            alphabet: vec![],
            ..TrialConfig::default()
        };
        let mut speaker = RecordingSpeaker::default();
        let mut console = ScriptedConsole::with(vec![Signal::Proceed], vec!["AAA"]);
        let result =
            SessionController::new(config, &mut speaker, &mut console, StepRng::new(0, 0)).run();

        assert!(matches!(
            result,
            Err(SessionError::Config(ConfigError::EmptyAlphabet))
        ));
        assert!(speaker.spoken.is_empty());
    }
}
