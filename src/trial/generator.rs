//! Trial generation from an injected random source
//!
//! Draws letters uniformly with replacement, optionally splices in one
//! random number at a uniformly chosen slot, and derives the spoken and
//! compact forms. Deterministic for a fixed random-source state.

use rand::Rng;

use super::config::{ConfigError, TrialConfig};

/// One generated acronym with its spoken and compact textual forms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    /// Ordered tokens: alphabet characters plus, if enabled, one decimal string
    pub symbols: Vec<String>,
    /// Tokens joined with single spaces, handed to speech synthesis
    pub spoken_form: String,
    /// Tokens concatenated and upper-cased, used for exact-match scoring
    pub compact_form: String,
}

/// Generate one trial from `config`, consuming entropy from `rng`
pub fn generate(config: &TrialConfig, rng: &mut impl Rng) -> Result<Trial, ConfigError> {
    config.validate()?;

    // Sampling with replacement: one independent uniform draw per letter,
    // so repeats happen even when the length exceeds the alphabet size.
    let mut symbols: Vec<String> = Vec::with_capacity(config.length + 1);
    for _ in 0..config.length {
        let idx = rng.gen_range(0..config.alphabet.len());
        symbols.push(config.alphabet[idx].to_string());
    }

    if config.add_number {
        let number = rng.gen_range(config.number_low..=config.number_high);
        // length + 1 slots: before the first letter through after the last.
        let slot = rng.gen_range(0..=config.length);
        symbols.insert(slot, number.to_string());
    }

    let spoken_form = symbols.join(" ");
    let compact_form = symbols.concat().to_uppercase();

    Ok(Trial {
        symbols,
        spoken_form,
        compact_form,
    })
}
