//! Per-session trial configuration
//!
//! Immutable for the lifetime of a session: the symbol pool, the acronym
//! length, and the optional number range. Validation runs at generation
//! entry so a malformed configuration aborts before any trial completes.

use thiserror::Error;

/// Configuration errors reported at trial-generation entry
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alphabet must not be empty")]
    EmptyAlphabet,

    #[error("number range is inverted: start {low} > end {high}")]
    InvalidNumberRange { low: i64, high: i64 },
}

/// Immutable per-session trial configuration
#[derive(Clone, Debug)]
pub struct TrialConfig {
    /// Symbol pool for the letter draws
    pub alphabet: Vec<char>,
    /// Number of letters per trial
    pub length: usize,
    /// Insert one random number per trial
    pub add_number: bool,
    /// Lowest number to sample (inclusive)
    pub number_low: i64,
    /// Highest number to sample (inclusive)
    pub number_high: i64,
}

impl TrialConfig {
    /// Check the constraints the argument parser cannot reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        if self.add_number && self.number_low > self.number_high {
            return Err(ConfigError::InvalidNumberRange {
                low: self.number_low,
                high: self.number_high,
            });
        }

        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        TrialConfig {
            alphabet: ('A'..='Z').collect(),
            length: 5,
            add_number: false,
            number_low: 0,
            number_high: 99,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(TrialConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let config = TrialConfig {
            alphabet: vec![],
            ..TrialConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_inverted_number_range_rejected() {
        let config = TrialConfig {
            add_number: true,
            number_low: 10,
            number_high: 2,
            ..TrialConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidNumberRange { low: 10, high: 2 })
        );
    }

    #[test]
    fn test_inverted_range_ignored_without_add_number() {
        // The range only matters when a number is actually drawn.
        let config = TrialConfig {
            add_number: false,
            number_low: 10,
            number_high: 2,
            ..TrialConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
