//! Correctness accounting for a session

/// Accumulates correct/total counts across completed trials
#[derive(Clone, Debug, Default)]
pub struct ScoreTracker {
    correct: u32,
    total: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        ScoreTracker {
            correct: 0,
            total: 0,
        }
    }

    /// Record one completed trial
    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Running percentage of correct answers; `None` until a trial completes
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(100.0 * f64::from(self.correct) / f64::from(self.total))
        }
    }
}
