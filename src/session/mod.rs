//! Session management: the drill loop and correctness accounting
//!
//! # Components
//! - `controller.rs`: session state loop and outcome reporting
//! - `score.rs`: correct/total accounting with a running percentage

pub mod controller;
pub mod score;

pub use controller::{
    AbortReason, SessionController, SessionError, SessionOutcome, SessionSummary,
};
pub use score::ScoreTracker;
