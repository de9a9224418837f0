//! Trial generation: random acronyms with spoken and compact forms
//!
//! # Components
//! - `config.rs`: per-session configuration and validation
//! - `generator.rs`: uniform draws from an injected random source

pub mod config;
pub mod generator;

pub use config::{ConfigError, TrialConfig};
pub use generator::{generate, Trial};
