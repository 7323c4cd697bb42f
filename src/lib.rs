//! Scoring for publication-date guessing games.
//!
//! [`score`] compares a guessed date with the actual one and returns an
//! integer score, the day difference and a category. The [`request`] module
//! wraps it in the JSON envelope a game front end exchanges, and [`config`]
//! resolves a [`ScoringPolicy`] from layered TOML files.

pub mod calibration;
pub mod config;
pub mod date;
pub mod error;
pub mod report;
pub mod request;
pub mod scoring;
pub mod types;

pub use error::{DateField, DateParseError, DateScoreError};
pub use scoring::score;
pub use types::scoring::{Category, ScoreResult, ScoringPolicy};
