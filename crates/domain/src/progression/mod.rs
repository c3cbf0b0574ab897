//! The Progression Engine
//!
//! Pure rules for how a hunter's XP, level, rank, and stats evolve when a
//! quest reward lands. The engine is a value-in/value-out computation;
//! persistence, concurrency control, and notification belong to the
//! calling layer (see the arise-engine crate).

mod award;
mod config;
mod engine;
mod state;

pub use award::XpAward;
pub use config::{ProgressionConfig, RankThreshold};
pub use engine::ProgressionEngine;
pub use state::Progression;

use thiserror::Error;

/// Failures the progression engine can report.
///
/// No partial application: every error is raised before any state is
/// produced, so callers may assume their snapshot is still authoritative.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// The award is malformed (negative XP or negative stat bonus).
    #[error("Invalid award: {0}")]
    InvalidAward(String),

    /// The stored progression record violates an engine invariant.
    #[error("Invalid progression state: {0}")]
    InvalidState(String),

    /// The engine configuration is unusable (bad curve or rank table).
    #[error("Invalid progression config: {0}")]
    InvalidConfig(String),
}
