//! Domain events
//!
//! Return types from progression mutations, communicating what happened
//! when state was advanced so callers can notify and log appropriately.

mod progression_events;

pub use progression_events::{AwardOutcome, LevelUpEvent, RankChange};
