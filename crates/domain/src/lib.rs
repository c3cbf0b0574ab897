//! Arise Domain - Hunter progression rules, quests, and invariants
//!
//! Pure domain crate: no async, no I/O, no persistence. The progression
//! engine here is the only code allowed to advance a hunter's level,
//! rank, or stats; everything else in the system either stores its
//! output or reports it.

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod progression;
pub mod value_objects;

pub use entities::{Hunter, Quest, QuestReward, QuestType};
pub use error::DomainError;
pub use events::{AwardOutcome, LevelUpEvent, RankChange};
pub use ids::{HunterId, QuestId};
pub use progression::{
    Progression, ProgressionConfig, ProgressionEngine, ProgressionError, RankThreshold, XpAward,
};
pub use value_objects::{Rank, Stat, StatBlock};
