//! Application use cases.

pub mod progression;

pub use progression::{
    AwardXp, AwardXpResult, CompleteQuest, ProgressionOpsError, QuestCompletionResult,
};
