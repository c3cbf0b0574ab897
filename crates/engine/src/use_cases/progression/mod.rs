//! Progression use cases: XP awards and quest completion.

mod award_xp;
mod complete_quest;
mod error;
mod types;

pub use award_xp::AwardXp;
pub use complete_quest::CompleteQuest;
pub use error::ProgressionOpsError;
pub use types::{AwardXpResult, QuestCompletionResult};
