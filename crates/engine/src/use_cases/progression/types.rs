//! Progression operation result types.

use serde::Serialize;

use arise_domain::{Hunter, LevelUpEvent, QuestReward};

/// Result of awarding XP to a hunter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardXpResult {
    /// The hunter with the successor progression state already persisted.
    pub hunter: Hunter,
    /// One entry per level gained, in order.
    pub events: Vec<LevelUpEvent>,
}

impl AwardXpResult {
    pub fn leveled_up(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Result of completing a quest, shaped for the response formatter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCompletionResult {
    pub message: String,
    pub quest_title: String,
    pub rewards: QuestReward,
    pub hunter: Hunter,
    pub events: Vec<LevelUpEvent>,
}
