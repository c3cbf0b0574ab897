//! Complete quest use case.
//!
//! Resolves a quest's reward and hands it to the award pipeline.
//! Eligibility checks (verification method, daily-completion dedup) are
//! the web layer's responsibility and happen before this runs.

use std::sync::Arc;

use arise_domain::{HunterId, QuestId};

use crate::infrastructure::ports::QuestRepo;

use super::award_xp::AwardXp;
use super::error::ProgressionOpsError;
use super::types::QuestCompletionResult;

/// Complete quest use case.
///
/// Orchestrates: quest lookup, reward resolution, XP award.
pub struct CompleteQuest {
    quests: Arc<dyn QuestRepo>,
    award_xp: Arc<AwardXp>,
}

impl CompleteQuest {
    pub fn new(quests: Arc<dyn QuestRepo>, award_xp: Arc<AwardXp>) -> Self {
        Self { quests, award_xp }
    }

    /// Execute the complete quest use case.
    ///
    /// # Returns
    /// * `Ok(QuestCompletionResult)` - reward applied and persisted
    /// * `Err(ProgressionOpsError)` - hunter state unchanged
    pub async fn execute(
        &self,
        hunter_id: HunterId,
        quest_id: QuestId,
    ) -> Result<QuestCompletionResult, ProgressionOpsError> {
        let quest = self
            .quests
            .get(quest_id)
            .await?
            .ok_or(ProgressionOpsError::QuestNotFound(quest_id))?;

        let result = self
            .award_xp
            .execute(hunter_id, quest.reward.to_award())
            .await?;

        tracing::info!(
            hunter_id = %hunter_id,
            quest_id = %quest_id,
            quest_title = %quest.title,
            xp = quest.reward.xp,
            "quest completed"
        );

        Ok(QuestCompletionResult {
            message: "Quest Completed".to_string(),
            quest_title: quest.title,
            rewards: quest.reward,
            hunter: result.hunter,
            events: result.events,
        })
    }
}
