//! Quest entity - task definitions whose completion yields an XP award
//!
//! Quest content management (seeding, verification of completion, AI
//! flavor text) is the web layer's business. The entity exists here so
//! the reward contract between quests and the progression engine is
//! typed instead of being a loose JSON blob.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::QuestId;
use crate::progression::XpAward;
use crate::value_objects::{Rank, Stat};

/// Cadence/category of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestType {
    Daily,
    Weekly,
    /// Punishment quest issued after a failed daily
    Penalty,
    Hidden,
}

/// What a completed quest pays out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestReward {
    pub xp: i64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stats: BTreeMap<Stat, i64>,
}

impl QuestReward {
    pub fn xp(xp: i64) -> Self {
        Self {
            xp,
            stats: BTreeMap::new(),
        }
    }

    pub fn with_stat(mut self, stat: Stat, amount: i64) -> Self {
        self.stats.insert(stat, amount);
        self
    }

    /// Convert to the award shape the progression engine consumes.
    pub fn to_award(&self) -> XpAward {
        XpAward::new(self.xp, self.stats.clone())
    }
}

/// A task definition: title, flavor, difficulty tier, and reward.
///
/// Difficulty reuses the hunter rank ladder; an S-rank quest is graded on
/// the same scale an S-rank hunter is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub quest_type: QuestType,
    pub difficulty: Rank,
    pub reward: QuestReward,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quest {
    pub fn new(title: impl Into<String>, quest_type: QuestType, reward: QuestReward) -> Self {
        let now = Utc::now();
        Self {
            id: QuestId::new(),
            title: title.into(),
            description: String::new(),
            quest_type,
            difficulty: Rank::E,
            reward,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: QuestId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Rank) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Validate that the quest has required fields
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("Quest title cannot be empty"));
        }
        if self.reward.xp < 0 {
            return Err(DomainError::validation("Quest XP reward cannot be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_converts_to_award() {
        let reward = QuestReward::xp(100).with_stat(Stat::Agi, 2);
        let award = reward.to_award();
        assert_eq!(award.xp, 100);
        assert_eq!(award.stats.get(&Stat::Agi), Some(&2));
    }

    #[test]
    fn test_quest_builder() {
        let quest = Quest::new("Pushup Mastery I", QuestType::Daily, QuestReward::xp(50))
            .with_description("Complete 50 pushups.")
            .with_difficulty(Rank::E);
        assert_eq!(quest.title, "Pushup Mastery I");
        assert_eq!(quest.difficulty, Rank::E);
        assert!(quest.validate().is_ok());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let quest = Quest::new("", QuestType::Daily, QuestReward::xp(50));
        assert!(quest.validate().is_err());
    }

    #[test]
    fn test_negative_reward_fails_validation() {
        let quest = Quest::new("Bad", QuestType::Penalty, QuestReward::xp(-10));
        assert!(quest.validate().is_err());
    }

    #[test]
    fn test_quest_type_serde_matches_stored_form() {
        let json = serde_json::to_string(&QuestType::Penalty).expect("serialize");
        assert_eq!(json, "\"PENALTY\"");
    }
}
