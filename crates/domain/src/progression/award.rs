//! XP awards - the reward payload from one completed quest.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::Stat;

use super::ProgressionError;

/// The reward from one completed quest: an XP amount plus optional flat
/// stat bonuses.
///
/// XP is signed on the wire because upstream callers deal in raw JSON
/// numbers; the engine rejects anything negative before touching state.
/// Ephemeral - never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpAward {
    pub xp: i64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stats: BTreeMap<Stat, i64>,
}

impl XpAward {
    pub fn new(xp: i64, stats: BTreeMap<Stat, i64>) -> Self {
        Self { xp, stats }
    }

    /// An award carrying XP only.
    pub fn xp_only(xp: i64) -> Self {
        Self {
            xp,
            stats: BTreeMap::new(),
        }
    }

    /// Add a flat stat bonus to this award.
    pub fn with_stat(mut self, stat: Stat, amount: i64) -> Self {
        self.stats.insert(stat, amount);
        self
    }

    /// Reject negative XP and malformed bonus maps up front.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.xp < 0 {
            return Err(ProgressionError::InvalidAward(format!(
                "XP amount must be non-negative, got {}",
                self.xp
            )));
        }
        for (stat, amount) in &self.stats {
            if *amount < 0 {
                return Err(ProgressionError::InvalidAward(format!(
                    "stat bonus for {stat} must be non-negative, got {amount}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_only_award_validates() {
        assert!(XpAward::xp_only(0).validate().is_ok());
        assert!(XpAward::xp_only(250).validate().is_ok());
    }

    #[test]
    fn test_negative_xp_rejected() {
        let err = XpAward::xp_only(-5).validate();
        assert!(matches!(err, Err(ProgressionError::InvalidAward(_))));
    }

    #[test]
    fn test_negative_stat_bonus_rejected() {
        let award = XpAward::xp_only(50).with_stat(Stat::Str, -1);
        assert!(matches!(
            award.validate(),
            Err(ProgressionError::InvalidAward(_))
        ));
    }

    #[test]
    fn test_serde_omits_empty_bonus_map() {
        let json = serde_json::to_string(&XpAward::xp_only(75)).expect("serialize");
        assert_eq!(json, r#"{"xp":75}"#);

        let with_bonus = XpAward::xp_only(50).with_stat(Stat::Str, 1);
        let json = serde_json::to_string(&with_bonus).expect("serialize");
        assert_eq!(json, r#"{"xp":50,"stats":{"str":1}}"#);
    }
}
