//! Progression domain events
//!
//! These types communicate what happened when an XP award was applied,
//! allowing callers to react appropriately (notifications, response
//! payloads, audit logs). All ephemeral - the engine never persists them.

use serde::{Deserialize, Serialize};

use crate::progression::Progression;
use crate::value_objects::Rank;

/// A promotion on the rank ladder.
///
/// `to` may be more than one step above `from` when a single level-up
/// newly satisfies several checkpoints, but the ladder is always climbed
/// through every intermediate rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChange {
    pub from: Rank,
    pub to: Rank,
}

/// Emitted once per level gained while applying a single XP award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpEvent {
    /// The level just reached.
    pub level: u32,
    /// XP remaining after the threshold was carried over.
    pub carried_xp: u64,
    /// The promotion triggered at this level, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_change: Option<RankChange>,
}

/// Result of applying one XP award: the successor state plus the ordered
/// log of every level-up that occurred. Empty event list means the award
/// landed without clearing a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardOutcome {
    pub state: Progression,
    pub events: Vec<LevelUpEvent>,
}
