//! Progression state - one hunter's position on the XP/level/rank lattice.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Rank, StatBlock};

use super::{ProgressionConfig, ProgressionError};

/// A hunter's progression record.
///
/// Owned by exactly one hunter and mutated only through
/// [`ProgressionEngine::apply_award`](super::ProgressionEngine::apply_award),
/// which takes this by reference and returns a new value. Level and rank
/// only ever increase; `current_xp` is always strictly below
/// `xp_to_next_level` when the engine hands a state back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub level: u32,
    pub current_xp: u64,
    pub xp_to_next_level: u64,
    pub rank: Rank,
    pub stats: StatBlock,
}

impl Progression {
    /// The starting state for a freshly awakened hunter.
    pub fn new(config: &ProgressionConfig) -> Self {
        Self {
            level: 1,
            current_xp: 0,
            xp_to_next_level: config.base_xp_to_next_level,
            rank: Rank::default(),
            stats: config.base_stats.clone(),
        }
    }

    /// Check the invariants a state must satisfy before the engine will
    /// touch it. A stored record that fails here is corrupt; refusing to
    /// proceed beats producing an inconsistent successor.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.level < 1 {
            return Err(ProgressionError::InvalidState(format!(
                "level must be at least 1, got {}",
                self.level
            )));
        }
        if self.xp_to_next_level == 0 {
            return Err(ProgressionError::InvalidState(
                "XP threshold must be positive".into(),
            ));
        }
        if self.current_xp >= self.xp_to_next_level {
            return Err(ProgressionError::InvalidState(format!(
                "current XP {} has not been carried over threshold {}",
                self.current_xp, self.xp_to_next_level
            )));
        }
        Ok(())
    }
}
