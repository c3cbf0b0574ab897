//! Progression tuning knobs.
//!
//! Everything the engine's control flow parameterizes over lives here:
//! the XP curve, the per-level stat gain, the starting stat set, and the
//! rank-unlock table. Rebalancing the game means editing this config,
//! not the engine loop.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Rank, StatBlock};

use super::ProgressionError;

/// One rank-unlock checkpoint: reaching `level` unlocks `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankThreshold {
    pub level: u32,
    pub rank: Rank,
}

impl RankThreshold {
    pub fn new(level: u32, rank: Rank) -> Self {
        Self { level, rank }
    }
}

/// Tuning values for the progression engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionConfig {
    /// XP required to clear level 1.
    pub base_xp_to_next_level: u64,
    /// Threshold growth per level, in percent (20 = +20% per level).
    pub growth_rate_percent: u64,
    /// Flat gain applied to every tracked stat on each level-up.
    pub stats_per_level: u64,
    /// Stat set and starting values for a fresh hunter.
    pub base_stats: StatBlock,
    /// Rank-unlock checkpoints, ascending by level AND by rank, one
    /// consecutive rank step per entry.
    pub rank_thresholds: Vec<RankThreshold>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            base_xp_to_next_level: 100,
            growth_rate_percent: 20,
            stats_per_level: 1,
            base_stats: StatBlock::base(),
            rank_thresholds: vec![
                RankThreshold::new(10, Rank::D),
                RankThreshold::new(20, Rank::C),
                RankThreshold::new(30, Rank::B),
                RankThreshold::new(40, Rank::A),
                RankThreshold::new(50, Rank::S),
            ],
        }
    }
}

impl ProgressionConfig {
    /// Check the config invariants the engine loop depends on.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.base_xp_to_next_level == 0 {
            return Err(ProgressionError::InvalidConfig(
                "base XP threshold must be positive".into(),
            ));
        }

        let mut expected = Rank::default().next();
        let mut previous_level = 0u32;
        for threshold in &self.rank_thresholds {
            if threshold.level <= previous_level {
                return Err(ProgressionError::InvalidConfig(format!(
                    "rank threshold levels must be strictly increasing (level {} follows {})",
                    threshold.level, previous_level
                )));
            }
            // Each entry must be exactly one rank above the previous one,
            // otherwise a promotion would skip a rank.
            match expected {
                Some(rank) if rank == threshold.rank => {
                    expected = rank.next();
                }
                _ => {
                    return Err(ProgressionError::InvalidConfig(format!(
                        "rank thresholds must climb the ladder one rank at a time (unexpected {})",
                        threshold.rank
                    )));
                }
            }
            previous_level = threshold.level;
        }
        Ok(())
    }

    /// The threshold for the level after one with threshold `current`.
    ///
    /// Floor growth by `growth_rate_percent`, with a minimum increment of
    /// one so the threshold strictly increases even when floor growth
    /// stalls on tiny values. Strict growth is what bounds the level-up
    /// loop for arbitrarily large awards.
    pub fn next_threshold(&self, current: u64) -> u64 {
        let grown =
            current.saturating_add(current.saturating_mul(self.growth_rate_percent) / 100);
        grown.max(current.saturating_add(1))
    }
}
