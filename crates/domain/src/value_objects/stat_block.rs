//! StatBlock value object - the set of tracked attribute values.
//!
//! The tracked set is fixed at creation (normally the full standard set);
//! values only ever increase. The progression engine is the sole writer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stat::Stat;

/// A hunter's attribute values, keyed by [`Stat`].
///
/// Values are monotonically non-decreasing: the only mutations are
/// additive. Serializes as a plain object with short stat keys
/// (`{"str": 2, "agi": 2, ...}`), matching the persisted record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBlock(BTreeMap<Stat, u64>);

impl StatBlock {
    /// A block tracking the full standard attribute set, all at zero.
    pub fn base() -> Self {
        Self(Stat::all_standard().iter().map(|s| (*s, 0)).collect())
    }

    /// A block with the given starting values; stats not listed are untracked.
    pub fn with_values(values: impl IntoIterator<Item = (Stat, u64)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Current value of a stat (0 if untracked).
    pub fn get(&self, stat: Stat) -> u64 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    /// Whether this block tracks the given stat.
    pub fn tracks(&self, stat: Stat) -> bool {
        self.0.contains_key(&stat)
    }

    /// Add `amount` to every tracked stat. Used for the per-level gain.
    pub fn gain_all(&mut self, amount: u64) {
        for value in self.0.values_mut() {
            *value = value.saturating_add(amount);
        }
    }

    /// Add `amount` to a single stat. Untracked stats join the block at
    /// `amount`, so reward bonuses are never silently dropped.
    pub fn add(&mut self, stat: Stat, amount: u64) {
        let value = self.0.entry(stat).or_insert(0);
        *value = value.saturating_add(amount);
    }

    /// Iterate tracked stats and their values, in stat order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u64)> + '_ {
        self.0.iter().map(|(s, v)| (*s, *v))
    }

    /// True when every tracked stat in `earlier` is matched or exceeded here.
    pub fn dominates(&self, earlier: &StatBlock) -> bool {
        earlier.iter().all(|(stat, value)| self.get(stat) >= value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tracks_all_standard_stats_at_zero() {
        let block = StatBlock::base();
        for stat in Stat::all_standard() {
            assert!(block.tracks(stat));
            assert_eq!(block.get(stat), 0);
        }
    }

    #[test]
    fn test_gain_all_raises_every_tracked_stat() {
        let mut block = StatBlock::base();
        block.gain_all(2);
        for stat in Stat::all_standard() {
            assert_eq!(block.get(stat), 2);
        }
    }

    #[test]
    fn test_add_single_stat() {
        let mut block = StatBlock::base();
        block.add(Stat::Str, 3);
        assert_eq!(block.get(Stat::Str), 3);
        assert_eq!(block.get(Stat::Agi), 0);
    }

    #[test]
    fn test_add_untracked_stat_joins_block() {
        let mut block = StatBlock::with_values([(Stat::Str, 1)]);
        assert!(!block.tracks(Stat::Per));
        block.add(Stat::Per, 2);
        assert_eq!(block.get(Stat::Per), 2);
    }

    #[test]
    fn test_dominates() {
        let mut earlier = StatBlock::base();
        earlier.add(Stat::Int, 1);
        let mut later = earlier.clone();
        later.gain_all(1);
        assert!(later.dominates(&earlier));
        assert!(!earlier.dominates(&later));
    }

    #[test]
    fn test_serde_shape_uses_short_keys() {
        let mut block = StatBlock::with_values([(Stat::Str, 2), (Stat::Agi, 1)]);
        block.add(Stat::Str, 1);
        let json = serde_json::to_string(&block).expect("serialize");
        assert_eq!(json, r#"{"str":3,"agi":1}"#);
        let parsed: StatBlock = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, block);
    }
}
