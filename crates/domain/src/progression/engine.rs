//! The progression engine - the rules that turn XP awards into levels,
//! ranks, and stat gains.
//!
//! Pure computation: the engine takes a state by reference and returns a
//! new one plus an event log. No I/O, no clock, no randomness. Callers
//! are responsible for serializing concurrent awards against the same
//! record; because the engine is deterministic and side-effect free, a
//! retry after a storage conflict is always safe.

use crate::events::{AwardOutcome, LevelUpEvent, RankChange};

use super::{Progression, ProgressionConfig, ProgressionError, XpAward};

/// Applies XP awards to progression states under a fixed config.
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl ProgressionEngine {
    /// Build an engine over a validated config.
    pub fn new(config: ProgressionConfig) -> Result<Self, ProgressionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// The starting state for a new hunter under this engine's config.
    pub fn starting_state(&self) -> Progression {
        Progression::new(&self.config)
    }

    /// Apply one XP award.
    ///
    /// Either the whole cascade applies and a consistent successor state
    /// comes back, or an error comes back and the input is untouched.
    /// Level, rank, and every stat are non-decreasing from `state` to the
    /// returned state; the returned state always satisfies
    /// `current_xp < xp_to_next_level`.
    pub fn apply_award(
        &self,
        state: &Progression,
        award: &XpAward,
    ) -> Result<AwardOutcome, ProgressionError> {
        award.validate()?;
        state.validate()?;

        let mut next = state.clone();
        let mut events = Vec::new();

        next.current_xp = next.current_xp.saturating_add(award.xp as u64);

        // Unspent XP rolls into the next level rather than resetting.
        // next_threshold strictly increases, so any finite award exhausts
        // in finitely many iterations.
        while next.current_xp >= next.xp_to_next_level {
            next.current_xp -= next.xp_to_next_level;
            next.level = next.level.saturating_add(1);
            next.xp_to_next_level = self.config.next_threshold(next.xp_to_next_level);
            next.stats.gain_all(self.config.stats_per_level);
            let rank_change = self.promote(&mut next);
            events.push(LevelUpEvent {
                level: next.level,
                carried_xp: next.current_xp,
                rank_change,
            });
        }

        // Per-award bonuses land independently of level-ups.
        for (stat, amount) in &award.stats {
            next.stats.add(*stat, *amount as u64);
        }

        Ok(AwardOutcome {
            state: next,
            events,
        })
    }

    /// Climb the rank ladder as far as the unlock table allows at the
    /// current level, one consecutive rank per satisfied checkpoint.
    fn promote(&self, progression: &mut Progression) -> Option<RankChange> {
        let from = progression.rank;
        while let Some(candidate) = progression.rank.next() {
            let unlocked = self
                .config
                .rank_thresholds
                .iter()
                .any(|t| t.rank == candidate && progression.level >= t.level);
            if !unlocked {
                break;
            }
            progression.rank = candidate;
        }
        (progression.rank != from).then_some(RankChange {
            from,
            to: progression.rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::RankThreshold;
    use crate::value_objects::{Rank, Stat, StatBlock};

    fn engine() -> ProgressionEngine {
        ProgressionEngine::new(ProgressionConfig::default()).expect("default config is valid")
    }

    fn fresh(engine: &ProgressionEngine) -> Progression {
        engine.starting_state()
    }

    #[test]
    fn award_below_threshold_accumulates_without_level_up() {
        let engine = engine();
        let outcome = engine
            .apply_award(&fresh(&engine), &XpAward::xp_only(60))
            .expect("valid award");
        assert_eq!(outcome.state.level, 1);
        assert_eq!(outcome.state.current_xp, 60);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn double_level_up_carries_xp_and_boosts_stats() {
        let engine = engine();
        let outcome = engine
            .apply_award(&fresh(&engine), &XpAward::xp_only(250))
            .expect("valid award");

        // 250 XP: clear 100 (level 2, 150 left), clear 120 (level 3, 30 left).
        assert_eq!(outcome.state.level, 3);
        assert_eq!(outcome.state.current_xp, 30);
        assert_eq!(outcome.state.xp_to_next_level, 144);
        assert_eq!(outcome.state.rank, Rank::E);
        for stat in Stat::all_standard() {
            assert_eq!(outcome.state.stats.get(stat), 2);
        }

        assert_eq!(outcome.events.len(), 2);
        assert_eq!(outcome.events[0].level, 2);
        assert_eq!(outcome.events[0].carried_xp, 150);
        assert_eq!(outcome.events[0].rank_change, None);
        assert_eq!(outcome.events[1].level, 3);
        assert_eq!(outcome.events[1].carried_xp, 30);
        assert_eq!(outcome.events[1].rank_change, None);
    }

    #[test]
    fn zero_award_is_a_noop() {
        let engine = engine();
        let state = fresh(&engine);
        let outcome = engine
            .apply_award(&state, &XpAward::xp_only(0))
            .expect("zero award is valid");
        assert_eq!(outcome.state, state);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn zero_xp_award_still_applies_stat_bonuses() {
        let engine = engine();
        let award = XpAward::xp_only(0).with_stat(Stat::Agi, 2);
        let outcome = engine
            .apply_award(&fresh(&engine), &award)
            .expect("valid award");
        assert_eq!(outcome.state.level, 1);
        assert_eq!(outcome.state.stats.get(Stat::Agi), 2);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn negative_xp_award_rejected() {
        let engine = engine();
        let state = fresh(&engine);
        let result = engine.apply_award(&state, &XpAward::xp_only(-5));
        assert!(matches!(result, Err(ProgressionError::InvalidAward(_))));
        // Input state is untouched.
        assert_eq!(state, fresh(&engine));
    }

    #[test]
    fn negative_stat_bonus_rejected_before_xp_lands() {
        let engine = engine();
        let award = XpAward::xp_only(500).with_stat(Stat::Vit, -3);
        let result = engine.apply_award(&fresh(&engine), &award);
        assert!(matches!(result, Err(ProgressionError::InvalidAward(_))));
    }

    #[test]
    fn invalid_input_state_rejected() {
        let engine = engine();
        let mut state = fresh(&engine);
        state.current_xp = state.xp_to_next_level + 10;
        let result = engine.apply_award(&state, &XpAward::xp_only(1));
        assert!(matches!(result, Err(ProgressionError::InvalidState(_))));
    }

    #[test]
    fn rank_unlocks_exactly_at_level_ten() {
        let engine = engine();
        let mut state = fresh(&engine);
        state.level = 9;
        state.xp_to_next_level = 100;

        let outcome = engine
            .apply_award(&state, &XpAward::xp_only(100))
            .expect("valid award");
        assert_eq!(outcome.state.level, 10);
        assert_eq!(outcome.state.rank, Rank::D);
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(
            outcome.events[0].rank_change,
            Some(RankChange {
                from: Rank::E,
                to: Rank::D,
            })
        );
    }

    #[test]
    fn one_level_up_can_climb_several_overdue_ranks_in_order() {
        // A hunter manually placed at a high level still walks the ladder
        // rank by rank; both overdue checkpoints resolve in one iteration.
        let engine = engine();
        let mut state = fresh(&engine);
        state.level = 25;
        state.xp_to_next_level = 100;

        let outcome = engine
            .apply_award(&state, &XpAward::xp_only(100))
            .expect("valid award");
        assert_eq!(outcome.state.level, 26);
        assert_eq!(outcome.state.rank, Rank::C);
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(
            outcome.events[0].rank_change,
            Some(RankChange {
                from: Rank::E,
                to: Rank::C,
            })
        );
    }

    #[test]
    fn rank_is_not_unlocked_below_its_checkpoint() {
        let engine = engine();
        let mut state = fresh(&engine);
        state.level = 8;
        state.xp_to_next_level = 100;

        let outcome = engine
            .apply_award(&state, &XpAward::xp_only(100))
            .expect("valid award");
        assert_eq!(outcome.state.level, 9);
        assert_eq!(outcome.state.rank, Rank::E);
        assert_eq!(outcome.events[0].rank_change, None);
    }

    #[test]
    fn split_awards_match_one_combined_award() {
        let engine = engine();
        let combined = engine
            .apply_award(&fresh(&engine), &XpAward::xp_only(250))
            .expect("valid award");

        let first = engine
            .apply_award(&fresh(&engine), &XpAward::xp_only(70))
            .expect("valid award");
        let second = engine
            .apply_award(&first.state, &XpAward::xp_only(180))
            .expect("valid award");

        assert_eq!(second.state, combined.state);
        assert_eq!(
            first.events.len() + second.events.len(),
            combined.events.len()
        );
    }

    #[test]
    fn large_award_terminates_and_matches_minimal_awards() {
        let engine = engine();
        let threshold = engine.config().base_xp_to_next_level;
        let total = threshold * 1000;

        let single = engine
            .apply_award(&fresh(&engine), &XpAward::xp_only(total as i64))
            .expect("valid award");

        let mut stepped = fresh(&engine);
        let mut stepped_events = 0usize;
        for _ in 0..1000 {
            let outcome = engine
                .apply_award(&stepped, &XpAward::xp_only(threshold as i64))
                .expect("valid award");
            stepped_events += outcome.events.len();
            stepped = outcome.state;
        }

        assert_eq!(stepped, single.state);
        assert_eq!(stepped_events, single.events.len());
        assert!(single.state.current_xp < single.state.xp_to_next_level);
        // 100_000 XP against the 20%-growth curve from 100 clears exactly
        // 29 thresholds (cumulative 97_129), so the cascade stops at 30.
        assert_eq!(single.state.level, 30);
        assert_eq!(single.state.rank, Rank::B);
    }

    #[test]
    fn progression_is_monotonic_across_awards() {
        let engine = engine();
        let before = fresh(&engine);
        let after = engine
            .apply_award(&before, &XpAward::xp_only(12_345))
            .expect("valid award")
            .state;

        assert!(after.level >= before.level);
        assert!(after.rank >= before.rank);
        assert!(after.stats.dominates(&before.stats));
        assert!(after.current_xp < after.xp_to_next_level);
    }

    #[test]
    fn events_record_each_level_in_order() {
        let engine = engine();
        let outcome = engine
            .apply_award(&fresh(&engine), &XpAward::xp_only(1000))
            .expect("valid award");
        let levels: Vec<u32> = outcome.events.iter().map(|e| e.level).collect();
        let expected: Vec<u32> = (2..=outcome.state.level).collect();
        assert_eq!(levels, expected);
    }

    #[test]
    fn tiny_threshold_still_makes_progress() {
        // Floor growth alone would pin a threshold of 1 forever; the
        // minimum-increment guard keeps the cascade finite.
        let engine = engine();
        let state = Progression {
            level: 1,
            current_xp: 0,
            xp_to_next_level: 1,
            rank: Rank::E,
            stats: StatBlock::base(),
        };
        let outcome = engine
            .apply_award(&state, &XpAward::xp_only(10))
            .expect("valid award");
        assert!(outcome.state.current_xp < outcome.state.xp_to_next_level);
        assert!(outcome.state.level > 1);
        assert_eq!(outcome.events.len(), (outcome.state.level - 1) as usize);
    }

    #[test]
    fn per_level_stat_gain_follows_config() {
        let config = ProgressionConfig {
            stats_per_level: 3,
            ..ProgressionConfig::default()
        };
        let engine = ProgressionEngine::new(config).expect("valid config");
        let outcome = engine
            .apply_award(&engine.starting_state(), &XpAward::xp_only(100))
            .expect("valid award");
        assert_eq!(outcome.state.level, 2);
        for stat in Stat::all_standard() {
            assert_eq!(outcome.state.stats.get(stat), 3);
        }
    }

    #[test]
    fn quest_bonus_stacks_on_top_of_level_gains() {
        let engine = engine();
        let award = XpAward::xp_only(100).with_stat(Stat::Str, 5);
        let outcome = engine
            .apply_award(&fresh(&engine), &award)
            .expect("valid award");
        // One level-up (+1 to everything) plus the +5 strength bonus.
        assert_eq!(outcome.state.stats.get(Stat::Str), 6);
        assert_eq!(outcome.state.stats.get(Stat::Agi), 1);
    }

    #[test]
    fn engine_rejects_invalid_config() {
        let config = ProgressionConfig {
            rank_thresholds: vec![RankThreshold::new(10, Rank::S)],
            ..ProgressionConfig::default()
        };
        assert!(matches!(
            ProgressionEngine::new(config),
            Err(ProgressionError::InvalidConfig(_))
        ));
    }
}
