//! Award XP use case.
//!
//! The read-modify-write seam around the pure progression engine:
//! load the hunter, run the engine, persist the successor state.
//!
//! Awards for the same hunter are serialized through a per-hunter async
//! mutex. Applying two awards against the same stale snapshot would
//! silently lose one of them; the lock makes the second award observe
//! the first one's persisted result.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use arise_domain::{HunterId, ProgressionEngine, XpAward};

use crate::infrastructure::ports::HunterRepo;

use super::error::ProgressionOpsError;
use super::types::AwardXpResult;

/// Award XP use case.
///
/// Orchestrates: hunter lookup, engine application, persistence,
/// level-up logging.
pub struct AwardXp {
    hunters: Arc<dyn HunterRepo>,
    engine: Arc<ProgressionEngine>,
    in_flight: DashMap<HunterId, Arc<Mutex<()>>>,
}

impl AwardXp {
    pub fn new(hunters: Arc<dyn HunterRepo>, engine: Arc<ProgressionEngine>) -> Self {
        Self {
            hunters,
            engine,
            in_flight: DashMap::new(),
        }
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    /// Execute the award XP use case.
    ///
    /// # Returns
    /// * `Ok(AwardXpResult)` - the persisted hunter plus level-up events
    /// * `Err(ProgressionOpsError)` - nothing was persisted
    pub async fn execute(
        &self,
        hunter_id: HunterId,
        award: XpAward,
    ) -> Result<AwardXpResult, ProgressionOpsError> {
        // Clone the lock handle out of the map entry before awaiting;
        // holding the map guard across the await would block other keys.
        let lock = self
            .in_flight
            .entry(hunter_id)
            .or_default()
            .value()
            .clone();
        let _serialized = lock.lock().await;

        let mut hunter = self
            .hunters
            .get(hunter_id)
            .await?
            .ok_or(ProgressionOpsError::HunterNotFound(hunter_id))?;

        let outcome = self.engine.apply_award(&hunter.progression, &award)?;
        hunter.set_progression(outcome.state);
        self.hunters.save(&hunter).await?;

        if outcome.events.is_empty() {
            tracing::debug!(
                hunter_id = %hunter_id,
                xp = award.xp,
                current_xp = hunter.progression.current_xp,
                "XP awarded"
            );
        } else {
            tracing::info!(
                hunter_id = %hunter_id,
                xp = award.xp,
                levels_gained = outcome.events.len(),
                new_level = hunter.progression.level,
                rank = %hunter.progression.rank,
                "hunter leveled up"
            );
        }

        Ok(AwardXpResult {
            hunter,
            events: outcome.events,
        })
    }
}
