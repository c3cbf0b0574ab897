//! Hunter entity - the player-facing progression record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::HunterId;
use crate::progression::{Progression, ProgressionConfig};

/// A hunter: one player's identity plus their progression record.
///
/// The progression field is only ever replaced wholesale with the output
/// of the progression engine; nothing else writes to it. Account-level
/// data (credentials, emails) lives with the authentication layer, not
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunter {
    pub id: HunterId,
    pub name: String,
    pub progression: Progression,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hunter {
    /// Create a hunter at the starting state for the given config.
    pub fn new(name: impl Into<String>, config: &ProgressionConfig) -> Self {
        let now = Utc::now();
        Self {
            id: HunterId::new(),
            name: name.into(),
            progression: Progression::new(config),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set an explicit id (e.g., when rehydrating from storage).
    pub fn with_id(mut self, id: HunterId) -> Self {
        self.id = id;
        self
    }

    /// Set an explicit progression record (e.g., when rehydrating).
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    /// Swap in an engine-produced successor state.
    pub fn set_progression(&mut self, progression: Progression) {
        self.progression = progression;
        self.updated_at = Utc::now();
    }

    /// Validate that the hunter has required fields
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Hunter name cannot be empty"));
        }
        Ok(())
    }
}
