//! Application state and composition.

use std::sync::Arc;

use arise_domain::{ProgressionConfig, ProgressionEngine, ProgressionError};

use crate::infrastructure::ports::{HunterRepo, QuestRepo};
use crate::stores::{InMemoryHunterRepo, InMemoryQuestRepo};
use crate::use_cases::{AwardXp, CompleteQuest};

/// Main application state.
///
/// Holds all repository ports and use cases. The embedding host (HTTP
/// layer, CLI, tests) constructs one of these and hands the use cases to
/// its handlers.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub hunter: Arc<dyn HunterRepo>,
    pub quest: Arc<dyn QuestRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub award_xp: Arc<AwardXp>,
    pub complete_quest: Arc<CompleteQuest>,
}

impl App {
    /// Compose the application over the given storage adapters.
    pub fn new(
        hunter: Arc<dyn HunterRepo>,
        quest: Arc<dyn QuestRepo>,
        config: ProgressionConfig,
    ) -> Result<Self, ProgressionError> {
        let engine = Arc::new(ProgressionEngine::new(config)?);
        let award_xp = Arc::new(AwardXp::new(hunter.clone(), engine));
        let complete_quest = Arc::new(CompleteQuest::new(quest.clone(), award_xp.clone()));

        Ok(Self {
            repositories: Repositories { hunter, quest },
            use_cases: UseCases {
                award_xp,
                complete_quest,
            },
        })
    }

    /// Compose the application over in-memory storage.
    pub fn in_memory(config: ProgressionConfig) -> Result<Self, ProgressionError> {
        Self::new(
            Arc::new(InMemoryHunterRepo::new()),
            Arc::new(InMemoryQuestRepo::new()),
            config,
        )
    }
}
