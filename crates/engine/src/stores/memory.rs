//! In-memory repository adapters.
//!
//! Back the storage ports with a concurrent map for tests and for
//! embedding the engine without a database. Saves replace the whole
//! record, which is atomic per key under `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;

use arise_domain::{Hunter, HunterId, Quest, QuestId};

use crate::infrastructure::ports::{HunterRepo, QuestRepo, RepoError};

/// Hunter storage over a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryHunterRepo {
    hunters: DashMap<HunterId, Hunter>,
}

impl InMemoryHunterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hunters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hunters.is_empty()
    }
}

#[async_trait]
impl HunterRepo for InMemoryHunterRepo {
    async fn get(&self, id: HunterId) -> Result<Option<Hunter>, RepoError> {
        Ok(self.hunters.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, hunter: &Hunter) -> Result<(), RepoError> {
        self.hunters.insert(hunter.id, hunter.clone());
        Ok(())
    }

    async fn delete(&self, id: HunterId) -> Result<(), RepoError> {
        self.hunters.remove(&id);
        Ok(())
    }
}

/// Quest storage over a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryQuestRepo {
    quests: DashMap<QuestId, Quest>,
}

impl InMemoryQuestRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestRepo for InMemoryQuestRepo {
    async fn get(&self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        Ok(self.quests.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, quest: &Quest) -> Result<(), RepoError> {
        self.quests.insert(quest.id, quest.clone());
        Ok(())
    }

    async fn delete(&self, id: QuestId) -> Result<(), RepoError> {
        self.quests.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Quest>, RepoError> {
        Ok(self.quests.iter().map(|entry| entry.value().clone()).collect())
    }
}
