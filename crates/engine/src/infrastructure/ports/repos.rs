//! Repository port traits for progression storage.
//!
//! The storage adapter behind these traits must persist an engine result
//! atomically relative to concurrent awards for the same hunter; the use
//! case layer additionally serializes awards per hunter so a stale
//! snapshot can never overwrite a fresher one.

use async_trait::async_trait;

use arise_domain::{Hunter, HunterId, Quest, QuestId};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HunterRepo: Send + Sync {
    async fn get(&self, id: HunterId) -> Result<Option<Hunter>, RepoError>;
    async fn save(&self, hunter: &Hunter) -> Result<(), RepoError>;
    async fn delete(&self, id: HunterId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestRepo: Send + Sync {
    async fn get(&self, id: QuestId) -> Result<Option<Quest>, RepoError>;
    async fn save(&self, quest: &Quest) -> Result<(), RepoError>;
    async fn delete(&self, id: QuestId) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Quest>, RepoError>;
}
