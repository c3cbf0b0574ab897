//! Progression operation errors.

use arise_domain::{HunterId, ProgressionError, QuestId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while awarding XP or completing quests.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionOpsError {
    #[error("Hunter not found: {0}")]
    HunterNotFound(HunterId),
    #[error("Quest not found: {0}")]
    QuestNotFound(QuestId),
    #[error(transparent)]
    Progression(#[from] ProgressionError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
