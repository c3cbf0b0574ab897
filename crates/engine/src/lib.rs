//! Arise Engine - progression use cases, storage ports, and composition
//!
//! The application layer around the pure progression engine in
//! `arise-domain`: storage port traits, the award/quest-completion use
//! cases with per-hunter write serialization, in-memory adapters, and
//! environment-driven configuration. HTTP routing, authentication, and
//! quest verification live with the embedding host.

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
pub use infrastructure::ports::{HunterRepo, QuestRepo, RepoError};
pub use infrastructure::settings::ProgressionSettings;
pub use infrastructure::telemetry::init_tracing;
pub use stores::{InMemoryHunterRepo, InMemoryQuestRepo};
pub use use_cases::{
    AwardXp, AwardXpResult, CompleteQuest, ProgressionOpsError, QuestCompletionResult,
};
