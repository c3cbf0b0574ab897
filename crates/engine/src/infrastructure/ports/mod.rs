//! Port traits and their error types.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{HunterRepo, QuestRepo};

#[cfg(test)]
pub use repos::{MockHunterRepo, MockQuestRepo};
