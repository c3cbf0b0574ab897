//! Storage adapters.

mod memory;

pub use memory::{InMemoryHunterRepo, InMemoryQuestRepo};
