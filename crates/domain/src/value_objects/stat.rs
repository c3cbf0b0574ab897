//! Stat value object - the hunter attribute set.
//!
//! Provides type safety for stat references instead of magic strings
//! like "str" or "agi". The serialized form keeps the short keys the
//! persisted player records use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Hunter attributes raised by leveling and quest rewards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Strength - physical power
    Str,
    /// Agility - speed and reflexes
    Agi,
    /// Intelligence - reasoning and focus
    Int,
    /// Vitality - endurance and health
    Vit,
    /// Perception - awareness and senses
    Per,
}

impl Stat {
    /// Returns the short lowercase key (e.g., "str", "agi").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Agi => "agi",
            Self::Int => "int",
            Self::Vit => "vit",
            Self::Per => "per",
        }
    }

    /// Returns the full name of the stat (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Agi => "Agility",
            Self::Int => "Intelligence",
            Self::Vit => "Vitality",
            Self::Per => "Perception",
        }
    }

    /// Returns the full hunter attribute set.
    pub fn all_standard() -> [Stat; 5] {
        [Self::Str, Self::Agi, Self::Int, Self::Vit, Self::Per]
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Str),
            "agi" | "agility" => Ok(Self::Agi),
            "int" | "intelligence" => Ok(Self::Int),
            "vit" | "vitality" => Ok(Self::Vit),
            "per" | "perception" => Ok(Self::Per),
            other => Err(DomainError::parse(format!("unknown stat: {other}"))),
        }
    }
}
