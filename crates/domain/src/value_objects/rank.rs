//! Rank value object - the hunter ranking ladder.
//!
//! Ranks are a coarser tier than levels, unlocked at level checkpoints.
//! The variant order IS the ladder order: `Ord` on this enum is what the
//! progression engine relies on for the "rank never decreases" invariant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Hunter rank, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Rank {
    /// Lowest rank, assigned at awakening
    #[default]
    E,
    D,
    C,
    B,
    A,
    /// Highest rank
    S,
}

impl Rank {
    /// Returns the single-letter string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E => "E",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
        }
    }

    /// The rank immediately above this one, or `None` at the top of the ladder.
    pub fn next(&self) -> Option<Rank> {
        match self {
            Self::E => Some(Self::D),
            Self::D => Some(Self::C),
            Self::C => Some(Self::B),
            Self::B => Some(Self::A),
            Self::A => Some(Self::S),
            Self::S => None,
        }
    }

    /// All ranks, lowest to highest.
    pub fn all() -> [Rank; 6] {
        [Self::E, Self::D, Self::C, Self::B, Self::A, Self::S]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "E" => Ok(Self::E),
            "D" => Ok(Self::D),
            "C" => Ok(Self::C),
            "B" => Ok(Self::B),
            "A" => Ok(Self::A),
            "S" => Ok(Self::S),
            other => Err(DomainError::parse(format!("unknown rank: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering_matches_ladder() {
        assert!(Rank::E < Rank::D);
        assert!(Rank::D < Rank::C);
        assert!(Rank::C < Rank::B);
        assert!(Rank::B < Rank::A);
        assert!(Rank::A < Rank::S);
    }

    #[test]
    fn test_rank_next_walks_ladder_without_skips() {
        let mut rank = Rank::E;
        let mut climbed = vec![rank];
        while let Some(next) = rank.next() {
            climbed.push(next);
            rank = next;
        }
        assert_eq!(climbed, Rank::all());
        assert_eq!(Rank::S.next(), None);
    }

    #[test]
    fn test_rank_default_is_lowest() {
        assert_eq!(Rank::default(), Rank::E);
    }

    #[test]
    fn test_rank_from_str() {
        assert_eq!(Rank::from_str("S"), Ok(Rank::S));
        assert_eq!(Rank::from_str("e"), Ok(Rank::E));
        assert!(Rank::from_str("F").is_err());
    }

    #[test]
    fn test_rank_serde_roundtrip() {
        let json = serde_json::to_string(&Rank::A).expect("serialize");
        assert_eq!(json, "\"A\"");
        let parsed: Rank = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, Rank::A);
    }
}
