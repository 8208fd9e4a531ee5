//! # Rules Module
//!
//! Fixed rules data that every encounter calculation reads from.
//!
//! This module contains the difficulty tiers, the monster XP reward table and
//! the party XP budget. Everything here is immutable once constructed and can
//! be shared freely between searches.

pub mod party;
pub mod xp;

pub use party::*;
pub use xp::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tiers an encounter can be built for.
///
/// Tiers are ordered by increasing severity. `Invalid` is the value produced
/// when a tier name cannot be parsed; it has no XP budget.
///
/// # Examples
///
/// ```
/// use skirmish::Difficulty;
///
/// assert_eq!(Difficulty::from_name("Severe"), Difficulty::Severe);
/// assert_eq!(Difficulty::from_name("Deadly"), Difficulty::Invalid);
/// assert!(Difficulty::Low < Difficulty::Extreme);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Barely a speed bump for the party
    Trivial,
    /// A warm-up fight
    Low,
    /// A fair fight that uses some resources
    Moderate,
    /// A dangerous fight
    Severe,
    /// A fight that may well kill someone
    Extreme,
    /// Unparseable tier name
    Invalid,
}

impl Difficulty {
    /// All valid tiers, in order of increasing severity.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Trivial,
        Difficulty::Low,
        Difficulty::Moderate,
        Difficulty::Severe,
        Difficulty::Extreme,
    ];

    /// Parses a tier name. Unknown names map to [`Difficulty::Invalid`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Trivial" => Difficulty::Trivial,
            "Low" => Difficulty::Low,
            "Moderate" => Difficulty::Moderate,
            "Severe" => Difficulty::Severe,
            "Extreme" => Difficulty::Extreme,
            _ => Difficulty::Invalid,
        }
    }

    /// Gets the display name of this tier.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Trivial => "Trivial",
            Difficulty::Low => "Low",
            Difficulty::Moderate => "Moderate",
            Difficulty::Severe => "Severe",
            Difficulty::Extreme => "Extreme",
            Difficulty::Invalid => "invalid difficulty",
        }
    }

    /// XP each adventurer contributes to the tier's budget.
    pub fn xp_budget_per_adventurer(self) -> u32 {
        match self {
            Difficulty::Trivial => 10,
            Difficulty::Low => 15,
            Difficulty::Moderate => 20,
            Difficulty::Severe => 30,
            Difficulty::Extreme => 40,
            Difficulty::Invalid => 0,
        }
    }

    /// Checks whether this is one of the five real tiers.
    pub fn is_valid(self) -> bool {
        self != Difficulty::Invalid
    }
}

impl From<&str> for Difficulty {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
