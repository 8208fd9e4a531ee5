//! # Generation Module
//!
//! Encounter search and the configuration that drives a generation run.
//!
//! A run takes a party, searches every difficulty tier for encounters that
//! fit its XP budget, then picks as many encounters per tier as the
//! configuration asks for.

pub mod encounters;

pub use encounters::*;

use crate::config::{
    DEFAULT_BATTLES_PER_DIFFICULTY, DEFAULT_MAX_TOTAL_MONSTERS, DEFAULT_MAX_UNIQUE_MONSTERS,
    DEFAULT_PARTY_LEVEL, DEFAULT_PARTY_SIZE,
};
use crate::{Difficulty, OutputFormat, Party, SkirmishError, SkirmishResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of encounters to pick for each difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleCounts {
    pub trivial: u32,
    pub low: u32,
    pub moderate: u32,
    pub severe: u32,
    pub extreme: u32,
}

impl BattleCounts {
    /// Creates counts with the same number of battles for every tier.
    pub fn uniform(count: u32) -> Self {
        Self {
            trivial: count,
            low: count,
            moderate: count,
            severe: count,
            extreme: count,
        }
    }

    /// Gets the count for `difficulty`. Zero for `Invalid`.
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Trivial => self.trivial,
            Difficulty::Low => self.low,
            Difficulty::Moderate => self.moderate,
            Difficulty::Severe => self.severe,
            Difficulty::Extreme => self.extreme,
            Difficulty::Invalid => 0,
        }
    }

    /// Sets the count for `difficulty`. Ignored for `Invalid`.
    pub fn set(&mut self, difficulty: Difficulty, count: u32) {
        match difficulty {
            Difficulty::Trivial => self.trivial = count,
            Difficulty::Low => self.low = count,
            Difficulty::Moderate => self.moderate = count,
            Difficulty::Severe => self.severe = count,
            Difficulty::Extreme => self.extreme = count,
            Difficulty::Invalid => {}
        }
    }

    /// Total battles across all tiers.
    pub fn total(&self) -> u32 {
        Difficulty::ALL.iter().map(|&d| self.get(d)).sum()
    }
}

impl Default for BattleCounts {
    fn default() -> Self {
        Self::uniform(DEFAULT_BATTLES_PER_DIFFICULTY)
    }
}

/// Configuration for a generation run.
///
/// Missing fields fall back to their defaults when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Level of every adventurer in the party
    pub party_level: i32,
    /// Number of adventurers
    pub party_size: u32,
    /// Encounters to pick per difficulty
    pub battles: BattleCounts,
    /// Maximum distinct monster levels in one encounter
    pub max_unique_monsters: u32,
    /// Maximum monsters in one encounter
    pub max_total_monsters: u32,
    /// Bestiary JSON used to name monsters; abstract levels are reported without one
    pub bestiary_path: Option<PathBuf>,
    /// Whether unique creatures may appear in filled encounters
    pub include_unique: bool,
    /// Random seed for reproducible picks
    pub seed: Option<u64>,
    /// Report rendering
    pub format: OutputFormat,
    /// File to write the report to; stdout when unset
    pub output_path: Option<PathBuf>,
}

impl GenerationConfig {
    /// Creates a default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::GenerationConfig;
    ///
    /// let config = GenerationConfig::new();
    /// assert!(config.validate().is_ok());
    /// assert!(config.max_unique_monsters <= config.max_total_monsters);
    /// ```
    pub fn new() -> Self {
        Self {
            party_level: DEFAULT_PARTY_LEVEL,
            party_size: DEFAULT_PARTY_SIZE,
            battles: BattleCounts::default(),
            max_unique_monsters: DEFAULT_MAX_UNIQUE_MONSTERS,
            max_total_monsters: DEFAULT_MAX_TOTAL_MONSTERS,
            bestiary_path: None,
            include_unique: false,
            seed: None,
            format: OutputFormat::Text,
            output_path: None,
        }
    }

    /// Creates a small, seeded configuration for testing.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            party_level: 5,
            party_size: 4,
            battles: BattleCounts::uniform(2),
            max_unique_monsters: 2,
            max_total_monsters: 4,
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SkirmishResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Checks that the configuration describes a runnable generation.
    pub fn validate(&self) -> SkirmishResult<()> {
        if self.max_total_monsters == 0 {
            return Err(SkirmishError::InvalidConfig(
                "max_total_monsters must be at least 1".to_string(),
            ));
        }
        if self.max_unique_monsters == 0 {
            return Err(SkirmishError::InvalidConfig(
                "max_unique_monsters must be at least 1".to_string(),
            ));
        }
        self.party().map(|_| ())
    }

    /// Builds the party this configuration describes.
    pub fn party(&self) -> SkirmishResult<Party> {
        Party::new(self.party_level, self.party_size)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Utility functions for generation runs.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates the run's random number generator, seeded when the config has a seed.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
