//! # Skirmish
//!
//! An encounter builder for tabletop role-playing game sessions.
//!
//! ## Architecture Overview
//!
//! Skirmish turns a party description into ready-to-run combat encounters.
//! The work is split into a handful of small layers:
//!
//! - **Rules**: the fixed XP reward table, difficulty tiers and party budgets
//! - **Encounters**: abstract level-to-count groupings and their concrete,
//!   monster-filled counterparts
//! - **Generation**: the backtracking search that finds encounters inside a
//!   difficulty's XP band
//! - **Bestiary**: monster records loaded from JSON and used to fill encounters
//! - **Report**: text, CSV and JSON renderings of the selected encounters
//!
//! ## Example
//!
//! ```
//! use skirmish::{Difficulty, EncounterGenerator, Party};
//!
//! let party = Party::new(5, 4).unwrap();
//! let generator = EncounterGenerator::new(party, 2, 4);
//!
//! for encounter in generator.all_encounters(Difficulty::Moderate) {
//!     assert!((72..=88).contains(&encounter.encounter_xp()));
//! }
//! ```

pub mod bestiary;
pub mod encounter;
pub mod generation;
pub mod report;
pub mod rules;

// Core module re-exports
pub use bestiary::*;
pub use encounter::*;
pub use generation::*;
pub use report::*;
pub use rules::*;

/// Core error type for the Skirmish encounter builder.
#[derive(thiserror::Error, Debug)]
pub enum SkirmishError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Party could not be constructed
    #[error("Invalid party: {0}")]
    InvalidParty(String),

    /// Configuration is inconsistent or out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bestiary data could not be used
    #[error("Bestiary error: {0}")]
    Bestiary(String),
}

/// Result type used throughout the Skirmish codebase.
pub type SkirmishResult<T> = Result<T, SkirmishError>;

/// Version information for the encounter builder.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encounter builder configuration constants.
pub mod config {
    /// Lowest adventurer level a party may have
    pub const MIN_PARTY_LEVEL: i32 = 1;

    /// Highest adventurer level a party may have
    pub const MAX_PARTY_LEVEL: i32 = 20;

    /// Default adventurer level
    pub const DEFAULT_PARTY_LEVEL: i32 = 1;

    /// Largest party a budget is computed for
    pub const MAX_PARTY_SIZE: u32 = 1000;

    /// Default number of adventurers
    pub const DEFAULT_PARTY_SIZE: u32 = 4;

    /// Default cap on distinct monster levels per encounter
    pub const DEFAULT_MAX_UNIQUE_MONSTERS: u32 = 2;

    /// Default cap on monsters per encounter
    pub const DEFAULT_MAX_TOTAL_MONSTERS: u32 = 6;

    /// Default number of battles generated per difficulty
    pub const DEFAULT_BATTLES_PER_DIFFICULTY: u32 = 3;
}
