//! # Party Budget
//!
//! XP budgets a party of adventurers can handle at each difficulty tier.

use crate::config::{MAX_PARTY_LEVEL, MAX_PARTY_SIZE, MIN_PARTY_LEVEL};
use crate::{Difficulty, SkirmishError, SkirmishResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A group of same-level adventurers and their per-tier XP budgets.
///
/// Budgets are computed once on construction. Deserialization reads only
/// `level` and `size` and goes through [`Party::new`].
///
/// # Examples
///
/// ```
/// use skirmish::{Difficulty, Party};
///
/// let party = Party::new(5, 4).unwrap();
/// assert_eq!(party.desired_xp(Difficulty::Moderate), 80);
/// assert_eq!(party.lower_bound(Difficulty::Moderate), 72);
/// assert_eq!(party.upper_bound(Difficulty::Moderate), 88);
///
/// assert!(Party::new(21, 4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PartyRecord")]
pub struct Party {
    level: i32,
    size: u32,
    desired_xp: BTreeMap<Difficulty, u32>,
}

/// Serialized form of a party; budgets are always recomputed.
#[derive(Deserialize)]
struct PartyRecord {
    level: i32,
    size: u32,
}

impl TryFrom<PartyRecord> for Party {
    type Error = SkirmishError;

    fn try_from(record: PartyRecord) -> SkirmishResult<Self> {
        Party::new(record.level, record.size)
    }
}

impl Party {
    /// Creates a party of `size` adventurers at `level`.
    ///
    /// Fails when the level is outside 1..=20 or the size is outside
    /// `1..=MAX_PARTY_SIZE`.
    pub fn new(level: i32, size: u32) -> SkirmishResult<Self> {
        if !(MIN_PARTY_LEVEL..=MAX_PARTY_LEVEL).contains(&level) {
            return Err(SkirmishError::InvalidParty(format!(
                "adventurer level {} is outside {}..={}",
                level, MIN_PARTY_LEVEL, MAX_PARTY_LEVEL
            )));
        }
        if size == 0 {
            return Err(SkirmishError::InvalidParty(
                "a party needs at least one adventurer".to_string(),
            ));
        }
        if size > MAX_PARTY_SIZE {
            return Err(SkirmishError::InvalidParty(format!(
                "party of {} adventurers exceeds the limit of {}",
                size, MAX_PARTY_SIZE
            )));
        }

        let desired_xp = Difficulty::ALL
            .iter()
            .map(|&difficulty| (difficulty, difficulty.xp_budget_per_adventurer() * size))
            .collect();

        Ok(Self {
            level,
            size,
            desired_xp,
        })
    }

    /// Gets the adventurers' level.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Gets the number of adventurers.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Gets the XP an encounter at `difficulty` should be worth. Zero for `Invalid`.
    pub fn desired_xp(&self, difficulty: Difficulty) -> u32 {
        self.desired_xp.get(&difficulty).copied().unwrap_or(0)
    }

    /// Lowest acceptable encounter XP: 90% of the desired XP, rounded down.
    pub fn lower_bound(&self, difficulty: Difficulty) -> u32 {
        self.desired_xp(difficulty) * 9 / 10
    }

    /// Highest acceptable encounter XP: 110% of the desired XP, rounded down.
    pub fn upper_bound(&self, difficulty: Difficulty) -> u32 {
        self.desired_xp(difficulty) * 11 / 10
    }
}
