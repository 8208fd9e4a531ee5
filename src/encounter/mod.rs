//! # Encounter Module
//!
//! Abstract encounters (monster level to count) and their filled counterparts
//! that name concrete monsters.

pub mod filled;

pub use filled::*;

use crate::xp_for_level_offset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A combat encounter described only by monster levels and how many of each.
///
/// Counts are always positive; removing the last monster of a level drops
/// the level entirely. Every readout is computed from the current counts.
///
/// # Examples
///
/// ```
/// use skirmish::Encounter;
///
/// let mut encounter = Encounter::new(5);
/// encounter.add_monsters(4, 2);
/// encounter.add_monsters(6, 1);
///
/// assert_eq!(encounter.num_total_monsters(), 3);
/// assert_eq!(encounter.num_unique_monsters(), 2);
/// assert_eq!(encounter.encounter_xp(), 32 * 2 + 48);
/// assert_eq!(encounter.to_string(), "2 level 4 : 1 level 6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EncounterRecord")]
pub struct Encounter {
    adventurer_level: i32,
    monster_level_counts: BTreeMap<i32, u32>,
}

/// Serialized form of an encounter; zero counts are dropped on the way in.
#[derive(Deserialize)]
struct EncounterRecord {
    adventurer_level: i32,
    #[serde(default)]
    monster_level_counts: BTreeMap<i32, u32>,
}

impl From<EncounterRecord> for Encounter {
    fn from(record: EncounterRecord) -> Self {
        let mut encounter = Encounter::new(record.adventurer_level);
        for (level, count) in record.monster_level_counts {
            encounter.add_monsters(level, count);
        }
        encounter
    }
}

impl Encounter {
    /// Creates an empty encounter for a party of `adventurer_level`.
    pub fn new(adventurer_level: i32) -> Self {
        Self {
            adventurer_level,
            monster_level_counts: BTreeMap::new(),
        }
    }

    /// Gets the level of the party this encounter was built for.
    pub fn adventurer_level(&self) -> i32 {
        self.adventurer_level
    }

    /// Adds `count` monsters of `level`.
    pub fn add_monsters(&mut self, level: i32, count: u32) {
        if count == 0 {
            return;
        }
        *self.monster_level_counts.entry(level).or_insert(0) += count;
    }

    /// Removes up to `count` monsters of `level`.
    pub fn remove_monsters(&mut self, level: i32, count: u32) {
        if let Some(current) = self.monster_level_counts.get_mut(&level) {
            if *current <= count {
                self.monster_level_counts.remove(&level);
            } else {
                *current -= count;
            }
        }
    }

    /// Gets the monster levels in this encounter with their counts, lowest level first.
    pub fn monster_level_counts(&self) -> &BTreeMap<i32, u32> {
        &self.monster_level_counts
    }

    /// Number of distinct monster levels.
    pub fn num_unique_monsters(&self) -> u32 {
        self.monster_level_counts.len() as u32
    }

    /// Number of monsters across all levels.
    pub fn num_total_monsters(&self) -> u32 {
        self.monster_level_counts.values().sum()
    }

    /// XP the party earns for defeating every monster.
    pub fn encounter_xp(&self) -> u32 {
        self.monster_level_counts
            .iter()
            .map(|(&level, &count)| xp_for_level_offset(self.adventurer_level, level) * count)
            .sum()
    }

    /// Checks whether the encounter has no monsters.
    pub fn is_empty(&self) -> bool {
        self.monster_level_counts.is_empty()
    }

    /// Renders `count,level` pairs separated by commas.
    pub fn to_csv_string(&self) -> String {
        self.monster_level_counts
            .iter()
            .map(|(level, count)| format!("{},{}", count, level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .monster_level_counts
            .iter()
            .map(|(level, count)| format!("{} level {}", count, level))
            .collect();
        f.write_str(&groups.join(" : "))
    }
}
