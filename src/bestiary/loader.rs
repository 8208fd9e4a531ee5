//! # Bestiary Loading
//!
//! Reads monster records from the JSON export of a bestiary.
//!
//! The export is an array of objects keyed in PascalCase:
//!
//! ```json
//! [
//!   {
//!     "Name": "Goblin Warrior",
//!     "Level": -1,
//!     "Rarity": "Common",
//!     "Traits": "Goblin;Humanoid",
//!     "Size": "Small",
//!     "Source": "Bestiary pg. 180"
//!   }
//! ]
//! ```

use crate::{traits_from_string, Bestiary, CreatureSize, Monster, SkirmishResult};
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::Path;

/// Rarity marking a named, one-of-a-kind creature.
pub const UNIQUE_RARITY: &str = "Unique";

/// One entry of the JSON export, before conversion into a [`Monster`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterRecord {
    pub name: String,
    pub level: i32,
    pub rarity: String,
    pub traits: String,
    pub size: String,
    pub source: String,
}

impl MonsterRecord {
    /// Checks whether the record describes a unique creature.
    pub fn is_unique(&self) -> bool {
        self.rarity == UNIQUE_RARITY
    }

    /// Converts the record into a monster.
    pub fn to_monster(&self) -> Monster {
        Monster::new(
            self.name.clone(),
            self.level,
            CreatureSize::from_name(&self.size),
            traits_from_string(&self.traits),
            self.source.clone(),
        )
    }
}

/// Options controlling which records become bestiary entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep unique creatures instead of dropping them
    pub include_unique: bool,
}

impl Bestiary {
    /// Loads a bestiary from a JSON file.
    pub fn load(path: impl AsRef<Path>, options: LoadOptions) -> SkirmishResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let records: Vec<MonsterRecord> = serde_json::from_str(&json)?;
        let bestiary = Self::from_records(&records, options);
        info!(
            "Loaded {} monsters from {} records in {} ({} invalid records skipped)",
            bestiary.len(),
            records.len(),
            path.display(),
            count_invalid_records(&records)
        );
        Ok(bestiary)
    }

    /// Parses a bestiary from JSON text.
    ///
    /// Every non-unique creature also yields an `Elite` variant one level up
    /// and, unless it is unleveled, a `Weak` variant one level down. Unique
    /// creatures are kept as-is when `include_unique` is set and dropped
    /// otherwise. Records that do not form a valid monster are skipped.
    pub fn from_json_str(json: &str, options: LoadOptions) -> SkirmishResult<Self> {
        let records: Vec<MonsterRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(&records, options))
    }

    /// Builds a bestiary from already parsed records.
    pub fn from_records(records: &[MonsterRecord], options: LoadOptions) -> Self {
        let mut bestiary = Bestiary::new();
        let mut skipped = 0;

        for record in records {
            let unique = record.is_unique();
            if unique && !options.include_unique {
                continue;
            }

            let monster = record.to_monster();
            if !monster.is_valid() {
                debug!("Skipping invalid bestiary record {:?}", record.name);
                skipped += 1;
                continue;
            }

            if unique {
                bestiary.add_monster(monster);
                continue;
            }

            let weak = (monster.level() != -1).then(|| monster.variant("Weak", -1));
            let elite = monster.variant("Elite", 1);
            bestiary.add_monster(monster);
            if let Some(weak) = weak {
                bestiary.add_monster(weak);
            }
            bestiary.add_monster(elite);
        }

        if skipped > 0 {
            warn!("Skipped {} invalid bestiary records", skipped);
        }
        bestiary
    }
}

/// Counts the records that do not form a valid monster, whatever their rarity.
pub fn count_invalid_records(records: &[MonsterRecord]) -> usize {
    records
        .iter()
        .filter(|record| !record.to_monster().is_valid())
        .count()
}
