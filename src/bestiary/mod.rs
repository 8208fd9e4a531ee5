//! # Bestiary Module
//!
//! Monster collections and the substitution of concrete monsters into
//! abstract encounters.
//!
//! Filling tries to keep an encounter thematically consistent: once the first
//! monster is picked, later picks prefer creatures sharing one of its traits.

pub mod loader;
pub mod monster;

pub use loader::*;
pub use monster::*;

use crate::{Encounter, FilledEncounter};
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

/// Traits that describe rarity rather than creature type; never used for theming.
pub const RARITY_TRAITS: [&str; 3] = ["Uncommon", "Rare", "Unique"];

/// An ordered collection of monsters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bestiary {
    monsters: Vec<Monster>,
}

impl Bestiary {
    /// Creates an empty bestiary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a monster to the end of the collection.
    pub fn add_monster(&mut self, monster: Monster) {
        self.monsters.push(monster);
    }

    /// Removes every entry equal to `monster`.
    pub fn remove_monster(&mut self, monster: &Monster) {
        self.monsters.retain(|m| m != monster);
    }

    /// Gets all monsters in insertion order.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Number of monsters in the collection.
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Checks whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Gets the monsters of exactly `level`.
    pub fn filtered_by_level(&self, level: i32) -> Bestiary {
        self.monsters
            .iter()
            .filter(|m| m.level() == level)
            .cloned()
            .collect()
    }

    /// Gets the monsters carrying `trait_name`.
    pub fn filtered_by_trait(&self, trait_name: &str) -> Bestiary {
        self.monsters
            .iter()
            .filter(|m| m.has_trait(trait_name))
            .cloned()
            .collect()
    }

    /// Picks a monster uniformly at random. `None` when empty.
    pub fn random_monster<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Monster> {
        self.monsters.choose(rng)
    }

    /// Substitutes concrete monsters for each level of `encounter`.
    ///
    /// Levels are filled lowest first. After the first pick, candidates are
    /// narrowed to the first non-rarity trait of the previous pick that still
    /// matches something, if that narrows the field. When no monster exists
    /// at a level, lower levels are tried down to -1. Levels that cannot be
    /// filled at all are left out.
    pub fn fill_encounter<R: Rng + ?Sized>(
        &self,
        encounter: &Encounter,
        rng: &mut R,
    ) -> FilledEncounter {
        let mut filled = FilledEncounter::new(encounter.adventurer_level());
        let mut previous_traits: Option<Vec<String>> = None;

        for (&level, &count) in encounter.monster_level_counts() {
            let mut candidates = self.filtered_by_level(level);

            if let Some(traits) = &previous_traits {
                let themed = traits
                    .iter()
                    .filter(|t| !RARITY_TRAITS.contains(&t.as_str()))
                    .map(|t| candidates.filtered_by_trait(t))
                    .find(|list| !list.is_empty());

                if let Some(themed) = themed {
                    if themed.len() < candidates.len() {
                        candidates = themed;
                    }
                }
            }

            let mut wanted_level = level;
            while candidates.is_empty() && wanted_level > MIN_MONSTER_LEVEL {
                wanted_level -= 1;
                candidates = self.filtered_by_level(wanted_level);
            }

            match candidates.random_monster(rng) {
                Some(monster) => {
                    let monster = monster.clone();
                    previous_traits = Some(monster.traits().to_vec());
                    filled.add_monsters(monster, count);
                }
                None => warn!("No monster at or below level {} to fill encounter", level),
            }
        }

        filled
    }

    /// Fills every encounter in order.
    pub fn fill_encounters<R: Rng + ?Sized>(
        &self,
        encounters: &[Encounter],
        rng: &mut R,
    ) -> Vec<FilledEncounter> {
        encounters
            .iter()
            .map(|encounter| self.fill_encounter(encounter, rng))
            .collect()
    }
}

impl FromIterator<Monster> for Bestiary {
    fn from_iter<I: IntoIterator<Item = Monster>>(iter: I) -> Self {
        Self {
            monsters: iter.into_iter().collect(),
        }
    }
}
