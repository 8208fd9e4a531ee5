//! # Filled Encounters
//!
//! Encounters whose abstract levels have been replaced by named monsters.

use crate::{traits_to_string, xp_for_level_offset, Monster};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Serialized form of one monster entry; JSON maps cannot key on a monster.
#[derive(Serialize)]
struct MonsterGroup<'a> {
    count: u32,
    #[serde(flatten)]
    monster: &'a Monster,
}

/// Quotes a CSV field that contains a separator, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// An encounter made of concrete monsters from a bestiary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledEncounter {
    adventurer_level: i32,
    monsters: BTreeMap<Monster, u32>,
}

impl FilledEncounter {
    /// Creates an empty encounter for a party of `adventurer_level`.
    pub fn new(adventurer_level: i32) -> Self {
        Self {
            adventurer_level,
            monsters: BTreeMap::new(),
        }
    }

    /// Gets the level of the party this encounter was built for.
    pub fn adventurer_level(&self) -> i32 {
        self.adventurer_level
    }

    /// Adds `count` copies of `monster`.
    pub fn add_monsters(&mut self, monster: Monster, count: u32) {
        if count == 0 {
            return;
        }
        *self.monsters.entry(monster).or_insert(0) += count;
    }

    /// Removes up to `count` copies of `monster`.
    pub fn remove_monsters(&mut self, monster: &Monster, count: u32) {
        if let Some(current) = self.monsters.get_mut(monster) {
            if *current <= count {
                self.monsters.remove(monster);
            } else {
                *current -= count;
            }
        }
    }

    /// Gets the monsters with their counts, ordered by level then name.
    pub fn monsters(&self) -> &BTreeMap<Monster, u32> {
        &self.monsters
    }

    /// Number of distinct monsters.
    pub fn num_unique_monsters(&self) -> u32 {
        self.monsters.len() as u32
    }

    /// Number of monsters in total.
    pub fn num_total_monsters(&self) -> u32 {
        self.monsters.values().sum()
    }

    /// XP the party earns for defeating every monster.
    pub fn encounter_xp(&self) -> u32 {
        self.monsters
            .iter()
            .map(|(monster, &count)| {
                xp_for_level_offset(self.adventurer_level, monster.level()) * count
            })
            .sum()
    }

    /// Renders `count,level,name,traits,source` groups separated by commas.
    ///
    /// Each trait is terminated by `;`. Text fields containing `,`, `"` or a
    /// line break are quoted.
    pub fn to_csv_string(&self) -> String {
        self.monsters
            .iter()
            .map(|(monster, count)| {
                format!(
                    "{},{},{},{},{}",
                    count,
                    monster.level(),
                    csv_field(monster.name()),
                    csv_field(&traits_to_string(monster.traits())),
                    csv_field(monster.source())
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Serialize for FilledEncounter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.monsters
                .iter()
                .map(|(monster, &count)| MonsterGroup { count, monster }),
        )
    }
}

impl fmt::Display for FilledEncounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .monsters
            .iter()
            .map(|(monster, count)| format!("{} {}({})", count, monster.name(), monster.source()))
            .collect();
        f.write_str(&groups.join(" : "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CreatureSize;

    fn goblin(level: i32) -> Monster {
        Monster::new(
            "Goblin Warrior",
            level,
            CreatureSize::Small,
            vec!["Goblin".to_string(), "Humanoid".to_string()],
            "Bestiary pg. 180",
        )
    }

    fn ogre() -> Monster {
        Monster::new(
            "Ogre Warrior",
            3,
            CreatureSize::Large,
            vec!["Giant".to_string()],
            "Bestiary pg. 255",
        )
    }

    #[test]
    fn test_counts_and_xp() {
        let mut encounter = FilledEncounter::new(2);
        encounter.add_monsters(goblin(-1), 3);
        encounter.add_monsters(ogre(), 1);

        assert_eq!(encounter.num_total_monsters(), 4);
        assert_eq!(encounter.num_unique_monsters(), 2);
        // level -1 vs party 2 is offset -3 (21 XP); level 3 is offset +1 (48 XP)
        assert_eq!(encounter.encounter_xp(), 21 * 3 + 48);
    }

    #[test]
    fn test_remove_monsters() {
        let mut encounter = FilledEncounter::new(2);
        encounter.add_monsters(ogre(), 2);
        encounter.remove_monsters(&ogre(), 1);
        assert_eq!(encounter.monsters().get(&ogre()), Some(&1));
        encounter.remove_monsters(&ogre(), 1);
        assert!(encounter.monsters().is_empty());
    }

    #[test]
    fn test_text_rendering() {
        let mut encounter = FilledEncounter::new(2);
        encounter.add_monsters(ogre(), 1);
        encounter.add_monsters(goblin(-1), 2);
        assert_eq!(
            encounter.to_string(),
            "2 Goblin Warrior(Bestiary pg. 180) : 1 Ogre Warrior(Bestiary pg. 255)"
        );
    }

    #[test]
    fn test_serializes_as_monster_groups() {
        let mut encounter = FilledEncounter::new(2);
        encounter.add_monsters(ogre(), 2);

        let value = serde_json::to_value(&encounter).unwrap();
        assert_eq!(value[0]["count"], 2);
        assert_eq!(value[0]["name"], "Ogre Warrior");
        assert_eq!(value[0]["size"], "Large");
    }

    #[test]
    fn test_csv_rendering() {
        let mut encounter = FilledEncounter::new(2);
        encounter.add_monsters(goblin(-1), 2);
        encounter.add_monsters(ogre(), 1);
        assert_eq!(
            encounter.to_csv_string(),
            "2,-1,Goblin Warrior,Goblin;Humanoid;,Bestiary pg. 180,1,3,Ogre Warrior,Giant;,Bestiary pg. 255"
        );
    }

    #[test]
    fn test_csv_quotes_separators() {
        let monster = Monster::new(
            "Bugbear, Prowler",
            2,
            CreatureSize::Medium,
            vec!["Goblin".to_string()],
            "The \"Old\" Bestiary",
        );
        let mut encounter = FilledEncounter::new(2);
        encounter.add_monsters(monster, 1);
        assert_eq!(
            encounter.to_csv_string(),
            "1,2,\"Bugbear, Prowler\",Goblin;,\"The \"\"Old\"\" Bestiary\""
        );
        assert_eq!(csv_field("Ogre"), "Ogre");
    }
}
