//! # Monsters
//!
//! Bestiary records and the small enumerations that describe them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Lowest level a monster record may carry; -1 marks an unleveled creature.
pub const MIN_MONSTER_LEVEL: i32 = -1;

/// Highest level a monster record may carry.
pub const MAX_MONSTER_LEVEL: i32 = 30;

/// Physical size category of a creature.
///
/// Unknown names parse to `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreatureSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
    Invalid,
}

impl CreatureSize {
    /// Parses a size name.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::CreatureSize;
    ///
    /// assert_eq!(CreatureSize::from_name("Huge"), CreatureSize::Huge);
    /// assert_eq!(CreatureSize::from_name("Colossal"), CreatureSize::Invalid);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "Tiny" => CreatureSize::Tiny,
            "Small" => CreatureSize::Small,
            "Medium" => CreatureSize::Medium,
            "Large" => CreatureSize::Large,
            "Huge" => CreatureSize::Huge,
            "Gargantuan" => CreatureSize::Gargantuan,
            _ => CreatureSize::Invalid,
        }
    }

    /// Gets the display name of this size.
    pub fn name(self) -> &'static str {
        match self {
            CreatureSize::Tiny => "Tiny",
            CreatureSize::Small => "Small",
            CreatureSize::Medium => "Medium",
            CreatureSize::Large => "Large",
            CreatureSize::Huge => "Huge",
            CreatureSize::Gargantuan => "Gargantuan",
            CreatureSize::Invalid => "Invalid Creature Size",
        }
    }
}

impl From<&str> for CreatureSize {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for CreatureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joins traits into a single string, each trait followed by `;`.
pub fn traits_to_string(traits: &[String]) -> String {
    traits.iter().map(|t| format!("{};", t)).collect()
}

/// Splits a `;`-separated trait list. A trailing separator adds no empty trait.
pub fn traits_from_string(traits: &str) -> Vec<String> {
    let mut parsed: Vec<String> = traits.split(';').map(str::to_string).collect();
    if parsed.last().map_or(false, |t| t.is_empty()) {
        parsed.pop();
    }
    parsed
}

/// A single creature from the bestiary.
///
/// Two monsters are equal when every field matches. Ordering sorts by level,
/// then name, so monsters can key ordered maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monster {
    name: String,
    level: i32,
    size: CreatureSize,
    traits: Vec<String>,
    source: String,
}

impl Monster {
    /// Creates a new monster record.
    pub fn new(
        name: impl Into<String>,
        level: i32,
        size: CreatureSize,
        traits: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            size,
            traits,
            source: source.into(),
        }
    }

    /// Gets the monster's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the monster's level; -1 for unleveled creatures.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Gets the monster's size.
    pub fn size(&self) -> CreatureSize {
        self.size
    }

    /// Gets the monster's traits in bestiary order.
    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    /// Checks whether the monster carries `trait_name`.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.traits.iter().any(|t| t == trait_name)
    }

    /// Gets where the monster is published.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Checks that every field holds usable data.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && (MIN_MONSTER_LEVEL..=MAX_MONSTER_LEVEL).contains(&self.level)
            && self.size != CreatureSize::Invalid
            && !self.traits.is_empty()
            && !self.source.is_empty()
    }

    /// Creates a copy with a prefixed name and shifted level.
    pub(crate) fn variant(&self, prefix: &str, level_shift: i32) -> Self {
        Self {
            name: format!("{} {}", prefix, self.name),
            level: self.level + level_shift,
            ..self.clone()
        }
    }
}

impl Ord for Monster {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.size.cmp(&other.size))
            .then_with(|| self.traits.cmp(&other.traits))
            .then_with(|| self.source.cmp(&other.source))
    }
}

impl PartialOrd for Monster {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
