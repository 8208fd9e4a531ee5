//! # Monster XP Table
//!
//! Lookups between a monster's level (relative to the party) and the XP it
//! is worth.

use std::collections::BTreeMap;

/// XP awarded for a single monster, indexed by `monster level - party level + 7`.
///
/// The progression is hand-tuned rather than formulaic.
pub const MONSTER_XP_TABLE: [u32; 15] = [
    9, 12, 14, 18, 21, 26, 32, 40, 48, 60, 72, 90, 108, 135, 160,
];

/// Largest level offset (in either direction) the table covers.
pub const MAX_LEVEL_OFFSET: i32 = 7;

/// Level returned by [`level_for_xp`] when no monster fits under the XP value.
pub const NO_MONSTER_LEVEL: i32 = -1;

/// Gets the XP a monster of `monster_level` is worth to a party of `adventurer_level`.
///
/// Monsters more than seven levels away from the party, or below level -1,
/// are worth nothing.
///
/// # Examples
///
/// ```
/// use skirmish::xp_for_level_offset;
///
/// assert_eq!(xp_for_level_offset(5, 5), 40);
/// assert_eq!(xp_for_level_offset(8, 1), 9);
/// assert_eq!(xp_for_level_offset(5, 50), 0);
/// ```
pub fn xp_for_level_offset(adventurer_level: i32, monster_level: i32) -> u32 {
    if monster_level < -1 {
        return 0;
    }

    let offset = monster_level - adventurer_level;
    if !(-MAX_LEVEL_OFFSET..=MAX_LEVEL_OFFSET).contains(&offset) {
        return 0;
    }

    MONSTER_XP_TABLE[(offset + MAX_LEVEL_OFFSET) as usize]
}

/// Gets the monster level worth `xp` to a party of `adventurer_level`.
///
/// XP values between table entries floor to the next lower entry. Returns
/// [`NO_MONSTER_LEVEL`] when nothing in the table is below `xp`.
pub fn level_for_xp(adventurer_level: i32, xp: u32) -> i32 {
    let xp_to_level = xp_to_level_map(adventurer_level);
    if let Some(&level) = xp_to_level.get(&xp) {
        return level;
    }

    match MONSTER_XP_TABLE.iter().rev().find(|&&tabled| tabled < xp) {
        Some(&lower) => level_for_xp(adventurer_level, lower),
        None => NO_MONSTER_LEVEL,
    }
}

/// Inverse of [`xp_for_level_offset`] over offsets -7 through 6.
///
/// The top offset is left out, so the highest table entry is never an exact
/// match and floors to the one below it.
fn xp_to_level_map(adventurer_level: i32) -> BTreeMap<u32, i32> {
    let mut map = BTreeMap::new();

    for offset in -MAX_LEVEL_OFFSET..MAX_LEVEL_OFFSET {
        let monster_level = adventurer_level + offset;
        let xp = xp_for_level_offset(adventurer_level, monster_level);
        if xp != 0 {
            map.insert(xp, monster_level);
        }
    }

    map
}
