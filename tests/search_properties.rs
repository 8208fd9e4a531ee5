//! Property tests for the XP rules and the encounter search.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skirmish::{
    level_for_xp, xp_for_level_offset, Difficulty, Encounter, EncounterGenerator, Party,
    MONSTER_XP_TABLE,
};
use std::collections::HashSet;

proptest! {
    #[test]
    fn desired_xp_grows_with_party_size(level in 1i32..=20, size in 1u32..50) {
        let smaller = Party::new(level, size).unwrap();
        let larger = Party::new(level, size + 1).unwrap();
        for difficulty in Difficulty::ALL {
            prop_assert!(larger.desired_xp(difficulty) > smaller.desired_xp(difficulty));
        }
    }

    #[test]
    fn desired_xp_is_ordered_by_difficulty(level in 1i32..=20, size in 1u32..50) {
        let party = Party::new(level, size).unwrap();
        for pair in Difficulty::ALL.windows(2) {
            prop_assert!(party.desired_xp(pair[0]) < party.desired_xp(pair[1]));
        }
    }

    #[test]
    fn band_surrounds_desired_xp(level in 1i32..=20, size in 1u32..50) {
        let party = Party::new(level, size).unwrap();
        for difficulty in Difficulty::ALL {
            prop_assert!(party.lower_bound(difficulty) <= party.desired_xp(difficulty));
            prop_assert!(party.upper_bound(difficulty) >= party.desired_xp(difficulty));
        }
    }

    #[test]
    fn far_monsters_are_worth_nothing(level in 1i32..=20, distance in 8i32..200) {
        prop_assert_eq!(xp_for_level_offset(level, level + distance), 0);
        prop_assert_eq!(xp_for_level_offset(level, level - distance), 0);
    }

    #[test]
    fn level_for_xp_inverts_table_lookups(level in 1i32..=20, offset in -7i32..=6) {
        let monster_level = level + offset;
        let xp = xp_for_level_offset(level, monster_level);
        prop_assume!(xp != 0);
        prop_assert_eq!(level_for_xp(level, xp), monster_level);
    }

    #[test]
    fn level_for_xp_floors_between_entries(level in 1i32..=20, index in 1usize..MONSTER_XP_TABLE.len()) {
        let below_entry = MONSTER_XP_TABLE[index] - 1;
        prop_assert_eq!(
            level_for_xp(level, below_entry),
            level_for_xp(level, MONSTER_XP_TABLE[index - 1])
        );
    }

    #[test]
    fn add_then_remove_restores_encounter(
        level in 1i32..=20,
        existing in proptest::collection::btree_map(-1i32..30, 1u32..5, 0..4),
        monster_level in -1i32..30,
        count in 1u32..6,
    ) {
        let mut encounter = Encounter::new(level);
        for (&l, &c) in &existing {
            encounter.add_monsters(l, c);
        }
        let before = encounter.clone();

        encounter.add_monsters(monster_level, count);
        encounter.remove_monsters(monster_level, count);
        prop_assert_eq!(encounter, before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn accepted_encounters_respect_every_limit(
        level in 1i32..=20,
        size in 1u32..=6,
        max_unique in 1u32..=3,
        max_total in 1u32..=6,
    ) {
        let party = Party::new(level, size).unwrap();
        let generator = EncounterGenerator::new(party.clone(), max_unique, max_total);

        for difficulty in Difficulty::ALL {
            let mut totals = HashSet::new();
            for encounter in generator.all_encounters(difficulty) {
                let xp = encounter.encounter_xp();
                prop_assert!(xp >= party.lower_bound(difficulty));
                prop_assert!(xp <= party.upper_bound(difficulty));
                prop_assert!(encounter.num_total_monsters() <= max_total);
                prop_assert!(encounter.num_unique_monsters() <= max_unique);
                prop_assert!(totals.insert(encounter.num_total_monsters()));
            }
        }
    }

    #[test]
    fn picks_cycle_through_everything(seed in any::<u64>(), requested in 1usize..40) {
        let generator = EncounterGenerator::new(Party::new(5, 4).unwrap(), 2, 6);
        let available = generator.all_encounters(Difficulty::Moderate);
        prop_assume!(!available.is_empty());

        let mut rng = StdRng::seed_from_u64(seed);
        let picked = generator.encounters(Difficulty::Moderate, requested, &mut rng);
        prop_assert_eq!(picked.len(), requested);

        let count = available.len();
        for (i, encounter) in picked.iter().enumerate() {
            prop_assert_eq!(encounter, &picked[i % count]);
        }
        if requested >= count {
            for encounter in available {
                prop_assert!(picked[..count].contains(encounter));
            }
        }
    }
}

#[test]
fn moderate_scenario_for_four_level_five_adventurers() {
    let generator = EncounterGenerator::new(Party::new(5, 4).unwrap(), 2, 4);
    let encounters = generator.all_encounters(Difficulty::Moderate);

    assert!(!encounters.is_empty());
    assert!(encounters
        .iter()
        .all(|e| (72..=88).contains(&e.encounter_xp())));
}

#[test]
fn xp_table_spot_checks() {
    assert_eq!(xp_for_level_offset(5, 5), 40);
    assert_eq!(xp_for_level_offset(12, 5), 9);
    assert_eq!(xp_for_level_offset(5, 50), 0);
}
