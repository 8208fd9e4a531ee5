//! # Encounter Generation
//!
//! Backtracking search for monster groups whose XP lands inside a party's
//! difficulty band.
//!
//! The search works on a selection of per-monster XP values. Each step either
//! accepts the selection as an encounter, or extends it with a batch of one
//! more XP value and recurses. Batches are sized so that a single batch is
//! worth about a fifth of the tier's budget, which keeps the branching factor
//! small and favours evenly sized groups.
//!
//! Within a tier only one encounter is kept per total monster count. Without
//! that rule the results fill up with near copies that differ by a single
//! level.

use crate::{level_for_xp, Difficulty, Encounter, Party, MONSTER_XP_TABLE};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// XP band a single tier's search has to land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XpBand {
    low: u32,
    desired: u32,
    high: u32,
}

impl XpBand {
    fn contains(&self, xp: u32) -> bool {
        (self.low..=self.high).contains(&xp)
    }

    /// Number of monsters worth `xp` each to add in one step.
    fn batch_size(&self, xp: u32) -> usize {
        ((self.desired / 5) / xp).max(1) as usize
    }
}

/// Encounters found for a party, grouped by difficulty.
///
/// All searching happens on construction; the generator is read-only
/// afterwards.
///
/// # Examples
///
/// ```
/// use skirmish::{Difficulty, EncounterGenerator, Party};
/// use rand::SeedableRng;
///
/// let party = Party::new(3, 4).unwrap();
/// let generator = EncounterGenerator::new(party, 2, 6);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let picked = generator.encounters(Difficulty::Low, 3, &mut rng);
/// assert_eq!(picked.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct EncounterGenerator {
    party: Party,
    max_unique_monsters: u32,
    max_total_monsters: u32,
    valid_encounters: BTreeMap<Difficulty, Vec<Encounter>>,
}

impl EncounterGenerator {
    /// Searches every difficulty tier for encounters that suit `party`.
    ///
    /// Encounters never hold more than `max_total_monsters` monsters or more
    /// than `max_unique_monsters` distinct levels.
    pub fn new(party: Party, max_unique_monsters: u32, max_total_monsters: u32) -> Self {
        let mut generator = Self {
            party,
            max_unique_monsters,
            max_total_monsters,
            valid_encounters: BTreeMap::new(),
        };
        generator.fill_out_encounters();
        generator
    }

    /// Gets the party the encounters were built for.
    pub fn party(&self) -> &Party {
        &self.party
    }

    /// Gets the cap on distinct monster levels per encounter.
    pub fn max_unique_monsters(&self) -> u32 {
        self.max_unique_monsters
    }

    /// Gets the cap on monsters per encounter.
    pub fn max_total_monsters(&self) -> u32 {
        self.max_total_monsters
    }

    /// Gets every encounter accepted for `difficulty`, in discovery order.
    pub fn all_encounters(&self, difficulty: Difficulty) -> &[Encounter] {
        self.valid_encounters
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Picks `count` encounters for `difficulty` in a random order.
    ///
    /// The available encounters are shuffled once. If more are requested
    /// than exist, the shuffled order repeats from the start, so every
    /// encounter appears before any appears twice.
    pub fn encounters<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Vec<Encounter> {
        let available = self.all_encounters(difficulty);
        if available.is_empty() || count == 0 {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..available.len()).collect();
        order.shuffle(rng);

        (0..count)
            .map(|i| available[order[i % order.len()]].clone())
            .collect()
    }

    /// Lowest XP a single monster may be worth in a `difficulty` encounter.
    ///
    /// This is the table entry just below the XP each monster would need if
    /// the encounter were filled to the total monster cap.
    pub fn minimum_monster_xp(&self, difficulty: Difficulty) -> u32 {
        if self.max_total_monsters == 0 {
            return 0;
        }

        let lowest = self.party.desired_xp(difficulty) / self.max_total_monsters;
        let mut last = 0;
        for &xp in MONSTER_XP_TABLE.iter() {
            if lowest <= xp {
                return last;
            }
            last = xp;
        }

        0
    }

    /// Highest XP a single monster may be worth in a `difficulty` encounter.
    ///
    /// This is the table entry just below the tier's whole budget, so no
    /// single monster carries an encounter alone at the top of the table.
    pub fn maximum_monster_xp(&self, difficulty: Difficulty) -> u32 {
        if self.max_total_monsters == 0 {
            return 0;
        }

        let desired = self.party.desired_xp(difficulty);
        let mut last = 0;
        for &xp in MONSTER_XP_TABLE.iter() {
            if xp >= desired {
                return last;
            }
            last = xp;
        }

        last
    }

    /// Table entries usable for a single monster at `difficulty`.
    pub fn valid_monster_xps(&self, difficulty: Difficulty) -> Vec<u32> {
        let min_xp = self.minimum_monster_xp(difficulty);
        let max_xp = self.maximum_monster_xp(difficulty);

        MONSTER_XP_TABLE
            .iter()
            .copied()
            .filter(|xp| (min_xp..=max_xp).contains(xp))
            .collect()
    }

    fn fill_out_encounters(&mut self) {
        self.valid_encounters.clear();

        for difficulty in Difficulty::ALL {
            let band = XpBand {
                low: self.party.lower_bound(difficulty),
                desired: self.party.desired_xp(difficulty),
                high: self.party.upper_bound(difficulty),
            };
            let valid_xps = self.valid_monster_xps(difficulty);

            let mut accepted = Vec::new();
            let mut selection = Vec::new();
            self.search(&mut selection, &band, &valid_xps, &mut accepted);

            debug!(
                "{}: {} XP ({}-{}), monster XP {:?}, {} encounters",
                difficulty,
                band.desired,
                band.low,
                band.high,
                valid_xps,
                accepted.len()
            );

            self.valid_encounters.insert(difficulty, accepted);
        }
    }

    fn search(
        &self,
        selection: &mut Vec<u32>,
        band: &XpBand,
        valid_xps: &[u32],
        accepted: &mut Vec<Encounter>,
    ) {
        let encounter = self.selection_to_encounter(selection);
        let xp = encounter.encounter_xp();

        if selection.len() > self.max_total_monsters as usize
            || encounter.num_unique_monsters() > self.max_unique_monsters
            || xp > band.high
        {
            return;
        }

        if band.contains(xp) {
            let total = encounter.num_total_monsters();
            if accepted.iter().all(|e| e.num_total_monsters() != total) {
                accepted.push(encounter);
                return;
            }
        }

        for &monster_xp in valid_xps {
            let batch = band.batch_size(monster_xp);

            selection.extend(std::iter::repeat(monster_xp).take(batch));
            self.search(selection, band, valid_xps, accepted);
            selection.truncate(selection.len() - batch);
        }
    }

    fn selection_to_encounter(&self, selection: &[u32]) -> Encounter {
        let level = self.party.level();
        let mut encounter = Encounter::new(level);
        for &xp in selection {
            encounter.add_monsters(level_for_xp(level, xp), 1);
        }
        encounter
    }
}
