//! # Report Module
//!
//! Collects the encounters picked for a run and renders them for a game
//! master, as plain text, CSV or JSON.

use crate::{
    BattleCounts, Bestiary, Difficulty, Encounter, EncounterGenerator, FilledEncounter,
    SkirmishResult,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported report renderings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable listing
    #[default]
    Text,
    /// One row per encounter
    Csv,
    /// Pretty-printed JSON document
    Json,
}

/// A single picked encounter, optionally with named monsters.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub encounter: Encounter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<FilledEncounter>,
}

impl ReportEntry {
    /// XP of the encounter as it will be run.
    ///
    /// Filled encounters can differ from their abstract level plan when a
    /// level had to be substituted.
    pub fn xp(&self) -> u32 {
        match &self.filled {
            Some(filled) => filled.encounter_xp(),
            None => self.encounter.encounter_xp(),
        }
    }

    fn csv_groups(&self) -> String {
        match &self.filled {
            Some(filled) => filled.to_csv_string(),
            None => self.encounter.to_csv_string(),
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filled {
            Some(filled) => write!(f, "{}", filled),
            None => write!(f, "{}", self.encounter),
        }
    }
}

/// Encounters picked for one difficulty tier.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub difficulty: Difficulty,
    pub desired_xp: u32,
    pub lower_bound: u32,
    pub upper_bound: u32,
    pub entries: Vec<ReportEntry>,
}

/// Everything a run produced, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub party_level: i32,
    pub party_size: u32,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Picks encounters from `generator` and fills them from `bestiary` if given.
    ///
    /// Tiers with a battle count of zero are left out of the report.
    pub fn build<R: Rng + ?Sized>(
        generator: &EncounterGenerator,
        battles: &BattleCounts,
        bestiary: Option<&Bestiary>,
        rng: &mut R,
    ) -> Self {
        let party = generator.party();
        let mut sections = Vec::new();

        for difficulty in Difficulty::ALL {
            let count = battles.get(difficulty);
            if count == 0 {
                continue;
            }

            let mut entries = Vec::new();
            for encounter in generator.encounters(difficulty, count as usize, rng) {
                let filled = match bestiary {
                    Some(bestiary) => Some(bestiary.fill_encounter(&encounter, rng)),
                    None => None,
                };
                entries.push(ReportEntry { encounter, filled });
            }

            sections.push(ReportSection {
                difficulty,
                desired_xp: party.desired_xp(difficulty),
                lower_bound: party.lower_bound(difficulty),
                upper_bound: party.upper_bound(difficulty),
                entries,
            });
        }

        Self {
            party_level: party.level(),
            party_size: party.size(),
            sections,
        }
    }

    /// Number of encounters across all sections.
    pub fn num_entries(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: OutputFormat) -> SkirmishResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Csv => Ok(self.to_csv()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Renders one CSV row per encounter after a header row.
    pub fn to_csv(&self) -> String {
        let filled = self
            .sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .any(|e| e.filled.is_some());

        let mut lines = vec![if filled {
            "Difficulty,XP,Count,Level,Name,Traits,Source".to_string()
        } else {
            "Difficulty,XP,Count,Level".to_string()
        }];

        for section in &self.sections {
            for entry in &section.entries {
                lines.push(format!(
                    "{},{},{}",
                    section.difficulty,
                    entry.xp(),
                    entry.csv_groups()
                ));
            }
        }

        let mut csv = lines.join("\n");
        csv.push('\n');
        csv
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Party of {} level {} adventurers",
            self.party_size, self.party_level
        )?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(
                f,
                "{}: {} XP ({}-{})",
                section.difficulty, section.desired_xp, section.lower_bound, section.upper_bound
            )?;

            if section.entries.is_empty() {
                writeln!(f, "  no encounters fit this budget")?;
            }
            for (index, entry) in section.entries.iter().enumerate() {
                writeln!(f, "  {}. {}  [{} XP]", index + 1, entry, entry.xp())?;
            }
        }

        Ok(())
    }
}

/// Writes `content` to `path`, replacing any existing file.
pub fn write_to_file(path: impl AsRef<Path>, content: &str) -> SkirmishResult<()> {
    std::fs::write(path, content)?;
    Ok(())
}
