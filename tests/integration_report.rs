//! End-to-end runs: configuration and bestiary files in, report file out.

use skirmish::{
    generation::utils, write_to_file, BattleCounts, Bestiary, Difficulty, EncounterGenerator,
    GenerationConfig, LoadOptions, OutputFormat, Report, SkirmishError, SkirmishResult,
};
use std::path::PathBuf;

fn sample_bestiary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_bestiary.json")
}

#[test]
fn test_sample_bestiary_loads() -> SkirmishResult<()> {
    let bestiary = Bestiary::load(sample_bestiary_path(), LoadOptions::default())?;

    // 19 non-unique records, 16 leveled: 19 base + 19 elite + 16 weak
    assert_eq!(bestiary.len(), 54);
    assert!(bestiary.monsters().iter().all(|m| m.is_valid()));
    assert!(bestiary.monsters().iter().all(|m| !m.has_trait("Unique")));

    let with_unique = Bestiary::load(
        sample_bestiary_path(),
        LoadOptions {
            include_unique: true,
        },
    )?;
    assert_eq!(with_unique.len(), 56);

    Ok(())
}

#[test]
fn test_full_run_writes_report() -> SkirmishResult<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("encounters.csv");

    let mut config = GenerationConfig::for_testing(2024);
    config.bestiary_path = Some(sample_bestiary_path());
    config.format = OutputFormat::Csv;
    config.output_path = Some(output.clone());
    config.validate()?;

    let generator = EncounterGenerator::new(
        config.party()?,
        config.max_unique_monsters,
        config.max_total_monsters,
    );
    let bestiary = Bestiary::load(sample_bestiary_path(), LoadOptions::default())?;
    let mut rng = utils::create_rng(&config);
    let report = Report::build(&generator, &config.battles, Some(&bestiary), &mut rng);

    write_to_file(&output, &report.render(config.format)?)?;

    let written = std::fs::read_to_string(&output)?;
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("Difficulty,XP,Count,Level,Name,Traits,Source")
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), report.num_entries());
    assert!(rows.iter().any(|row| row.starts_with("Moderate,")));

    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> SkirmishResult<()> {
    let config = GenerationConfig::for_testing(77);
    let bestiary = Bestiary::load(sample_bestiary_path(), LoadOptions::default())?;
    let generator = EncounterGenerator::new(
        config.party()?,
        config.max_unique_monsters,
        config.max_total_monsters,
    );

    let render = || -> SkirmishResult<String> {
        let mut rng = utils::create_rng(&config);
        Report::build(&generator, &config.battles, Some(&bestiary), &mut rng)
            .render(OutputFormat::Text)
    };

    assert_eq!(render()?, render()?);
    Ok(())
}

#[test]
fn test_config_file_round_trip() -> SkirmishResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("run.json");

    let mut config = GenerationConfig::for_testing(5);
    config.battles = BattleCounts::uniform(0);
    config.battles.set(Difficulty::Extreme, 2);
    config.format = OutputFormat::Json;
    write_to_file(&path, &serde_json::to_string_pretty(&config)?)?;

    let loaded = GenerationConfig::from_json_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_sample_config_is_runnable() -> SkirmishResult<()> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_config.json");
    let config = GenerationConfig::from_json_file(path)?;

    config.validate()?;
    assert_eq!(config.party_level, 4);
    assert_eq!(config.battles.get(Difficulty::Trivial), 0);
    assert_eq!(config.battles.total(), 8);
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.seed.is_none());
    Ok(())
}

#[test]
fn test_invalid_party_in_config_is_reported() {
    let mut config = GenerationConfig::for_testing(5);
    config.party_level = 0;
    assert!(matches!(config.validate(), Err(SkirmishError::InvalidParty(_))));

    let mut config = GenerationConfig::for_testing(5);
    config.party_size = 200_000_000;
    assert!(matches!(config.validate(), Err(SkirmishError::InvalidParty(_))));
}

#[test]
fn test_json_report_lists_named_monsters() -> SkirmishResult<()> {
    let mut config = GenerationConfig::for_testing(9);
    config.battles = BattleCounts::uniform(1);

    let bestiary = Bestiary::load(sample_bestiary_path(), LoadOptions::default())?;
    let generator = EncounterGenerator::new(
        config.party()?,
        config.max_unique_monsters,
        config.max_total_monsters,
    );
    let mut rng = utils::create_rng(&config);
    let report = Report::build(&generator, &config.battles, Some(&bestiary), &mut rng);

    let value: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json)?)?;
    let sections = value["sections"].as_array().map(Vec::len).unwrap_or(0);
    assert_eq!(sections, 5);
    for section in value["sections"].as_array().into_iter().flatten() {
        for entry in section["entries"].as_array().into_iter().flatten() {
            for group in entry["filled"].as_array().into_iter().flatten() {
                assert!(group["name"].is_string());
                assert!(group["count"].as_u64().unwrap_or(0) > 0);
            }
        }
    }
    Ok(())
}
