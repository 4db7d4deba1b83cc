use std::io::Write;

use arena_content::{ConfigLoader, OpponentSelector, Roster, RosterLoader};
use arena_core::{MonsterId, PcgRandom};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn roster_file_replaces_builtin_opponents() {
    let file = write_temp(
        r#"[
            (
                id: -21,
                name: "Brine",
                elemental_type: "water",
                level: 1,
                dna: 0xAABBCC01,
                attributes: (strength: 25, speed: 25, intelligence: 30, stamina: 20),
                description: "Salty.",
            ),
            (
                id: -22,
                name: "Quake",
                elemental_type: "earth",
                level: 12,
                dna: 0x00000002,
                attributes: (strength: 90, speed: 20, intelligence: 30, stamina: 100),
            ),
        ]"#,
    );

    let roster = RosterLoader::load(file.path()).unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.get(MonsterId(-1)).is_none());

    let selector = OpponentSelector::new(&roster);
    let mut rng = PcgRandom::new(5);
    for _ in 0..20 {
        assert_eq!(selector.select(1, &mut rng).record.name, "Brine");
        assert_eq!(selector.select(9, &mut rng).record.name, "Quake");
    }
}

#[test]
fn invalid_roster_file_reports_path() {
    let file = write_temp("[(id: -1, name: \"\", elemental_type: \"fire\", level: 1, dna: 0, attributes: (strength: 10, speed: 10, intelligence: 10, stamina: 10))]");
    let err = RosterLoader::load(file.path()).unwrap_err().to_string();
    assert!(err.contains(&file.path().display().to_string()), "{err}");
}

#[test]
fn missing_files_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.ron");
    assert!(RosterLoader::load(&missing).is_err());
    assert!(ConfigLoader::load(&missing).is_err());
}

#[test]
fn config_file_overrides_defaults() {
    let file = write_temp("time_budget_secs = 30\nturn_delay_ms = 250\n");
    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.time_budget_secs, 30);
    assert_eq!(config.turn_delay_ms, 250);
    assert_eq!(config.start_delay_ms, 500);
}

#[test]
fn builtin_roster_is_default() {
    assert_eq!(Roster::default(), Roster::builtin());
}
