use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use river_crossing::core::config::Configuration;
use river_crossing::core::entity::Entity;
use river_crossing::rules::movegen::Crossing;
use river_crossing::search::bfs::solve;
use river_crossing::solution::{
    export_solution, load_solution, verify_manifest, SolutionError, SolutionManifest,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("river_crossing_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!(
        "failed to create a unique temp dir under {}",
        base.display()
    );
}

#[test]
fn exported_solution_loads_back_verified() {
    let dir = unique_temp_dir("solution_roundtrip");
    let file = dir.join("solution.json");

    let path = solve(Configuration::START).unwrap();
    let manifest = export_solution(&file, Configuration::START, &path).unwrap();
    assert_eq!(manifest.length, 7);

    let loaded = load_solution(&file).unwrap();
    assert_eq!(loaded.manifest, manifest);
    assert_eq!(loaded.moves, path);

    let text = fs::read_to_string(&file).unwrap();
    assert!(text.contains(r#""carry": "goat""#));
    assert!(text.contains(r#""alone""#));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tampered_manifests_are_rejected() {
    let path = solve(Configuration::START).unwrap();
    let good = SolutionManifest::from_path(Configuration::START, &path);
    assert!(verify_manifest(&good).is_ok());

    let mut wrong_version = good.clone();
    wrong_version.format_version = 99;
    assert!(matches!(
        verify_manifest(&wrong_version),
        Err(SolutionError::UnsupportedVersion { found: 99 })
    ));

    let mut short = good.clone();
    short.moves.pop();
    assert!(matches!(
        verify_manifest(&short),
        Err(SolutionError::LengthMismatch {
            declared: 7,
            actual: 6
        })
    ));
    short.length = 6;
    assert!(matches!(
        verify_manifest(&short),
        Err(SolutionError::NotAtGoal(_))
    ));

    let mut wrong_result = good.clone();
    wrong_result.moves[0].to = Configuration::GOAL;
    assert!(matches!(
        verify_manifest(&wrong_result),
        Err(SolutionError::WrongResult { step: 0, .. })
    ));

    let mut impossible = good.clone();
    impossible.moves[1].crossing = Crossing::Carry(Entity::Wolf);
    assert!(matches!(
        verify_manifest(&impossible),
        Err(SolutionError::ImpossibleCrossing { step: 1, .. })
    ));

    // A single solo crossing from the start leaves the wolf with the goat.
    let mut unsafe_first = good;
    unsafe_first.moves.truncate(1);
    unsafe_first.length = 1;
    unsafe_first.moves[0].crossing = Crossing::Alone;
    unsafe_first.moves[0].to = Configuration::START.with_flipped(Entity::Ferryman);
    assert!(matches!(
        verify_manifest(&unsafe_first),
        Err(SolutionError::Replay(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = unique_temp_dir("solution_missing");
    let err = load_solution(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, SolutionError::Io { .. }));
    let _ = fs::remove_dir_all(&dir);
}
