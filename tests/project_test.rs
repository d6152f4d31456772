//! Integration tests for project probes
//!
//! Each test works in its own temporary directory.

use genguard::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn project_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn guard_for(dir: &TempDir) -> GenGuard {
    let mut config = GuardConfig::default();
    config.project = ProjectConfig::new(dir.path());
    GenGuard::new(config)
}

#[test]
fn test_marker_file_detection() {
    let dir = project_dir();
    let guard = guard_for(&dir);

    assert!(!guard.is_project_initialized());
    fs::write(dir.path().join(".yo-rc.json"), "{}").unwrap();
    assert!(guard.is_project_initialized());
    fs::remove_file(dir.path().join(".yo-rc.json")).unwrap();
    assert!(!guard.is_project_initialized());
}

#[test]
fn test_custom_marker_file() {
    let dir = project_dir();
    let mut config = ProjectConfig::new(dir.path());
    config.marker_file = ".generator.json".to_string();
    let project = Project::new(config);

    fs::write(dir.path().join(".yo-rc.json"), "{}").unwrap();
    assert!(!project.is_initialized());
    fs::write(dir.path().join(".generator.json"), "{}").unwrap();
    assert!(project.is_initialized());
}

#[test]
fn test_load_persisted_entities() {
    let dir = project_dir();
    fs::create_dir(dir.path().join(".jhipster")).unwrap();
    fs::write(dir.path().join(".jhipster/A.json"), r#"{"name": "toto"}"#).unwrap();

    let entities = guard_for(&dir).load_persisted_entities(&["A"]).unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities["A"]["name"], "toto");
}

#[test]
fn test_missing_entity_files_are_omitted() {
    let dir = project_dir();
    fs::create_dir(dir.path().join(".jhipster")).unwrap();
    fs::write(dir.path().join(".jhipster/B.json"), r#"{"fields": []}"#).unwrap();

    let guard = guard_for(&dir);
    assert!(guard.load_persisted_entities(&["A"]).unwrap().is_empty());

    let entities = guard.load_persisted_entities(&["A", "B"]).unwrap();
    assert_eq!(entities.keys().collect::<Vec<_>>(), ["B"]);
}

#[test]
fn test_missing_entities_dir_is_not_an_error() {
    let dir = project_dir();
    assert!(guard_for(&dir)
        .load_persisted_entities(&["A"])
        .unwrap()
        .is_empty());
}

#[test]
fn test_load_without_names_fails() {
    let dir = project_dir();
    let names: [&str; 0] = [];
    let result = guard_for(&dir).load_persisted_entities(&names);
    assert!(matches!(result, Err(GenGuardError::InvalidArgument(_))));
}

#[test]
fn test_path_like_names_are_rejected() {
    let dir = project_dir();
    let result = guard_for(&dir).load_persisted_entities(&["../secrets"]);
    assert!(matches!(result, Err(GenGuardError::InvalidArgument(_))));
}

#[test]
fn test_malformed_entity_file() {
    let dir = project_dir();
    fs::create_dir(dir.path().join(".jhipster")).unwrap();
    fs::write(dir.path().join(".jhipster/A.json"), "{ not json").unwrap();

    match guard_for(&dir).load_persisted_entities(&["A"]) {
        Err(GenGuardError::InvalidEntityFile { path, .. }) => {
            assert!(path.ends_with(".jhipster/A.json"));
        }
        other => panic!("Expected InvalidEntityFile error, got {:?}", other),
    }
}

#[test]
fn test_last_migration_timestamp() {
    let dir = project_dir();
    let guard = guard_for(&dir);
    assert_eq!(guard.project().last_migration_timestamp().unwrap(), None);

    let marker = json!({
        "generator-jhipster": {
            "baseName": "shop",
            "lastMigrationTimestamp": 1_577_836_800_000_i64
        }
    });
    fs::write(dir.path().join(".yo-rc.json"), marker.to_string()).unwrap();
    assert_eq!(
        guard.project().last_migration_timestamp().unwrap().as_deref(),
        Some("20200101000000")
    );

    fs::write(
        dir.path().join(".yo-rc.json"),
        json!({ "lastMigrationTimestamp": "20300101000000" }).to_string(),
    )
    .unwrap();
    assert_eq!(
        guard.project().last_migration_timestamp().unwrap().as_deref(),
        Some("20300101000000")
    );
}

#[test]
fn test_migration_clock_follows_project() {
    let dir = project_dir();
    fs::write(
        dir.path().join(".yo-rc.json"),
        json!({ "generator-jhipster": { "lastMigrationTimestamp": "99990101000000" } }).to_string(),
    )
    .unwrap();

    let mut clock = guard_for(&dir).migration_clock().unwrap();
    assert_eq!(clock.next_timestamp(), "99990101000001");
    assert_eq!(clock.next_timestamp(), "99990101000002");
}

#[test]
fn test_persisted_entities_pass_through_entity_guard() {
    let dir = project_dir();
    fs::create_dir(dir.path().join(".jhipster")).unwrap();
    fs::write(
        dir.path().join(".jhipster/Job.json"),
        json!({
            "entityTableName": "job",
            "fields": [{ "fieldName": "jobTitle" }, { "fieldName": "minSalary" }]
        })
        .to_string(),
    )
    .unwrap();
    fs::write(
        dir.path().join(".jhipster/Task.json"),
        json!({ "fields": [{ "fieldName": "new" }] }).to_string(),
    )
    .unwrap();

    let guard = guard_for(&dir);
    let entities = guard.load_persisted_entities(&["Job", "Task"]).unwrap();

    assert!(guard.check_entity("Job", &entities["Job"], Some("sql")).is_ok());
    assert!(matches!(
        guard.check_entity("Task", &entities["Task"], Some("sql")),
        Err(GenGuardError::ReservedName(_))
    ));
}

#[test]
fn test_empty_marker_file_records_no_timestamp() {
    let dir = project_dir();
    let guard = guard_for(&dir);

    for content in ["", "  \n"] {
        fs::write(dir.path().join(".yo-rc.json"), content).unwrap();

        assert!(guard.is_project_initialized());
        assert_eq!(guard.project().last_migration_timestamp().unwrap(), None);

        let mut clock = guard.migration_clock().unwrap();
        let first = clock.next_timestamp();
        let second = clock.next_timestamp();
        assert_eq!(first.len(), 14);
        assert!(first < second);
    }
}
