//! Tier 3: on-disk compatibility and recovery from damage

use crate::test_utils::*;
use serde_json::json;
use std::fs;
use tailorvault::{ErrorKind, VersionFilter, VersionId};

const INDEX: &str = "versions_index.json";

fn record_file(dir: &tempfile::TempDir, id: &VersionId) -> std::path::PathBuf {
    dir.path().join(format!("{}.json", id))
}

#[test]
fn record_file_uses_documented_keys() {
    let (dir, vault) = setup();
    let id = save(&vault, "Acme", "Engineer");

    let raw: serde_json::Value =
        serde_json::from_slice(&fs::read(record_file(&dir, &id)).unwrap()).unwrap();
    for key in [
        "metadata",
        "optimization_result",
        "final_resume",
        "job_description",
        "original_resume_text",
    ] {
        assert!(raw.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(raw["metadata"]["version_id"], id.to_string());
    assert_eq!(raw["metadata"]["company_name"], "Acme");

    let index: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.path().join(INDEX)).unwrap()).unwrap();
    assert!(index["versions"][id.to_string()].is_object());
    assert!(index["last_updated"].is_string());
}

#[test]
fn legacy_index_without_high_water_mark_loads() {
    let (dir, vault) = setup();
    let id = save(&vault, "Acme", "Engineer");
    drop(vault);

    let path = dir.path().join(INDEX);
    let mut index: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    index.as_object_mut().unwrap().remove("high_water_mark");
    fs::write(&path, serde_json::to_vec(&index).unwrap()).unwrap();

    let vault = reopen(&dir);
    assert_eq!(vault.list(&VersionFilter::all()).value.unwrap().len(), 1);
    let next = save(&vault, "Beta", "Engineer");
    assert_eq!(vault.load(&next.to_string()).value.unwrap().metadata.version_number, 2);
    assert!(vault.load(&id.to_string()).success);
}

#[test]
fn corrupt_index_lists_nothing_but_saves_stay_unique() {
    let (dir, vault) = setup();
    save(&vault, "Acme", "One");
    save(&vault, "Acme", "Two");
    fs::write(dir.path().join(INDEX), b"{ not json").unwrap();

    let listed = vault.list(&VersionFilter::all());
    assert!(listed.success);
    assert!(listed.value.unwrap().is_empty());

    let id = save(&vault, "Acme", "Three");
    let meta = vault.load(&id.to_string()).value.unwrap().metadata;
    assert_eq!(meta.version_number, 3);
    assert_eq!(vault.list(&VersionFilter::all()).value.unwrap().len(), 3);
}

#[test]
fn corrupt_record_reports_corruption() {
    let (dir, vault) = setup();
    let id = save(&vault, "Acme", "Engineer");
    fs::write(record_file(&dir, &id), b"[]").unwrap();

    let outcome = vault.load(&id.to_string());
    assert!(!outcome.success);
    assert_eq!(outcome.error_kind, Some(ErrorKind::CorruptRecord));
    assert_eq!(vault.list(&VersionFilter::all()).value.unwrap().len(), 1);
}

#[test]
fn reconcile_restores_orphan_and_drops_stale() {
    let (dir, vault) = setup();
    let kept = save(&vault, "Acme", "Kept");
    let orphan = save(&vault, "Acme", "Orphan");
    let stale = save(&vault, "Acme", "Stale");

    // Orphan: record without index entry. Stale: index entry without record.
    let path = dir.path().join(INDEX);
    let mut index: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    index["versions"].as_object_mut().unwrap().remove(&orphan.to_string());
    fs::write(&path, serde_json::to_vec(&index).unwrap()).unwrap();
    fs::remove_file(record_file(&dir, &stale)).unwrap();
    fs::write(dir.path().join(format!("{}.json", VersionId::new())), b"garbage").unwrap();

    let report = vault.reconcile().value.unwrap();
    assert_eq!(report.restored, vec![orphan]);
    assert_eq!(report.dropped, vec![stale]);
    assert_eq!(report.unreadable.len(), 1);

    let ids: Vec<VersionId> = vault
        .list(&VersionFilter::all())
        .value
        .unwrap()
        .iter()
        .map(|m| m.version_id)
        .collect();
    assert_eq!(ids, vec![orphan, kept]);

    let again = vault.reconcile().value.unwrap();
    assert!(!again.changed_index());
}

#[test]
fn unrelated_files_are_ignored() {
    let (dir, vault) = setup();
    save(&vault, "Acme", "Engineer");
    fs::write(dir.path().join("notes.json"), json!({"hello": 1}).to_string()).unwrap();
    fs::write(dir.path().join("README.txt"), b"hi").unwrap();

    let report = vault.reconcile().value.unwrap();
    assert!(report.is_clean());
    assert_eq!(vault.storage_stats().value.unwrap().total_versions, 1);
}

#[test]
fn bad_vault_toml_fails_open() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("vault.toml"), "default_style = 3\n").unwrap();
    let outcome = tailorvault::Vault::open(dir.path());
    assert!(!outcome.success);
    assert!(outcome.value.is_none());
}
