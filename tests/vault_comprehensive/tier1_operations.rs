//! Tier 1: each facade operation on its own

use crate::test_utils::*;
use tailorvault::{DeleteOutcome, ErrorKind, MetadataPatch, VersionFilter, NEVER_UPDATED};

// =============================================================================
// save / load
// =============================================================================

#[test]
fn save_returns_id_and_numbers_from_one() {
    let (_dir, vault) = setup();
    let id = save(&vault, "Acme Corp", "Engineer");

    let record = vault.load(&id.to_string()).value.unwrap();
    assert_eq!(record.metadata.version_id, id);
    assert_eq!(record.metadata.version_number, 1);
    assert_eq!(record.metadata.total_changes, 10);
    assert_eq!(record.metadata.accepted_changes, 7);
    assert_eq!(record.metadata.rejected_changes, 3);
    assert_eq!(record.metadata.optimization_style, "balanced");
    assert_eq!(record.metadata.optimization_tier, "standard");
    assert!(!record.metadata.is_submitted);
    assert!(record.metadata.tags.is_empty());
}

#[test]
fn save_message_names_version_number() {
    let (_dir, vault) = setup();
    save(&vault, "Acme", "Engineer");
    let outcome = vault.save(
        result(1, 0, 50.0, 50.0),
        resume("Dev", &[]),
        "Dev",
        "Beta",
        "",
        "",
        Some("aggressive"),
        Some("premium"),
        Some("first try"),
        Some(vec!["remote".to_string()]),
    );
    assert!(outcome.success);
    assert_eq!(outcome.message, "Version 2 saved successfully");

    let meta = vault.load(&outcome.value.unwrap().to_string()).value.unwrap().metadata;
    assert_eq!(meta.optimization_style, "aggressive");
    assert_eq!(meta.optimization_tier, "premium");
    assert_eq!(meta.notes.as_deref(), Some("first try"));
    assert_eq!(meta.tags, vec!["remote".to_string()]);
}

#[test]
fn blank_style_falls_back_to_default() {
    let (_dir, vault) = setup();
    let outcome = vault.save(
        result(1, 0, 50.0, 50.0),
        resume("Dev", &[]),
        "Dev",
        "Beta",
        "",
        "",
        Some("  "),
        None,
        None,
        None,
    );
    let meta = vault.load(&outcome.value.unwrap().to_string()).value.unwrap().metadata;
    assert_eq!(meta.optimization_style, "balanced");
}

#[test]
fn load_unknown_id_is_not_found() {
    let (_dir, vault) = setup();
    let outcome = vault.load(&tailorvault::VersionId::new().to_string());
    assert!(!outcome.success);
    assert!(outcome.value.is_none());
    assert_eq!(outcome.error_kind, Some(ErrorKind::NotFound));
}

#[test]
fn load_malformed_id_is_validation_failure() {
    let (_dir, vault) = setup();
    let outcome = vault.load("not-a-uuid");
    assert!(!outcome.success);
    assert_eq!(outcome.error_kind, Some(ErrorKind::ValidationFailure));
}

// =============================================================================
// list
// =============================================================================

#[test]
fn list_is_newest_first() {
    let (_dir, vault) = setup();
    save(&vault, "Acme", "One");
    save(&vault, "Acme", "Two");
    save(&vault, "Beta", "Three");

    let versions = vault.list(&VersionFilter::all()).value.unwrap();
    let numbers: Vec<u64> = versions.iter().map(|m| m.version_number).collect();
    assert_eq!(numbers, vec![3, 2, 1]);
}

#[test]
fn list_filters_combine() {
    let (_dir, vault) = setup();
    let a = save(&vault, "Acme Corp", "One");
    save(&vault, "ACME Labs", "Two");
    save(&vault, "Beta", "Three");
    vault.update_metadata(
        &a.to_string(),
        MetadataPatch::new().tags(["remote"]).submitted(true),
    );

    let acme = vault.list(&VersionFilter::all().company("acme")).value.unwrap();
    assert_eq!(acme.len(), 2);

    let remote = vault
        .list(&VersionFilter::all().company("acme").tag("remote").submitted_only(true))
        .value
        .unwrap();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].version_id, a);

    let none = vault.list(&VersionFilter::all().tag("Remote")).value.unwrap();
    assert!(none.is_empty());
}

#[test]
fn list_empty_vault() {
    let (_dir, vault) = setup();
    let outcome = vault.list(&VersionFilter::all());
    assert!(outcome.success);
    assert!(outcome.value.unwrap().is_empty());
}

// =============================================================================
// delete
// =============================================================================

#[test]
fn delete_removes_version() {
    let (_dir, vault) = setup();
    let id = save(&vault, "Acme", "Engineer");

    let outcome = vault.delete(&id.to_string());
    assert!(outcome.success);
    assert_eq!(outcome.message, "Version 1 deleted successfully");
    assert_eq!(
        outcome.value,
        Some(DeleteOutcome::Removed { version_number: 1 })
    );
    assert!(vault.list(&VersionFilter::all()).value.unwrap().is_empty());
    assert_eq!(
        vault.load(&id.to_string()).error_kind,
        Some(ErrorKind::NotFound)
    );
}

#[test]
fn delete_twice_is_not_found() {
    let (_dir, vault) = setup();
    let id = save(&vault, "Acme", "Engineer");
    assert!(vault.delete(&id.to_string()).success);

    let again = vault.delete(&id.to_string());
    assert!(!again.success);
    assert_eq!(again.error_kind, Some(ErrorKind::NotFound));
}

// =============================================================================
// update_metadata
// =============================================================================

#[test]
fn update_metadata_changes_index_and_record() {
    let (dir, vault) = setup();
    let id = save(&vault, "Acme", "Engineer");

    let outcome = vault.update_metadata(
        &id.to_string(),
        MetadataPatch::new()
            .notes("Applied via referral")
            .submitted(true)
            .submitted_date("2026-02-01"),
    );
    assert!(outcome.success);
    assert_eq!(outcome.message, "Metadata updated successfully");
    let meta = outcome.value.unwrap();
    assert_eq!(meta.notes.as_deref(), Some("Applied via referral"));
    assert!(meta.is_submitted);
    assert_eq!(meta.response_received, None);

    let vault = reopen(&dir);
    let listed = vault.list(&VersionFilter::all().submitted_only(true)).value.unwrap();
    assert_eq!(listed.len(), 1);
    let loaded = vault.load(&id.to_string()).value.unwrap();
    assert_eq!(loaded.metadata, listed[0]);
}

#[test]
fn update_metadata_unknown_id_fails() {
    let (_dir, vault) = setup();
    let outcome = vault.update_metadata(
        &tailorvault::VersionId::new().to_string(),
        MetadataPatch::new().notes("x"),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.error_kind, Some(ErrorKind::NotFound));
}

// =============================================================================
// compare
// =============================================================================

#[test]
fn compare_reports_b_minus_a() {
    let (_dir, vault) = setup();
    let a = save(&vault, "Acme", "Engineer");
    let b = vault
        .save(
            result(9, 1, 88.5, 64.0),
            resume("Staff Engineer", &["Rust", "Kubernetes"]),
            "Staff Engineer",
            "Acme",
            "",
            "",
            None,
            None,
            None,
            None,
        )
        .value
        .unwrap();

    let cmp = vault.compare(&a.to_string(), &b.to_string()).value.unwrap();
    let delta = cmp.metrics_delta();
    assert!((delta.overall_score - 8.5).abs() < 1e-9);
    assert!((delta.ats_score - -6.0).abs() < 1e-9);
    assert_eq!(delta.total_changes, 0);
    assert_eq!(delta.accepted_changes, 2);
    assert_eq!(delta.rejected_changes, -2);

    let text = cmp.text_diff();
    assert_eq!(text.headline.a, "Engineer");
    assert_eq!(text.headline.b, "Staff Engineer");
    assert_eq!(text.skills.a, "Rust, Go");
    assert_eq!(text.skills.b, "Rust, Kubernetes");
}

#[test]
fn compare_with_missing_side_fails() {
    let (_dir, vault) = setup();
    let a = save(&vault, "Acme", "Engineer");
    let outcome = vault.compare(&a.to_string(), &tailorvault::VersionId::new().to_string());
    assert!(!outcome.success);
    assert_eq!(outcome.error_kind, Some(ErrorKind::NotFound));
}

// =============================================================================
// storage_stats / tags
// =============================================================================

#[test]
fn stats_on_empty_vault() {
    let (dir, vault) = setup();
    let stats = vault.storage_stats().value.unwrap();
    assert_eq!(stats.total_versions, 0);
    assert_eq!(stats.total_size_bytes, 0);
    assert_eq!(stats.last_updated, NEVER_UPDATED);
    assert_eq!(stats.storage_path, dir.path());
}

#[test]
fn stats_count_record_bytes() {
    let (_dir, vault) = setup();
    save(&vault, "Acme", "Engineer");
    save(&vault, "Beta", "Engineer");
    let stats = vault.storage_stats().value.unwrap();
    assert_eq!(stats.total_versions, 2);
    assert!(stats.total_size_bytes > 0);
    assert_ne!(stats.last_updated, NEVER_UPDATED);
}

#[test]
fn all_tags_sorted_and_distinct() {
    let (_dir, vault) = setup();
    let a = save(&vault, "Acme", "One");
    let b = save(&vault, "Beta", "Two");
    vault.update_metadata(&a.to_string(), MetadataPatch::new().tags(["remote", "backend"]));
    vault.update_metadata(&b.to_string(), MetadataPatch::new().tags(["backend"]));

    let tags = vault.all_tags().value.unwrap();
    assert_eq!(tags, vec!["backend".to_string(), "remote".to_string()]);
}
