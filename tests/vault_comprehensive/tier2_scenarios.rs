//! Tier 2: multi-step flows a job seeker actually goes through

use crate::test_utils::*;
use tailorvault::{MetadataPatch, SaveRequest, Vault, VersionFilter};

/// Tailor twice for one company, submit the better one, hear back, clean up
#[test]
fn acme_application_lifecycle() {
    let (dir, vault) = setup();

    let first = save(&vault, "Acme Corp", "Backend Engineer");
    let mut req = SaveRequest::new(
        result(9, 1, 91.0, 85.0),
        resume("Backend Engineer", &["Rust", "Postgres", "Kafka"]),
        "Backend Engineer",
        "Acme Corp",
    );
    req.optimization_style = Some("aggressive".to_string());
    req.tags = Some(vec!["backend".to_string()]);
    let second = vault.save_request(req).value.unwrap();
    save(&vault, "Globex", "Platform Engineer");

    let cmp = vault.compare(&first.to_string(), &second.to_string()).value.unwrap();
    assert!(cmp.metrics_delta().overall_score > 0.0);
    assert!(!cmp.text_diff().skills.is_unchanged());

    vault
        .update_metadata(
            &second.to_string(),
            MetadataPatch::new().submitted(true).submitted_date("2026-03-02"),
        )
        .into_result()
        .unwrap();

    // Later session
    let vault = reopen(&dir);
    vault
        .update_metadata(&second.to_string(), MetadataPatch::new().response_received(true))
        .into_result()
        .unwrap();
    assert!(vault.delete(&first.to_string()).success);

    let acme = vault.list(&VersionFilter::all().company("acme")).value.unwrap();
    assert_eq!(acme.len(), 1);
    let meta = &acme[0];
    assert_eq!(meta.version_id, second);
    assert_eq!(meta.version_number, 2);
    assert!(meta.is_submitted);
    assert_eq!(meta.submitted_date.as_deref(), Some("2026-03-02"));
    assert_eq!(meta.response_received, Some(true));
    assert_eq!(meta.optimization_style, "aggressive");

    let stats = vault.storage_stats().value.unwrap();
    assert_eq!(stats.total_versions, 2);
}

#[test]
fn numbers_keep_climbing_after_deletes_and_reopen() {
    let (dir, vault) = setup();
    let ids: Vec<_> = (0..3).map(|i| save(&vault, "Acme", &format!("Role {}", i))).collect();
    vault.delete(&ids[2].to_string());
    vault.delete(&ids[1].to_string());
    drop(vault);

    let vault = reopen(&dir);
    let id = save(&vault, "Acme", "Role 3");
    let meta = vault.load(&id.to_string()).value.unwrap().metadata;
    assert_eq!(meta.version_number, 4);
}

#[test]
fn two_handles_share_one_vault() {
    let (dir, vault) = setup();
    let other = Vault::open(dir.path()).value.unwrap();

    save(&vault, "Acme", "One");
    save(&other, "Beta", "Two");
    save(&vault, "Gamma", "Three");

    let numbers: Vec<u64> = other
        .list(&VersionFilter::all())
        .value
        .unwrap()
        .iter()
        .map(|m| m.version_number)
        .collect();
    assert_eq!(numbers, vec![3, 2, 1]);
}

#[test]
fn concurrent_saves_get_distinct_numbers() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("vault.toml"), "file_lock = true\n").unwrap();
    let path = dir.path().to_path_buf();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let path = path.clone();
            std::thread::spawn(move || {
                let vault = Vault::open(&path).value.unwrap();
                for i in 0..5 {
                    save(&vault, &format!("Company {}", t), &format!("Role {}", i));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let vault = reopen(&dir);
    let mut numbers: Vec<u64> = vault
        .list(&VersionFilter::all())
        .value
        .unwrap()
        .iter()
        .map(|m| m.version_number)
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=20).collect::<Vec<u64>>());
}
