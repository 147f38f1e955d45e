//! Shared fixtures for the comprehensive suite

use tailorvault::{
    ChangeStatus, ChangeType, Metrics, OptimizationResult, ResumeChange, ResumeContent, Vault,
    VersionId,
};
use tempfile::TempDir;

/// A fresh vault in its own temporary directory
pub fn setup() -> (TempDir, Vault) {
    let dir = TempDir::new().unwrap();
    let vault = Vault::open(dir.path()).value.unwrap();
    (dir, vault)
}

/// Reopen the vault in `dir`
pub fn reopen(dir: &TempDir) -> Vault {
    Vault::open(dir.path()).value.unwrap()
}

/// Result with the given review outcome and scores
pub fn result(accepted: usize, rejected: usize, overall: f64, ats: f64) -> OptimizationResult {
    let changes = (0..accepted + rejected)
        .map(|i| {
            let status = if i < accepted {
                ChangeStatus::Accepted
            } else {
                ChangeStatus::Rejected
            };
            ResumeChange::new(format!("c{}", i), ChangeType::Summary, "old", "new").with_status(status)
        })
        .collect();
    OptimizationResult::new(
        changes,
        Metrics {
            overall_score: Some(overall),
            authenticity_score: Some(90.0),
            role_alignment_score: Some(overall - 5.0),
            ats_score: Some(ats),
            ..Metrics::default()
        },
    )
}

/// Résumé with a headline and skills
pub fn resume(headline: &str, skills: &[&str]) -> ResumeContent {
    ResumeContent {
        name: Some("Jordan Lee".to_string()),
        headline: Some(headline.to_string()),
        summary: Some(format!("{}. Ships reliable systems.", headline)),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..ResumeContent::default()
    }
}

/// Save a version with default scores and return its id
pub fn save(vault: &Vault, company: &str, title: &str) -> VersionId {
    let outcome = vault.save(
        result(7, 3, 80.0, 70.0),
        resume(title, &["Rust", "Go"]),
        title,
        company,
        &format!("{} needs a {}", company, title),
        "original text",
        None,
        None,
        None,
        None,
    );
    assert!(outcome.success, "save failed: {}", outcome.message);
    outcome.value.unwrap()
}
