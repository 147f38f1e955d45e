//! Plain-text rendering of command output

use std::fmt::Write;
use tailor_core::{TextPair, VersionMetadata};
use tailor_executor::Output;

/// Render any output for the terminal
pub fn output(output: &Output) -> String {
    match output {
        Output::Saved {
            version_id,
            version_number,
        } => format!("v{} {}\n", version_number, version_id),
        Output::Record(record) => {
            let mut s = metadata_block(&record.metadata);
            let m = record.metrics_summary();
            let _ = writeln!(
                s,
                "scores:    overall {:.1}  authenticity {:.1}  role {:.1}  ats {:.1}",
                m.overall_score, m.authenticity_score, m.role_alignment_score, m.ats_score
            );
            if let Some(headline) = &record.final_content.headline {
                let _ = writeln!(s, "headline:  {}", headline);
            }
            if !record.final_content.skills.is_empty() {
                let _ = writeln!(s, "skills:    {}", record.skills_text());
            }
            s
        }
        Output::Versions(versions) => versions_table(versions),
        Output::Deleted(_) | Output::Updated(_) | Output::Reconciled(_) => String::new(),
        Output::Comparison(cmp) => {
            let d = cmp.metrics_delta();
            let text = cmp.text_diff();
            let mut s = String::new();
            let _ = writeln!(s, "A: {}", cmp.version_a.metadata.display_name());
            let _ = writeln!(s, "B: {}", cmp.version_b.metadata.display_name());
            let _ = writeln!(s);
            let _ = writeln!(s, "overall score      {:+.2}", d.overall_score);
            let _ = writeln!(s, "authenticity       {:+.2}", d.authenticity_score);
            let _ = writeln!(s, "role alignment     {:+.2}", d.role_alignment_score);
            let _ = writeln!(s, "ats score          {:+.2}", d.ats_score);
            let _ = writeln!(s, "total changes      {:+}", d.total_changes);
            let _ = writeln!(s, "accepted changes   {:+}", d.accepted_changes);
            let _ = writeln!(s, "rejected changes   {:+}", d.rejected_changes);
            text_pair(&mut s, "headline", &text.headline);
            text_pair(&mut s, "summary", &text.summary);
            text_pair(&mut s, "skills", &text.skills);
            s
        }
        Output::Stats(stats) => format!(
            "versions:      {}\nsize:          {} ({} bytes)\npath:          {}\nlast updated:  {}\n",
            stats.total_versions,
            stats.human_size(),
            stats.total_size_bytes,
            stats.storage_path.display(),
            stats.last_updated
        ),
        Output::Tags(tags) => tags.iter().map(|t| format!("{}\n", t)).collect(),
    }
}

fn metadata_block(meta: &VersionMetadata) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", meta.display_name());
    let _ = writeln!(s, "id:        {}", meta.version_id);
    let _ = writeln!(
        s,
        "style:     {} / {}",
        meta.optimization_style, meta.optimization_tier
    );
    let _ = writeln!(
        s,
        "changes:   {} total, {} accepted, {} rejected",
        meta.total_changes, meta.accepted_changes, meta.rejected_changes
    );
    if !meta.tags.is_empty() {
        let _ = writeln!(s, "tags:      {}", meta.tags.join(", "));
    }
    if let Some(notes) = &meta.notes {
        let _ = writeln!(s, "notes:     {}", notes);
    }
    if meta.is_submitted {
        let _ = writeln!(
            s,
            "submitted: {}{}",
            meta.submitted_date.as_deref().unwrap_or("yes"),
            match meta.response_received {
                Some(true) => " (response received)",
                Some(false) => " (no response)",
                None => "",
            }
        );
    }
    s
}

fn versions_table(versions: &[VersionMetadata]) -> String {
    if versions.is_empty() {
        return "No versions found\n".to_string();
    }
    let mut s = String::new();
    for meta in versions {
        let flag = if meta.is_submitted { "*" } else { " " };
        let _ = writeln!(s, "{} {}  {}", flag, meta.version_id, meta.display_name());
    }
    s
}

fn text_pair(s: &mut String, label: &str, pair: &TextPair) {
    if pair.is_unchanged() {
        let _ = writeln!(s, "{}: unchanged", label);
    } else {
        let _ = writeln!(s, "{}:\n  - {}\n  + {}", label, pair.a, pair.b);
    }
}
