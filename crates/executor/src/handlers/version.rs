//! Version command handlers.

use super::{non_blank, parse_id};
use crate::convert::convert_result;
use crate::{Output, Result, SaveRequest};
use tailor_core::{MetadataPatch, VersionFilter};
use tailor_engine::{NewVersion, VersionStore};

/// Handle Save command.
pub(crate) fn save(store: &VersionStore, req: SaveRequest) -> Result<Output> {
    let mut new = NewVersion::new(
        req.optimization_result,
        req.final_resume,
        req.job_title,
        req.company_name,
        req.job_description,
        req.original_resume_text,
    );
    new.style = non_blank(req.optimization_style);
    new.tier = non_blank(req.optimization_tier);
    new.notes = req.notes;
    new.tags = req.tags.unwrap_or_default();

    let meta = convert_result(store.save(new))?;
    Ok(Output::Saved {
        version_id: meta.version_id,
        version_number: meta.version_number,
    })
}

/// Handle Load command.
pub(crate) fn load(store: &VersionStore, id: &str) -> Result<Output> {
    let id = parse_id(id)?;
    let record = convert_result(store.load(&id))?;
    Ok(Output::Record(Box::new(record)))
}

/// Handle List command.
pub(crate) fn list(
    store: &VersionStore,
    company: Option<String>,
    tag: Option<String>,
    submitted_only: bool,
) -> Result<Output> {
    let filter = VersionFilter {
        company: non_blank(company),
        tag: non_blank(tag),
        submitted_only,
    };
    Ok(Output::Versions(store.list(&filter)))
}

/// Handle Delete command.
pub(crate) fn delete(store: &VersionStore, id: &str) -> Result<Output> {
    let id = parse_id(id)?;
    let outcome = convert_result(store.delete(&id))?;
    Ok(Output::Deleted(outcome))
}

/// Handle UpdateMetadata command.
pub(crate) fn update_metadata(
    store: &VersionStore,
    id: &str,
    patch: &MetadataPatch,
) -> Result<Output> {
    let id = parse_id(id)?;
    let meta = convert_result(store.update_metadata(&id, patch))?;
    Ok(Output::Updated(meta))
}

/// Handle Compare command.
pub(crate) fn compare(store: &VersionStore, a: &str, b: &str) -> Result<Output> {
    let a = parse_id(a)?;
    let b = parse_id(b)?;
    let comparison = convert_result(store.compare(&a, &b))?;
    Ok(Output::Comparison(Box::new(comparison)))
}
