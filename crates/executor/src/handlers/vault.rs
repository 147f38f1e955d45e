//! Vault-wide command handlers.

use crate::convert::convert_result;
use crate::{Output, Result};
use tailor_engine::VersionStore;

/// Handle Stats command.
pub(crate) fn stats(store: &VersionStore) -> Result<Output> {
    Ok(Output::Stats(store.storage_stats()))
}

/// Handle Reconcile command.
pub(crate) fn reconcile(store: &VersionStore) -> Result<Output> {
    let report = convert_result(store.reconcile())?;
    Ok(Output::Reconciled(report))
}

/// Handle Tags command.
pub(crate) fn tags(store: &VersionStore) -> Result<Output> {
    Ok(Output::Tags(store.all_tags()))
}
