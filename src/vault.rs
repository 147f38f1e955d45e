//! Typed vault facade.
//!
//! [`Vault`] wraps an [`Executor`] and exposes one method per operation.
//! Every method returns an [`Outcome`]: callers check `success` and read
//! `value` or `message`. Nothing here panics or returns `Err`.

use crate::types::*;
use std::path::Path;
use tailor_executor::{Command, Error, Executor, Outcome, Output, SaveRequest};

/// Handle to one résumé version vault
#[derive(Debug)]
pub struct Vault {
    executor: Executor,
}

impl Vault {
    /// Open (creating if needed) the vault at `path`, honoring its `vault.toml`
    pub fn open(path: impl AsRef<Path>) -> Outcome<Vault> {
        let path = path.as_ref();
        let result = StoreConfig::load(path)
            .map_err(Error::from)
            .and_then(Executor::open);
        match result {
            Ok(executor) => Outcome::ok(
                Vault { executor },
                format!("Opened vault at {}", path.display()),
            ),
            Err(e) => {
                tracing::error!(target: "tailor::store", path = %path.display(), error = %e, "Failed to open vault");
                Outcome::failed(&e)
            }
        }
    }

    /// Open the vault described by `config`
    pub fn open_with(config: StoreConfig) -> Outcome<Vault> {
        let display = config.storage_path.display().to_string();
        match Executor::open(config) {
            Ok(executor) => Outcome::ok(Vault { executor }, format!("Opened vault at {}", display)),
            Err(e) => Outcome::failed(&e),
        }
    }

    /// The command executor behind this vault
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    // =========================================================================
    // Version Operations
    // =========================================================================

    /// Save a new version; the value is its id
    #[allow(clippy::too_many_arguments)]
    pub fn save(
        &self,
        optimization_result: OptimizationResult,
        final_resume: ResumeContent,
        job_title: &str,
        company_name: &str,
        job_description: &str,
        original_resume_text: &str,
        style: Option<&str>,
        tier: Option<&str>,
        notes: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> Outcome<VersionId> {
        let mut req = SaveRequest::new(optimization_result, final_resume, job_title, company_name);
        req.job_description = job_description.to_string();
        req.original_resume_text = original_resume_text.to_string();
        req.optimization_style = style.map(str::to_string);
        req.optimization_tier = tier.map(str::to_string);
        req.notes = notes.map(str::to_string);
        req.tags = tags;
        self.save_request(req)
    }

    /// Save a new version from a prepared request
    pub fn save_request(&self, req: SaveRequest) -> Outcome<VersionId> {
        self.dispatch(Command::Save(Box::new(req)), |out| match out {
            Output::Saved { version_id, .. } => Some(version_id),
            _ => None,
        })
    }

    /// Load the full record
    pub fn load(&self, id: &str) -> Outcome<VersionRecord> {
        self.dispatch(Command::Load { id: id.to_string() }, |out| match out {
            Output::Record(record) => Some(*record),
            _ => None,
        })
    }

    /// List metadata matching `filter`, newest first
    pub fn list(&self, filter: &VersionFilter) -> Outcome<Vec<VersionMetadata>> {
        let cmd = Command::List {
            company: filter.company.clone(),
            tag: filter.tag.clone(),
            submitted_only: filter.submitted_only,
        };
        self.dispatch(cmd, |out| match out {
            Output::Versions(versions) => Some(versions),
            _ => None,
        })
    }

    /// Delete a version
    pub fn delete(&self, id: &str) -> Outcome<DeleteOutcome> {
        self.dispatch(Command::Delete { id: id.to_string() }, |out| match out {
            Output::Deleted(outcome) => Some(outcome),
            _ => None,
        })
    }

    /// Patch notes, tags or submission fields
    pub fn update_metadata(&self, id: &str, patch: MetadataPatch) -> Outcome<VersionMetadata> {
        let cmd = Command::UpdateMetadata {
            id: id.to_string(),
            patch,
        };
        self.dispatch(cmd, |out| match out {
            Output::Updated(meta) => Some(meta),
            _ => None,
        })
    }

    /// Compare version `b` against baseline `a`
    pub fn compare(&self, a: &str, b: &str) -> Outcome<VersionComparison> {
        let cmd = Command::Compare {
            a: a.to_string(),
            b: b.to_string(),
        };
        self.dispatch(cmd, |out| match out {
            Output::Comparison(cmp) => Some(*cmp),
            _ => None,
        })
    }

    // =========================================================================
    // Vault Operations
    // =========================================================================

    /// Count, size and freshness of stored versions
    pub fn storage_stats(&self) -> Outcome<StorageStats> {
        self.dispatch(Command::Stats, |out| match out {
            Output::Stats(stats) => Some(stats),
            _ => None,
        })
    }

    /// Re-add orphaned records to the index and drop stale entries
    pub fn reconcile(&self) -> Outcome<ReconcileReport> {
        self.dispatch(Command::Reconcile, |out| match out {
            Output::Reconciled(report) => Some(report),
            _ => None,
        })
    }

    /// Distinct tags in use, sorted
    pub fn all_tags(&self) -> Outcome<Vec<String>> {
        self.dispatch(Command::Tags, |out| match out {
            Output::Tags(tags) => Some(tags),
            _ => None,
        })
    }

    fn dispatch<T>(&self, cmd: Command, pick: impl FnOnce(Output) -> Option<T>) -> Outcome<T> {
        let name = cmd.name();
        let outcome = self.executor.run(cmd);
        if !outcome.success {
            return Outcome {
                success: false,
                value: None,
                message: outcome.message,
                error_kind: outcome.error_kind,
            };
        }
        match outcome.value.and_then(pick) {
            Some(value) => Outcome::ok(value, outcome.message),
            None => Outcome::failed(&Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}
