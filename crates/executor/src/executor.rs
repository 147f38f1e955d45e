//! The command executor.

use crate::handlers::{vault, version};
use crate::{Command, Outcome, Output, Result};
use tailor_engine::{StoreConfig, VersionStore};

/// Dispatches [`Command`]s to a [`VersionStore`]
#[derive(Debug)]
pub struct Executor {
    store: VersionStore,
}

impl Executor {
    /// Wrap an open store
    pub fn new(store: VersionStore) -> Self {
        Self { store }
    }

    /// Open the store described by `config`
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = VersionStore::open(config)?;
        Ok(Self::new(store))
    }

    /// The underlying store
    pub fn store(&self) -> &VersionStore {
        &self.store
    }

    /// Execute a command
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let store = &self.store;
        match cmd {
            Command::Save(req) => version::save(store, *req),
            Command::Load { id } => version::load(store, &id),
            Command::List {
                company,
                tag,
                submitted_only,
            } => version::list(store, company, tag, submitted_only),
            Command::Delete { id } => version::delete(store, &id),
            Command::UpdateMetadata { id, patch } => version::update_metadata(store, &id, &patch),
            Command::Compare { a, b } => version::compare(store, &a, &b),
            Command::Stats => vault::stats(store),
            Command::Reconcile => vault::reconcile(store),
            Command::Tags => vault::tags(store),
        }
    }

    /// Execute a command, folding any error into the outcome
    ///
    /// Failures are logged with the operation name and target id.
    pub fn run(&self, cmd: Command) -> Outcome<Output> {
        let name = cmd.name();
        let target = cmd.target();
        let result = self.execute(cmd);
        if let Err(e) = &result {
            tracing::warn!(
                target: "tailor::executor",
                operation = name,
                id = target.as_deref().unwrap_or("-"),
                kind = %e.kind(),
                error = %e,
                "Command failed"
            );
        }
        Outcome::from(result)
    }
}
