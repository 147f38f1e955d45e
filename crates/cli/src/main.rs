//! tailor - command-line access to a résumé version vault

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tailor_core::MetadataPatch;
use tailor_engine::{default_storage_dir, StoreConfig};
use tailor_executor::{Command, Executor, Output};

mod render;

#[derive(Parser)]
#[command(name = "tailor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Vault directory (defaults to $TAILOR_VAULT_DIR or ~/resume_tailor_versions)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved versions, newest first
    List {
        /// Company name contains this text (case-insensitive)
        #[arg(short, long)]
        company: Option<String>,

        /// Has this exact tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only versions marked as submitted
        #[arg(short, long)]
        submitted: bool,
    },

    /// Show one version
    Show {
        /// Version id
        id: String,
    },

    /// Delete a version
    Delete {
        /// Version id
        id: String,
    },

    /// Change notes, tags or submission tracking
    Annotate {
        /// Version id
        id: String,

        /// Replace notes
        #[arg(long)]
        notes: Option<String>,

        /// Replace tags (repeat for several)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        /// Mark as submitted (true/false)
        #[arg(long)]
        submitted: Option<bool>,

        /// Submission date
        #[arg(long)]
        submitted_date: Option<String>,

        /// Whether a response was received (true/false)
        #[arg(long)]
        response: Option<bool>,
    },

    /// Compare version B against baseline A
    Compare {
        /// Baseline version id
        a: String,
        /// Candidate version id
        b: String,
    },

    /// Storage statistics
    Stats,

    /// Repair the index from the record files
    Reconcile,

    /// List tags in use
    Tags,
}

impl Commands {
    fn into_command(self) -> Command {
        match self {
            Commands::List {
                company,
                tag,
                submitted,
            } => Command::List {
                company,
                tag,
                submitted_only: submitted,
            },
            Commands::Show { id } => Command::Load { id },
            Commands::Delete { id } => Command::Delete { id },
            Commands::Annotate {
                id,
                notes,
                tags,
                clear_tags,
                submitted,
                submitted_date,
                response,
            } => {
                let tags = if clear_tags {
                    Some(Vec::new())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(tags)
                };
                Command::UpdateMetadata {
                    id,
                    patch: MetadataPatch {
                        notes,
                        tags,
                        is_submitted: submitted,
                        submitted_date,
                        response_received: response,
                    },
                }
            }
            Commands::Compare { a, b } => Command::Compare { a, b },
            Commands::Stats => Command::Stats,
            Commands::Reconcile => Command::Reconcile,
            Commands::Tags => Command::Tags,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let dir = cli.dir.unwrap_or_else(default_storage_dir);
    tracing::debug!(target: "tailor::cli", dir = %dir.display(), "Opening vault");
    let executor = match StoreConfig::load(&dir)
        .map_err(tailor_executor::Error::from)
        .and_then(Executor::open)
    {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("error: cannot open vault at {}: {}", dir.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = executor.run(cli.command.into_command());
    match outcome.value {
        Some(output) if outcome.success => {
            print!("{}", render::output(&output));
            if matches!(output, Output::Deleted(_) | Output::Updated(_) | Output::Reconciled(_)) {
                println!("{}", outcome.message);
            }
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("error: {}", outcome.message);
            ExitCode::FAILURE
        }
    }
}
