//! linkage-runtime - privacy-preserving record linkage
//!
//! Logs go to stderr; `keygen` prints its key material to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linkage_runtime::commands::{self, PseudonymSettings};
use linkage_runtime::secrets::{
    bloom_filter_keys_from_env, research_study_key_from_env, GeneratedKeys,
};
use linkage_runtime::RuntimeConfig;
use linkage_telemetry::{init_tracing, TelemetryConfig};
use shared_types::OrganizationId;

/// linkage-runtime - privacy-preserving record linkage
#[derive(Parser, Debug)]
#[command(name = "linkage-runtime")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides RL_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Bloom filter keys and a research study key (hex, JSON on stdout)
    Keygen,

    /// Encode a data holder's identifying data into a transfer batch
    Encode {
        /// Organization id written into every transfer record
        #[arg(long)]
        organization: String,

        /// Identifying data file: [{"localId": ..., "idat": {...}}]
        #[arg(short, long)]
        input: PathBuf,

        /// Transfer batch output file
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Leave local ids out of the transfer records
        #[arg(long)]
        drop_local_ids: bool,
    },

    /// Link transfer batches of one or more organizations
    Link {
        /// Transfer batch files, one per organization
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Cluster (or pseudonym) output file
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Research study id; emits pseudonyms encrypted under RL_RESEARCH_STUDY_KEY
        #[arg(long)]
        study_id: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = cli.log_level {
        telemetry = telemetry.with_log_level(level);
    }
    init_tracing(&telemetry).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Keygen => {
            let keys = GeneratedKeys::generate();
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        Commands::Encode {
            organization,
            input,
            output,
            config,
            drop_local_ids,
        } => {
            let config = RuntimeConfig::load(config.as_deref())?;
            let keys = if config.encoding.hasher.is_keyed() {
                Some(bloom_filter_keys_from_env()?)
            } else {
                None
            };
            commands::encode(
                &config,
                keys.as_ref(),
                &OrganizationId::new(organization),
                &input,
                &output,
                !drop_local_ids,
            )?;
        }
        Commands::Link {
            input,
            output,
            config,
            study_id,
        } => {
            let config = RuntimeConfig::load(config.as_deref())?;
            match study_id {
                Some(research_study_id) => {
                    let key = research_study_key_from_env()?;
                    commands::link(
                        &config,
                        &input,
                        &output,
                        Some(PseudonymSettings {
                            research_study_id: &research_study_id,
                            key: &key,
                        }),
                    )?;
                }
                None => {
                    commands::link(&config, &input, &output, None)?;
                }
            }
        }
    }

    Ok(())
}
