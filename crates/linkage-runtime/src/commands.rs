//! # Commands
//!
//! One function per CLI subcommand. Each takes resolved configuration and
//! key material so it can run without touching the process environment.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rl_01_bloom_encoding::{BloomFilterKeys, EncodingConfig, RecordEncodingService};
use rl_02_record_linkage::{LinkageService, MatchedPerson, Person, RecordLinkageApi};
use rl_03_pseudonyms::{PseudonymGenerator, PseudonymizationApi, ResearchStudyKey};
use shared_types::{OrganizationId, TransferBatch};
use tracing::{info, instrument, warn};

use crate::adapters::{read_json, write_json, JsonIdatFile};
use crate::config::RuntimeConfig;

/// Pseudonym settings of a linkage run.
pub struct PseudonymSettings<'a> {
    pub research_study_id: &'a str,
    pub key: &'a ResearchStudyKey,
}

/// Outcome of a linkage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSummary {
    pub organizations: usize,
    pub persons: usize,
    pub clusters: usize,
}

/// Encode the identifying data in `input` and write the transfer batch.
///
/// `keys` is required by keyed hashers and, when present, supplies the
/// permutation seed.
#[instrument(skip_all, fields(organization = %organization))]
pub fn encode(
    config: &RuntimeConfig,
    keys: Option<&BloomFilterKeys>,
    organization: &OrganizationId,
    input: &Path,
    output: &Path,
    include_local_ids: bool,
) -> Result<TransferBatch> {
    let encoding = encoding_config(&config.encoding, keys);
    let service = RecordEncodingService::new(encoding, keys)
        .context("Failed to configure the record encoder")?;

    let records = service
        .encode_provider(&JsonIdatFile::new(input), organization, include_local_ids)
        .context("Failed to encode identifying data")?;
    let batch = TransferBatch::new(service.record_length(), records);

    write_json(output, &batch)?;
    info!(
        records = batch.len(),
        record_length = batch.record_length,
        output = %output.display(),
        "Transfer batch written"
    );
    Ok(batch)
}

/// Encoding configuration with the permutation seed of `keys` applied.
pub fn encoding_config(config: &EncodingConfig, keys: Option<&BloomFilterKeys>) -> EncodingConfig {
    let Some(keys) = keys else {
        return config.clone();
    };
    let seed = keys.permutation_seed();
    if config.permutation_seed != 0 && config.permutation_seed != seed {
        warn!("Configured permutationSeed ignored, using the seed from the Bloom filter keys");
    }
    config.clone().with_permutation_seed(seed)
}

/// Link the transfer batches in `inputs` and write clusters or pseudonyms.
///
/// A single batch is deduplicated; several batches are linked across
/// organizations.
#[instrument(skip_all, fields(inputs = inputs.len()))]
pub fn link(
    config: &RuntimeConfig,
    inputs: &[PathBuf],
    output: &Path,
    pseudonyms: Option<PseudonymSettings<'_>>,
) -> Result<LinkSummary> {
    if inputs.is_empty() {
        bail!("At least one transfer file is required");
    }

    let person_lists = load_person_lists(inputs)?;
    let persons = person_lists.iter().map(Vec::len).sum();
    let organizations = person_lists.len();

    let service =
        LinkageService::new(config.matching).context("Failed to configure the matcher")?;
    let clusters: Vec<MatchedPerson> = match person_lists.len() {
        1 => service.match_one(person_lists.into_iter().flatten().collect()),
        _ => service.match_federated(person_lists),
    };
    let summary = LinkSummary {
        organizations,
        persons,
        clusters: clusters.len(),
    };

    match pseudonyms {
        Some(settings) => {
            let generator = PseudonymGenerator::new(settings.research_study_id, settings.key);
            let pseudonymized = generator
                .create_pseudonyms_and_shuffle(&clusters)
                .context("Failed to create pseudonyms")?;
            write_json(output, &pseudonymized)?;
        }
        None => write_json(output, &clusters)?,
    }

    info!(
        organizations = summary.organizations,
        persons = summary.persons,
        clusters = summary.clusters,
        output = %output.display(),
        "Linkage result written"
    );
    Ok(summary)
}

fn load_person_lists(inputs: &[PathBuf]) -> Result<Vec<Vec<Person>>> {
    let mut record_length = None;
    let mut person_lists = Vec::with_capacity(inputs.len());

    for path in inputs {
        let batch: TransferBatch = read_json(path)?;
        match record_length {
            None => record_length = Some(batch.record_length),
            Some(expected) if expected != batch.record_length => bail!(
                "{} has record length {}, expected {}",
                path.display(),
                batch.record_length,
                expected
            ),
            Some(_) => {}
        }
        let persons = LinkageService::persons_from_transfer(&batch.records, batch.record_length)
            .with_context(|| format!("Invalid transfer record in {}", path.display()))?;
        person_lists.push(persons);
    }

    Ok(person_lists)
}
