//! JSON file adapters
//!
//! Identifying data is read from `[{"localId": ..., "idat": {...}}]` files.
//! Transfer batches, clusters and pseudonyms are written as pretty JSON.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rl_01_bloom_encoding::{EncodingError, IdatProvider, LocalIdat};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Identifying data provider backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonIdatFile {
    path: PathBuf,
}

impl JsonIdatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdatProvider for JsonIdatFile {
    fn load_idats(&self) -> Result<Vec<LocalIdat>, EncodingError> {
        let file = File::open(&self.path).map_err(|e| {
            EncodingError::Provider(format!("{}: {}", self.path.display(), e))
        })?;
        // Parse errors carry positions only, never field values.
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            EncodingError::Provider(format!(
                "{}: invalid identifying data at line {} column {}",
                self.path.display(),
                e.line(),
                e.column()
            ))
        })
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}
