//! Local artifact files: JSON Lines for documents and chunks, JSON for the manifest

use crate::output::Manifest;
use crate::PipelineError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn ensure_parent(path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Writes one JSON object per line, replacing any existing file
///
/// Returns the number of records written.
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<usize, PipelineError> {
    ensure_parent(path)?;

    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    tracing::info!("Saved {} records to {}", records.len(), path.display());
    Ok(records.len())
}

/// Reads a JSON Lines file, skipping blank lines
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PipelineError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }

    Ok(records)
}

/// Writes the manifest as pretty-printed JSON
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), PipelineError> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    tracing::info!("Saved manifest to {}", path.display());
    Ok(())
}

pub fn read_manifest(path: &Path) -> Result<Manifest, PipelineError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
