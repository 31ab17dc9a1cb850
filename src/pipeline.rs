//! Sequential crawl → extract → chunk → upload pipeline
//!
//! Each stage writes its artifact to disk before the next stage starts, so
//! artifacts from completed stages survive a later failure.

use crate::chunk::Chunker;
use crate::config::{Config, OutputConfig};
use crate::crawler;
use crate::extract::Extractor;
use crate::output::{write_jsonl, write_manifest, Manifest};
use crate::storage::{uploader_from_config, UploadedArtifacts, Uploader};
use crate::Result;
use std::path::{Path, PathBuf};

/// Counts and artifact locations of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub pages_crawled: usize,
    pub documents: usize,
    pub chunks: usize,
    pub manifest_path: PathBuf,
    pub docs_path: PathBuf,
    pub chunks_path: PathBuf,
    /// Set when artifacts were uploaded
    pub uploaded: Option<UploadedArtifacts>,
}

impl PipelineSummary {
    pub fn log(&self) {
        match &self.uploaded {
            Some(uploaded) => {
                tracing::info!("Pipeline complete. Artifacts uploaded:");
                tracing::info!("  docs: {}", uploaded.docs);
                tracing::info!("  chunks: {}", uploaded.chunks);
                tracing::info!("  manifest: {}", uploaded.manifest);
            }
            None => {
                tracing::info!("Pipeline complete (skipped upload). Local files:");
                tracing::info!("  manifest: {}", self.manifest_path.display());
                tracing::info!("  docs: {}", self.docs_path.display());
                tracing::info!("  chunks: {}", self.chunks_path.display());
            }
        }

        tracing::info!("Summary:");
        tracing::info!("  pages crawled: {}", self.pages_crawled);
        tracing::info!("  documents: {}", self.documents);
        tracing::info!("  chunks: {}", self.chunks);
    }
}

fn stage_banner(step: usize, name: &str) {
    tracing::info!("{}", "=".repeat(60));
    tracing::info!("Step {}: {}", step, name);
    tracing::info!("{}", "=".repeat(60));
}

/// Runs the full pipeline
///
/// Crawl, extraction, and chunking recover from per-item failures. Upload
/// failures are returned as errors.
pub async fn run_pipeline(config: &Config, skip_upload: bool) -> Result<PipelineSummary> {
    tracing::info!("Starting docs crawler pipeline");

    let mut summary = run_local_stages(config).await?;

    if !skip_upload {
        stage_banner(4, "Uploading");
        let uploader = uploader_from_config(config)?;
        summary.uploaded = Some(upload_stage(&uploader, &config.output).await?);
    }

    summary.log();
    Ok(summary)
}

/// Runs crawl, extraction, and chunking, writing each stage's artifact
pub async fn run_local_stages(config: &Config) -> Result<PipelineSummary> {
    let manifest_path = PathBuf::from(&config.output.manifest_file);
    let docs_path = PathBuf::from(&config.output.raw_docs_file);
    let chunks_path = PathBuf::from(&config.output.chunks_file);

    stage_banner(1, "Crawling");
    let outcome = crawler::crawl(&config.crawler).await?;
    write_manifest(&manifest_path, &Manifest::from_crawl(&outcome))?;

    stage_banner(2, "Extracting");
    let docs = Extractor::new(config.extraction.clone()).extract(outcome.pages());
    write_jsonl(&docs_path, &docs)?;

    stage_banner(3, "Chunking");
    let chunks = Chunker::new(config.chunking.clone()).chunk(&docs);
    write_jsonl(&chunks_path, &chunks)?;

    Ok(PipelineSummary {
        pages_crawled: outcome.pages().len(),
        documents: docs.len(),
        chunks: chunks.len(),
        manifest_path,
        docs_path,
        chunks_path,
        uploaded: None,
    })
}

/// Uploads the local artifacts named in the output configuration
pub async fn upload_stage(
    uploader: &Uploader,
    output: &OutputConfig,
) -> Result<UploadedArtifacts> {
    uploader
        .upload(
            Path::new(&output.raw_docs_file),
            Path::new(&output.chunks_file),
            Path::new(&output.manifest_file),
        )
        .await
}
