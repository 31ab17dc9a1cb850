//! Object storage module
//!
//! This module handles pushing pipeline artifacts to a bucket:
//! - Building the Google Cloud Storage backend from configuration
//! - Uploading documents, chunks, and manifests under their configured keys

mod uploader;

pub use uploader::{UploadedArtifacts, Uploader};

use crate::config::{Config, GcpConfig};
use crate::PipelineError;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::ObjectStore;
use std::sync::Arc;

pub type DynStore = Arc<dyn ObjectStore>;

/// Builds a GCS-backed store for the configured bucket
///
/// Credentials come from the environment (service account variables or
/// application default credentials).
pub fn build_object_store(gcp: &GcpConfig) -> Result<DynStore, PipelineError> {
    let store = GoogleCloudStorageBuilder::from_env()
        .with_bucket_name(gcp.bucket())
        .build()?;

    tracing::debug!(
        "GCS store ready for project {} bucket {}",
        gcp.project_id,
        gcp.bucket()
    );
    Ok(Arc::new(store))
}

/// Builds an uploader targeting the configured bucket and key layout
pub fn uploader_from_config(config: &Config) -> Result<Uploader, PipelineError> {
    let store = build_object_store(&config.gcp)?;
    Ok(Uploader::new(
        store,
        config.gcp.bucket(),
        config.gcs_paths.clone(),
    ))
}
