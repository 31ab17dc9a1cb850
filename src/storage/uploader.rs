use crate::config::GcsPaths;
use crate::storage::DynStore;
use crate::PipelineError;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use object_store::path::Path as ObjPath;
use object_store::{ObjectStore, PutPayload};
use serde::Serialize;
use std::path::Path;

/// Fully-qualified locations of one upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedArtifacts {
    pub docs: String,
    pub chunks: String,
    pub manifest: String,
}

/// Pushes pipeline artifacts to object storage
///
/// Documents and chunks go to fixed keys and are overwritten on every run.
/// Each manifest gets its own timestamped key and is never overwritten.
pub struct Uploader {
    store: DynStore,
    bucket: String,
    paths: GcsPaths,
}

impl Uploader {
    pub fn new(store: DynStore, bucket: impl Into<String>, paths: GcsPaths) -> Self {
        let bucket = bucket.into();
        tracing::info!("Uploader initialized for bucket {}", bucket);
        Self {
            store,
            bucket,
            paths,
        }
    }

    /// Object key for a manifest uploaded at `at`
    pub fn manifest_key(&self, at: DateTime<Utc>) -> String {
        format!(
            "{}crawl-manifest-{}.json",
            self.paths.manifests,
            at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Uploads the three local artifact files, stamping the manifest with the current time
    pub async fn upload(
        &self,
        local_docs: &Path,
        local_chunks: &Path,
        local_manifest: &Path,
    ) -> Result<UploadedArtifacts, PipelineError> {
        self.upload_at(local_docs, local_chunks, local_manifest, Utc::now())
            .await
    }

    /// Uploads the three local artifact files with an explicit manifest timestamp
    ///
    /// Any failure aborts the upload and is returned to the caller.
    pub async fn upload_at(
        &self,
        local_docs: &Path,
        local_chunks: &Path,
        local_manifest: &Path,
        at: DateTime<Utc>,
    ) -> Result<UploadedArtifacts, PipelineError> {
        tracing::info!("Uploading artifacts to gs://{}", self.bucket);

        let docs = self.upload_file(local_docs, &self.paths.raw_docs).await?;
        let chunks = self.upload_file(local_chunks, &self.paths.chunks).await?;
        let manifest = self
            .upload_file(local_manifest, &self.manifest_key(at))
            .await?;

        tracing::info!("Upload complete");
        Ok(UploadedArtifacts {
            docs,
            chunks,
            manifest,
        })
    }

    async fn upload_file(&self, local_path: &Path, key: &str) -> Result<String, PipelineError> {
        let data = tokio::fs::read(local_path).await?;
        let location = ObjPath::from(key);
        let payload = PutPayload::from_bytes(Bytes::from(data));
        self.store.put(&location, payload).await?;

        let uri = format!("gs://{}/{}", self.bucket, key);
        tracing::info!("  {} -> {}", local_path.display(), uri);
        Ok(uri)
    }
}
