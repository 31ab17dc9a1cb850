//! Output module for local pipeline artifacts
//!
//! This module handles:
//! - Building the per-crawl manifest
//! - Writing and reading documents and chunks as JSON Lines
//! - Writing and reading the manifest as JSON

mod jsonl;
mod manifest;

pub use jsonl::{read_jsonl, read_manifest, write_jsonl, write_manifest};
pub use manifest::{Manifest, ManifestPage};
