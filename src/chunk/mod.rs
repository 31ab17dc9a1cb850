//! Chunking module
//!
//! Splits each document's sections into token-bounded chunks for retrieval
//! indexing. Chunk IDs derive from the document ID and the chunk's position,
//! so unchanged input always produces the same IDs.

mod splitter;

pub use splitter::{estimate_tokens, overlap_len, split_text};

use crate::config::ChunkingConfig;
use crate::extract::{CodeBlock, Document, Section};
use crate::PipelineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A retrieval-ready unit of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub chunk_id: String,
    pub doc_id: String,
    pub url: String,
    pub title: String,
    pub heading_path: Vec<String>,
    pub text: String,
    pub code_blocks: Vec<CodeBlock>,
    pub source_type: String,
    pub last_crawled_at: DateTime<Utc>,
}

/// Computes a chunk ID from its document ID and chunk index
///
/// The index is `"{section}"` for a whole section or `"{section}-{sub}"`
/// for a piece of a split section.
pub fn chunk_id_for(doc_id: &str, chunk_index: &str) -> String {
    hex::encode(Sha256::digest(format!("{}-{}", doc_id, chunk_index).as_bytes()))
}

/// Converts documents into chunks
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    /// Character budget for one chunk
    pub fn max_chars(&self) -> usize {
        self.config.max_chunk_tokens.saturating_mul(4)
    }

    /// Chunks every document, skipping any that fail
    pub fn chunk(&self, docs: &[Document]) -> Vec<Chunk> {
        tracing::info!("Chunking {} documents", docs.len());

        let mut chunks = Vec::new();
        for doc in docs {
            match self.chunk_document(doc) {
                Ok(doc_chunks) => chunks.extend(doc_chunks),
                Err(e) => tracing::error!("{}", e),
            }
        }

        tracing::info!("Created {} chunks", chunks.len());
        chunks
    }

    /// Chunks one document, preserving section order
    pub fn chunk_document(&self, doc: &Document) -> Result<Vec<Chunk>, PipelineError> {
        if doc.doc_id.trim().is_empty() {
            return Err(PipelineError::Chunking {
                url: doc.url.clone(),
                message: "document has no doc_id".to_string(),
            });
        }

        let mut chunks = Vec::new();

        for (idx, section) in doc.sections.iter().enumerate() {
            let text = section.text.trim();
            if text.is_empty() || text.chars().count() < self.config.min_section_chars {
                continue;
            }

            if estimate_tokens(text) > self.config.max_chunk_tokens {
                for (sub_idx, piece) in split_text(text, self.max_chars()).into_iter().enumerate()
                {
                    let index = format!("{}-{}", idx, sub_idx);
                    chunks.push(build_chunk(doc, section, piece, &index));
                }
            } else {
                chunks.push(build_chunk(doc, section, text.to_string(), &idx.to_string()));
            }
        }

        tracing::debug!("{} -> {} chunks", doc.url, chunks.len());
        Ok(chunks)
    }
}

fn build_chunk(doc: &Document, section: &Section, text: String, chunk_index: &str) -> Chunk {
    Chunk {
        chunk_id: chunk_id_for(&doc.doc_id, chunk_index),
        doc_id: doc.doc_id.clone(),
        url: doc.url.clone(),
        title: doc.title.clone(),
        heading_path: section.heading_path.clone(),
        text,
        code_blocks: section.code_blocks.clone(),
        source_type: doc.source_type.clone(),
        last_crawled_at: doc.last_crawled_at,
    }
}
