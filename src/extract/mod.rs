//! HTML extraction module
//!
//! Turns each crawled page into a [`Document`] of heading-segmented
//! sections with code blocks kept apart from the prose.

mod document;
mod walker;

pub use document::{CodeBlock, Document, Section};
pub use walker::DEFAULT_LANGUAGE;

use crate::config::ExtractionConfig;
use crate::crawler::Page;
use crate::PipelineError;
use scraper::{Html, Selector};
use walker::SectionCollector;

/// Converts pages into documents
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractionConfig,
    body: Selector,
}

impl Extractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            body: Selector::parse("body").expect("body selector"),
        }
    }

    /// Extracts every page, skipping pages that fail or yield no content
    ///
    /// Output order follows input order.
    pub fn extract(&self, pages: &[Page]) -> Vec<Document> {
        tracing::info!("Extracting content from {} pages", pages.len());

        let docs: Vec<Document> = pages
            .iter()
            .filter_map(|page| match self.extract_page(page) {
                Ok(Some(doc)) => Some(doc),
                Ok(None) => {
                    tracing::warn!("No content extracted from {}", page.url);
                    None
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    None
                }
            })
            .collect();

        tracing::info!("Extracted {} documents", docs.len());
        docs
    }

    /// Extracts a single page
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Document))` - at least one section carried content
    /// * `Ok(None)` - the page had no content-bearing sections
    /// * `Err(PipelineError::Extraction)` - the page body was empty
    pub fn extract_page(&self, page: &Page) -> Result<Option<Document>, PipelineError> {
        if page.raw_html.trim().is_empty() {
            return Err(PipelineError::Extraction {
                url: page.url.clone(),
                message: "empty HTML body".to_string(),
            });
        }

        let html = Html::parse_document(&page.raw_html);
        let root = html
            .select(&self.body)
            .next()
            .unwrap_or_else(|| html.root_element());

        let mut collector =
            SectionCollector::new(self.config.min_content_length, self.config.nested_headings);
        collector.walk(root);
        let sections = collector.finish();

        if sections.is_empty() {
            return Ok(None);
        }

        Ok(Some(Document {
            doc_id: page.doc_id.clone(),
            url: page.url.clone(),
            title: page.title.clone(),
            sections,
            last_crawled_at: page.last_crawled_at,
            source_type: self.config.source_type.clone(),
        }))
    }
}
