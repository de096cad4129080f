//! The manual page index: a JSON array of `{file, page, text}` records.

use std::collections::BTreeMap;
use std::path::Path;

use monograph_core::{Error, IndexedPage, Result, RuleSet, SearchResult};
use tracing::info;

use crate::search::{PassageRetrievalEngine, SearchOptions};

/// Parse the index JSON. Every record must carry `file`, `page` and `text`.
pub fn parse_index(json: &str) -> Result<Vec<IndexedPage>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let records = value
        .as_array()
        .ok_or_else(|| Error::InvalidRecord("index is not a JSON array".into()))?;
    records
        .iter()
        .enumerate()
        .map(|(i, record)| IndexedPage::from_value(record, i))
        .collect()
}

/// Page count per manual file, sorted by file name.
pub fn manual_page_counts(pages: &[IndexedPage]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for page in pages {
        *counts.entry(page.file.as_str()).or_default() += 1;
    }
    counts.into_iter().map(|(file, n)| (file.to_string(), n)).collect()
}

/// A loaded, read-only page index.
#[derive(Debug, Clone, Default)]
pub struct ManualIndex {
    pages: Vec<IndexedPage>,
}

impl ManualIndex {
    pub fn new(pages: Vec<IndexedPage>) -> Self {
        Self { pages }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        parse_index(json).map(Self::new)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let index = Self::from_json(&json)?;
        info!("Loaded {} manual pages from {}", index.len(), path.display());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_counts(&self) -> Vec<(String, usize)> {
        manual_page_counts(&self.pages)
    }

    pub fn search(&self, question: &str, max_results: usize, rules: &RuleSet) -> Result<Vec<SearchResult>> {
        PassageRetrievalEngine::new(rules)
            .with_options(SearchOptions::default().with_max_results(max_results))
            .search(question, &self.pages)
    }
}
