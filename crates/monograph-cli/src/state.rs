//! Data locations and the command implementations that use them.

use std::path::{Path, PathBuf};

use anyhow::Context;
use monograph_core::{Error, RuleSet};
use monograph_extract::summarize;
use monograph_retrieve::{format_answer, format_excerpts, manual_name, ManualIndex};
use tracing::{debug, info, warn};

use crate::cache::{CachedSummary, JsonSummaryCache, SummaryStore};
use crate::corpus::ProductCorpus;
use crate::filter::{HeuristicProductFilter, ProductFilter};
use crate::review::ProductReview;

pub const NOT_UNDERSTOOD: &str =
    "I couldn't pick out anything to search for in that question. Try naming a product, nutrient or condition.";

/// Files under the data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
    /// Product corpus (`pages.json`).
    pub pages: PathBuf,
    /// Manual page index (`manuals_index.json`).
    pub manuals_index: PathBuf,
    /// Generated summaries (`summary_cache.json`).
    pub summary_cache: PathBuf,
    /// Optional rule table override (`rules.json`).
    pub rules: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            pages: root.join("pages.json"),
            manuals_index: root.join("manuals_index.json"),
            summary_cache: root.join("summary_cache.json"),
            rules: root.join("rules.json"),
            root,
        }
    }
}

pub struct AppState {
    pub paths: DataPaths,
    pub rules: RuleSet,
}

impl AppState {
    /// Built-in rules unless the data directory carries its own table.
    pub fn new(paths: DataPaths) -> Self {
        let rules = if paths.rules.exists() {
            info!("Using rule table {}", paths.rules.display());
            RuleSet::load(&paths.rules)
        } else {
            RuleSet::default()
        };
        Self { paths, rules }
    }

    fn corpus(&self) -> anyhow::Result<ProductCorpus> {
        ProductCorpus::open(&self.paths.pages)
    }

    fn index(&self) -> anyhow::Result<ManualIndex> {
        ManualIndex::open(&self.paths.manuals_index)
            .with_context(|| format!("Manual index unreadable at {}", self.paths.manuals_index.display()))
    }

    /// Product names, or every corpus name with `all`.
    pub fn products(&self, all: bool) -> anyhow::Result<Vec<String>> {
        let corpus = self.corpus()?;
        let names = corpus.names();
        if all {
            return Ok(names.into_iter().map(String::from).collect());
        }
        Ok(HeuristicProductFilter.products(&names))
    }

    /// Cached summary for a product, generating and storing it on a miss.
    pub fn summary(&self, typed: &str, refresh: bool) -> anyhow::Result<String> {
        let corpus = self.corpus()?;
        let names: Vec<String> = corpus.names().into_iter().map(String::from).collect();
        let Some(product) = corpus.resolve(typed, &names) else {
            return Ok(format!("No data found for {typed}"));
        };

        let mut cache = JsonSummaryCache::load(&self.paths.summary_cache);
        if !refresh {
            if let Some(hit) = cache.get(product) {
                return Ok(hit.joined());
            }
        }

        debug!("Summary cache miss for {:?} ({} cached)", product, cache.len());
        let chunks = corpus.chunks(product).unwrap_or_default();
        let summary = summarize(chunks, Some(product), &self.rules);
        let entry = CachedSummary::from_summary(product, &summary);
        let joined = entry.joined();
        if let Err(e) = cache.put(entry) {
            warn!("Could not write summary cache: {}", e);
        }
        Ok(joined)
    }

    /// Answer a question over the manual index: highlighted excerpts, or
    /// with `brief` just the cited snippets.
    pub fn ask(&self, question: &str, max_results: usize, brief: bool) -> anyhow::Result<String> {
        let index = self.index()?;
        match index.search(question, max_results, &self.rules) {
            Ok(results) if brief => Ok(format_answer(&results)),
            Ok(results) => Ok(format_excerpts(&results)),
            Err(Error::NoKeywords(_)) => Ok(NOT_UNDERSTOOD.to_string()),
            Err(e) => Err(e.into()),
        }
    }

    /// One line per manual with its page count.
    pub fn manuals(&self) -> anyhow::Result<Vec<String>> {
        let index = self.index()?;
        Ok(index
            .page_counts()
            .into_iter()
            .map(|(file, pages)| format!("{} ({} pages)", manual_name(&file), pages))
            .collect())
    }

    /// Fresh summaries of every product, checked for quality problems.
    pub fn review(&self) -> anyhow::Result<Vec<ProductReview>> {
        let corpus = self.corpus()?;
        let products = HeuristicProductFilter.products(&corpus.names());
        Ok(products
            .iter()
            .map(|p| {
                let chunks = corpus.chunks(p).unwrap_or_default();
                ProductReview::of(p, &summarize(chunks, Some(p.as_str()), &self.rules))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: &str = r#"[
        {"product": "Eye Defense", "text": "Clinical Applications:\n• Dry eye\n• Eye strain\n\nRecommendations: 2 capsules daily with a meal."},
        {"product": "Spring Newsletter", "text": "News."}
    ]"#;

    const MANUALS: &str = r#"[
        {"file": "Vitamin_D_Protocols.pdf", "page": 1, "text": "The usual dosage is 1000 IU daily."},
        {"file": "Vitamin_D_Protocols.pdf", "page": 2, "text": "Monitoring."}
    ]"#;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pages.json"), PAGES).unwrap();
        std::fs::write(dir.path().join("manuals_index.json"), MANUALS).unwrap();
        let state = AppState::new(DataPaths::new(dir.path()));
        (dir, state)
    }

    #[test]
    fn test_products_filtered() {
        let (_dir, state) = state();
        assert_eq!(state.products(false).unwrap(), vec!["Eye Defense"]);
        assert_eq!(state.products(true).unwrap().len(), 2);
    }

    #[test]
    fn test_summary_is_cached() {
        let (dir, state) = state();
        let first = state.summary("eye defense", false).unwrap();
        assert!(first.contains("<strong>What conditions:</strong> Dry eye and eye strain."));
        assert!(dir.path().join("summary_cache.json").exists());

        let cached = JsonSummaryCache::load(&state.paths.summary_cache);
        assert_eq!(cached.get("Eye Defense").unwrap().joined(), first);
        assert_eq!(state.summary("Eye Defense", false).unwrap(), first);
    }

    #[test]
    fn test_unknown_product() {
        let (_dir, state) = state();
        assert_eq!(state.summary("qqqq", false).unwrap(), "No data found for qqqq");
    }

    #[test]
    fn test_ask_and_manuals() {
        let (_dir, state) = state();
        let answer = state.ask("vitamin dosage", 3, true).unwrap();
        assert!(answer.contains("**1. Vitamin D Protocols (Page 1)**"));
        assert_eq!(state.ask("what is it", 3, false).unwrap(), NOT_UNDERSTOOD);
        assert_eq!(state.manuals().unwrap(), vec!["Vitamin D Protocols (2 pages)"]);
    }

    #[test]
    fn test_missing_index_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(DataPaths::new(dir.path()));
        assert!(state.ask("zinc", 3, false).is_err());
    }

    #[test]
    fn test_ask_highlights_keywords_in_excerpts() {
        let (_dir, state) = state();
        let answer = state.ask("vitamin dosage", 3, false).unwrap();
        assert!(answer.starts_with("**Found 1 relevant page(s):**"));
        assert!(answer.contains("Key excerpt: The usual **dosage** is 1000 IU daily\n"));
        assert!(answer.contains("Context: The usual **dosage** is 1000 IU daily.\n"));
    }
}
