//! Keyword-frequency page ranking.

use monograph_core::{Error, IndexedPage, Result, RuleSet, SearchResult};
use tracing::debug;

use crate::keywords::extract_keywords;
use crate::passages::{
    best_snippet, context_window, keyword_hits, DEFAULT_CONTEXT_WINDOW, DEFAULT_SNIPPET_WORDS,
};

pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Knobs for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_results: usize,
    pub snippet_words: usize,
    pub context_window: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            snippet_words: DEFAULT_SNIPPET_WORDS,
            context_window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

impl SearchOptions {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Passage retrieval over an in-memory page list.
pub struct PassageRetrievalEngine<'a> {
    rules: &'a RuleSet,
    options: SearchOptions,
}

impl<'a> PassageRetrievalEngine<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Rank `pages` for `question`.
    ///
    /// A page scores the summed substring occurrences of every keyword in
    /// its lowercased text; zero-score pages are dropped and ties keep
    /// index order. A question with no usable keywords is an error, which
    /// callers should report differently from an empty result.
    pub fn search(&self, question: &str, pages: &[IndexedPage]) -> Result<Vec<SearchResult>> {
        let keywords = extract_keywords(question, self.rules);
        if keywords.is_empty() {
            return Err(Error::NoKeywords(question.to_string()));
        }

        let mut scored: Vec<(u32, &IndexedPage)> = pages
            .iter()
            .filter_map(|page| {
                let score = keyword_hits(&page.text.to_lowercase(), &keywords);
                (score > 0).then_some((score, page))
            })
            .collect();
        let matched = scored.len();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.options.max_results);

        let results: Vec<SearchResult> = scored
            .into_iter()
            .map(|(score, page)| SearchResult {
                file: page.file.clone(),
                page: page.page,
                text: page.text.clone(),
                snippet: best_snippet(&page.text, &keywords, self.options.snippet_words),
                context: context_window(&page.text, &keywords, self.options.context_window),
                keywords: keywords.clone(),
                score,
            })
            .collect();

        debug!(
            "Search {:?}: keywords={:?}, {} of {} pages matched, returning {}",
            question,
            keywords,
            matched,
            pages.len(),
            results.len()
        );
        Ok(results)
    }
}

/// One-shot search with default snippet and context sizes.
pub fn search(
    question: &str,
    pages: &[IndexedPage],
    max_results: usize,
    rules: &RuleSet,
) -> Result<Vec<SearchResult>> {
    PassageRetrievalEngine::new(rules)
        .with_options(SearchOptions::default().with_max_results(max_results))
        .search(question, pages)
}
