//! Product corpus: `pages.json` records of `{product, text}` grouped by
//! product name.

use std::collections::BTreeMap;
use std::path::Path;

use monograph_extract::rank_matches;
use serde::Deserialize;
use tracing::{debug, info};

/// Below this fuzzy score a typed name is not treated as a product.
const MIN_LOOKUP_SCORE: u32 = 60;

#[derive(Debug, Deserialize)]
struct PageRecord {
    product: String,
    text: String,
}

#[derive(Debug, Default)]
pub struct ProductCorpus {
    products: BTreeMap<String, Vec<String>>,
}

impl ProductCorpus {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let records: Vec<PageRecord> = serde_json::from_str(json)?;
        let mut products: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for record in records {
            products.entry(record.product).or_default().push(record.text);
        }
        Ok(Self { products })
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let corpus = Self::from_json(&json)?;
        info!("Loaded {} products from {}", corpus.products.len(), path.display());
        Ok(corpus)
    }

    /// Every name in the corpus, sorted, newsletters and manuals included.
    pub fn names(&self) -> Vec<&str> {
        self.products.keys().map(String::as_str).collect()
    }

    pub fn chunks(&self, name: &str) -> Option<&[String]> {
        self.products.get(name).map(Vec::as_slice)
    }

    /// Exact name, else the best fuzzy match among `candidates`.
    pub fn resolve<'a>(&self, typed: &str, candidates: &'a [String]) -> Option<&'a str> {
        if let Some(exact) = candidates.iter().find(|c| c.as_str() == typed) {
            return Some(exact.as_str());
        }
        let best = rank_matches(typed, candidates, 1).into_iter().next()?;
        debug!("Fuzzy lookup {:?} -> {:?} ({})", typed, best.0, best.1);
        (best.1 >= MIN_LOOKUP_SCORE).then_some(best.0)
    }
}
