//! Persistent summary cache keyed by a hash of the product name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use monograph_core::FormatKind;
use monograph_extract::NarrativeSummary;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

/// Cache key for a product name: SHA-256, hex.
pub fn cache_key(product: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(product.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSummary {
    pub product: String,
    pub format: FormatKind,
    /// Rendered HTML blocks.
    pub blocks: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl CachedSummary {
    pub fn from_summary(product: &str, summary: &NarrativeSummary) -> Self {
        Self {
            product: product.to_string(),
            format: summary.format,
            blocks: summary.rendered(),
            generated_at: Utc::now(),
        }
    }

    pub fn joined(&self) -> String {
        self.blocks.join(" ")
    }
}

/// Where generated summaries are kept between runs.
pub trait SummaryStore {
    fn get(&self, product: &str) -> Option<&CachedSummary>;
    fn put(&mut self, entry: CachedSummary) -> std::io::Result<()>;
}

/// The whole cache as one pretty-printed JSON object on disk.
#[derive(Debug)]
pub struct JsonSummaryCache {
    path: PathBuf,
    entries: BTreeMap<String, CachedSummary>,
}

impl JsonSummaryCache {
    /// Open the cache file. Missing or unreadable files start empty.
    pub fn load(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!("Ignoring corrupt summary cache {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn save(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.path, json)?;
        info!("Saved {} cached summaries to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl SummaryStore for JsonSummaryCache {
    fn get(&self, product: &str) -> Option<&CachedSummary> {
        self.entries.get(&cache_key(product))
    }

    fn put(&mut self, entry: CachedSummary) -> std::io::Result<()> {
        self.entries.insert(cache_key(&entry.product), entry);
        self.save()
    }
}
