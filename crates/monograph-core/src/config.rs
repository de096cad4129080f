//! Rule tables consumed by the extractors and the retrieval engine.
//!
//! A `RuleSet` is built once at startup and passed by reference into every
//! call. The default table carries the tuned vocabularies; a rule file can
//! replace any of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Keyword and phrase tables driving the heuristics.
///
/// All matching against these lists is done on lowercased text, so phrases
/// are stored lowercase. The exception is `abbreviations`, which are
/// matched case-insensitively against the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Boilerplate phrase that marks the start of regulatory fine print.
    /// Text from this phrase onward is discarded by `clean`.
    #[serde(default)]
    pub disclaimer_marker: String,
    /// Abbreviations whose trailing period does not end a sentence.
    #[serde(default)]
    pub abbreviations: Vec<String>,
    /// Markers of a clinical guide, checked before newsletter markers.
    #[serde(default)]
    pub clinical_markers: Vec<String>,
    #[serde(default)]
    pub newsletter_markers: Vec<String>,
    /// A mechanism candidate containing any of these is discarded outright.
    #[serde(default)]
    pub kill_phrases: Vec<String>,
    /// +3 tier.
    #[serde(default)]
    pub strong_verbs: Vec<String>,
    /// +2 tier.
    #[serde(default)]
    pub biological_terms: Vec<String>,
    /// +1 tier.
    #[serde(default)]
    pub generic_verbs: Vec<String>,
    /// -2 penalty.
    #[serde(default)]
    pub fluff_phrases: Vec<String>,
    /// Question words ignored by keyword extraction.
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            disclaimer_marker: "The U.S. Food and Drug Administration".into(),
            abbreviations: owned(&[
                "Dr", "Mr", "Mrs", "Ms", "Ph", "B", "D", "O", "U", "S", "vs", "etc", "i.e", "e.g",
            ]),
            clinical_markers: owned(&["clinical guide", "clinical applications:"]),
            newsletter_markers: owned(&["newsletter", "better health news"]),
            kill_phrases: owned(&[
                "this product is not intended",
                "not intended to diagnose",
                "food and drug administration",
                "product specifications",
                "formulation details",
                "dosing protocols",
                "dosing protocol",
                "clinical guide",
                "product profile",
            ]),
            strong_verbs: owned(&[
                "accumulate", "block", "prevent", "protect", "reduce", "inhibit", "modulate",
                "addresses",
            ]),
            biological_terms: owned(&[
                "cellular",
                "mitochondrial",
                "oxidative",
                "retinal",
                "macular",
                "fovea",
                "pigment",
                "neurotransmitter",
                "enzyme",
                "proteolytic",
                "inflammatory",
                "adrenal",
                "hpa",
                "axis",
                "pituitary",
                "hypothalamus",
                "glandular",
            ]),
            generic_verbs: owned(&["support", "maintain", "improve", "enhance", "provide"]),
            fluff_phrases: owned(&["comprehensive", "professional", "advanced formulation"]),
            stop_words: owned(&[
                "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
                "is", "are", "was", "were", "what", "how", "why", "when", "where", "who", "which",
                "do", "does", "did", "can", "could", "should",
            ]),
        }
    }
}

impl RuleSet {
    /// A table with no rules at all. Every vocabulary-driven heuristic
    /// yields no match against it.
    pub fn empty() -> Self {
        Self {
            disclaimer_marker: String::new(),
            abbreviations: Vec::new(),
            clinical_markers: Vec::new(),
            newsletter_markers: Vec::new(),
            kill_phrases: Vec::new(),
            strong_verbs: Vec::new(),
            biological_terms: Vec::new(),
            generic_verbs: Vec::new(),
            fluff_phrases: Vec::new(),
            stop_words: Vec::new(),
        }
    }

    /// Parse a rule table from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("invalid rule table: {e}")))
    }

    /// Load a rule file. A missing or malformed file means no rules are
    /// available, not a startup failure.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                warn!("Rule table {} unavailable ({}); running without rules", path.display(), e);
                return Self::empty();
            }
        };
        match Self::from_json(&text) {
            Ok(rules) => {
                info!("Loaded rule table from {}", path.display());
                rules
            }
            Err(e) => {
                warn!("{}; running without rules", e);
                Self::empty()
            }
        }
    }
}
