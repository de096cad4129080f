//! Heuristic field extraction from product literature.
//!
//! Five independent extractors read the same text; none depends on the
//! output of another, and each reports "no match" as `None` or empty.

pub mod applications;
pub mod mechanism;
pub mod purpose;
pub mod unique;
pub mod usage;

use monograph_core::{ExtractedField, RuleSet, UsageGuidance};
use serde::Serialize;

use crate::normalize::NormalizedDocument;

pub use applications::extract_clinical_applications;
pub use mechanism::extract_key_mechanism;
pub use purpose::extract_primary_purpose;
pub use unique::extract_unique_value;
pub use usage::extract_usage_guidance;

/// Everything the extractors found for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub purpose: ExtractedField,
    pub mechanism: ExtractedField,
    pub unique_value: ExtractedField,
    pub usage: UsageGuidance,
    pub clinical_applications: Vec<String>,
}

/// Run all five extractors over a normalized document.
pub fn extract_fields(doc: &NormalizedDocument, rules: &RuleSet) -> Extraction {
    let text = doc.source.as_str();
    Extraction {
        purpose: extract_primary_purpose(text),
        mechanism: extract_key_mechanism(text, rules),
        unique_value: extract_unique_value(text),
        usage: extract_usage_guidance(text),
        clinical_applications: extract_clinical_applications(text),
    }
}
