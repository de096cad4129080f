//! Bulleted "Clinical Applications:" / "Clinical Considerations:" blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading through the next blank line (or end of input).
static CLINICAL_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)clinical (?:applications?|considerations?):(.*?)(?:\n\n|\z)").expect("valid regex")
});

/// Applications-only heading, used by the purpose extractor.
static APPLICATIONS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)clinical applications?:(.*?)(?:\n\n|\z)").expect("valid regex")
});

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-]\s*(.+?)(?:\n|\z)").expect("valid regex"));

/// At most this many applications are reported.
pub const MAX_APPLICATIONS: usize = 3;

/// Bullet items in a block, in order, trimmed.
pub(crate) fn bullets(block: &str) -> Vec<String> {
    BULLET
        .captures_iter(block)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .collect()
}

/// Bullets under the first "Clinical Applications:" heading, if any.
pub(crate) fn application_bullets(text: &str) -> Vec<String> {
    APPLICATIONS_BLOCK
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| bullets(m.as_str()))
        .unwrap_or_default()
}

/// Up to the first three bulleted clinical applications or considerations.
pub fn extract_clinical_applications(text: &str) -> Vec<String> {
    let Some(block) = CLINICAL_BLOCK.captures(text).and_then(|cap| cap.get(1)) else {
        return Vec::new();
    };
    let mut items = bullets(block.as_str());
    items.truncate(MAX_APPLICATIONS);
    items
}
