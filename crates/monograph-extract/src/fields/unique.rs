//! Unique value proposition: comparative claims that set a product apart.

use monograph_core::{ExtractedField, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Comparative patterns, highest priority first.
static CLAIMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(superior [\w\s%]+ compared to [\w\s%]+)",
        r"(99% pure \w+ compared to (?:the )?\d+% [\w\s]+)",
        r"(only [\w\s]+ formula (?:that|to) [\w\s,]{15,80})",
        r"(sets [\w\s]+ apart[^.]{10,80})",
        r"(most (?:effective|potent|bioavailable) [\w\s]{10,60})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// First matching comparative claim, whitespace-normalized and capitalized.
pub fn extract_unique_value(text: &str) -> ExtractedField {
    let lower = text.to_lowercase();

    for (rank, re) in CLAIMS.iter().enumerate() {
        let Some(cap) = re.captures(&lower) else {
            continue;
        };
        let claim = WHITESPACE.replace_all(cap[1].trim(), " ");
        let mut chars = claim.chars();
        let value = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => continue,
        };
        return ExtractedField::found(FieldKind::UniqueValue, value, (CLAIMS.len() - rank) as u32);
    }

    ExtractedField::none(FieldKind::UniqueValue)
}
