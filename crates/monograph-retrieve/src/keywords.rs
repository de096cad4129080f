//! Question → keyword list.

use monograph_core::RuleSet;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Tokens this short carry no signal.
const MIN_KEYWORD_CHARS: usize = 3;

/// Lowercased question words minus stop words and very short tokens.
///
/// Duplicates are dropped; the remaining keywords keep question order,
/// which is the order highlighting applies them in.
pub fn extract_keywords(question: &str, rules: &RuleSet) -> Vec<String> {
    let lower = question.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();
    for m in WORD.find_iter(&lower) {
        let word = m.as_str();
        if word.chars().count() < MIN_KEYWORD_CHARS || rules.stop_words.iter().any(|s| s == word) {
            continue;
        }
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}
