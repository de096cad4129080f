//! Key mechanism: the single sentence that best explains how a product works.
//!
//! Every sentence of eight or more words is tidied (header labels and lead-in
//! clauses removed), filtered against the kill-shot list, then scored by
//! additive vocabulary tiers minus penalties. The best sentence scoring above
//! [`MIN_SCORE`] wins; ties go to the earliest sentence.

use monograph_core::{ExtractedField, FieldKind, RuleSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static HEADER_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\s+").expect("valid regex"));
static LEAD_IN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*?\s+The\s+").expect("valid regex"));

const MIN_WORDS: usize = 8;
/// Candidates must score strictly above this.
pub const MIN_SCORE: i32 = 1;
const MAX_HEADER_WORDS: usize = 4;

const SERVING_AS: &str = "serving as";
const FILTER: &str = "filter";
const BLUE: &str = "blue";

/// Split on sentence terminators with no length filtering.
fn naive_sentences(text: &str) -> Vec<String> {
    let collapsed = WHITESPACE.replace_all(text, " ");
    TERMINATORS
        .split(&collapsed)
        .map(|s| s.trim().to_string())
        .collect()
}

/// Remove a leading label of one to four capitalized words when it runs
/// straight into a lowercase word ("Product Overview supports ..." becomes
/// "supports ...").
fn strip_header_label(sentence: &str) -> &str {
    let mut ends = Vec::with_capacity(MAX_HEADER_WORDS);
    let mut offset = 0;
    while ends.len() < MAX_HEADER_WORDS {
        match HEADER_WORD.find(&sentence[offset..]) {
            Some(m) => {
                offset += m.end();
                ends.push(offset);
            }
            None => break,
        }
    }
    // Longest label first; fall back to shorter ones.
    ends.iter()
        .rev()
        .find(|&&end| sentence[end..].starts_with(|c: char| c.is_ascii_lowercase()))
        .map(|&end| &sentence[end..])
        .unwrap_or(sentence)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_lowercase() => c.to_uppercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// Header removal, lead-in removal, then capitalization.
pub fn tidy_candidate(sentence: &str) -> String {
    let stripped = strip_header_label(sentence);
    let stripped = LEAD_IN.replace(stripped, "The ");
    capitalize_first(&stripped)
}

fn contains_any(lower: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| !t.is_empty() && lower.contains(t.as_str()))
}

/// Kill-shot filter: true when the sentence must be discarded whatever it
/// scores.
pub fn is_disqualified(lower: &str, rules: &RuleSet) -> bool {
    contains_any(lower, &rules.kill_phrases)
}

/// Additive tier score minus penalties, on a lowercased sentence.
pub fn score_sentence(lower: &str, rules: &RuleSet) -> i32 {
    let mut score = 0;

    let serving = lower.contains(SERVING_AS);
    let filter = lower.contains(FILTER);
    if serving && filter {
        score += 5;
    } else if serving || (filter && lower.contains(BLUE)) {
        score += 4;
    }
    if contains_any(lower, &rules.strong_verbs) {
        score += 3;
    }
    if contains_any(lower, &rules.biological_terms) {
        score += 2;
    }
    if contains_any(lower, &rules.generic_verbs) {
        score += 1;
    }

    if contains_any(lower, &rules.fluff_phrases) {
        score -= 2;
    }
    // List-like fragments rather than prose.
    if lower.matches(':').count() >= 2 || lower.matches(',').count() >= 5 {
        score -= 3;
    }

    score
}

/// Pick the best mechanism sentence from raw product text.
pub fn extract_key_mechanism(text: &str, rules: &RuleSet) -> ExtractedField {
    let mut best: Option<(i32, String)> = None;

    for sentence in naive_sentences(text) {
        if sentence.split_whitespace().count() < MIN_WORDS {
            continue;
        }

        let candidate = tidy_candidate(&sentence);
        let lower = candidate.to_lowercase();
        if is_disqualified(&lower, rules) {
            debug!("Mechanism candidate disqualified: {:?}", candidate);
            continue;
        }

        let score = score_sentence(&lower, rules);
        if !candidate.starts_with(char::is_uppercase) {
            continue;
        }
        if score > MIN_SCORE && best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, candidate));
        }
    }

    match best {
        Some((score, sentence)) => {
            debug!("Mechanism selected (score {}): {:?}", score, sentence);
            ExtractedField::found(FieldKind::Mechanism, sentence, score.unsigned_abs())
        }
        None => ExtractedField::none(FieldKind::Mechanism),
    }
}
