//! Text normalization: whitespace cleanup, disclaimer removal, sentence
//! splitting and document-format detection.

use monograph_core::{FormatKind, RuleSet};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Stand-in for a protected abbreviation period while splitting.
/// Not a word character, so `\b` still works around it.
const PROTECTED_PERIOD: char = '\u{E000}';

/// Sentences shorter than this many characters are dropped.
const MIN_SENTENCE_CHARS: usize = 20;
const MIN_SENTENCE_WORDS: usize = 3;

/// Product text ready for extraction.
///
/// `source` keeps the line structure of the joined chunks (headings and
/// bullets depend on it); `cleaned` is whitespace-collapsed with the
/// regulatory fine print removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub source: String,
    pub cleaned: String,
    pub format: FormatKind,
}

impl NormalizedDocument {
    /// Space-join the chunks of one product and classify the result.
    pub fn from_chunks<S: AsRef<str>>(chunks: &[S], rules: &RuleSet) -> Self {
        let source = chunks.iter().map(|c| c.as_ref()).collect::<Vec<_>>().join(" ");
        let cleaned = clean(&source, rules);
        let format = detect_format(&source, rules);
        Self {
            source,
            cleaned,
            format,
        }
    }
}

/// Collapse whitespace runs, cut the disclaimer and everything after it,
/// and trim.
pub fn clean(text: &str, rules: &RuleSet) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let marker = rules.disclaimer_marker.trim();
    let kept = if marker.is_empty() {
        &collapsed[..]
    } else {
        // The marker is matched with its own whitespace collapsed too.
        let pattern = format!("(?i){}", regex::escape(&WHITESPACE.replace_all(marker, " ")));
        match Regex::new(&pattern).ok().and_then(|re| re.find(&collapsed)) {
            Some(m) => &collapsed[..m.start()],
            None => &collapsed[..],
        }
    };
    kept.trim().to_string()
}

fn abbreviation_pattern(rules: &RuleSet) -> Option<Regex> {
    let mut abbrevs: Vec<&str> = rules
        .abbreviations
        .iter()
        .map(|a| a.trim_end_matches('.'))
        .filter(|a| !a.is_empty())
        .collect();
    if abbrevs.is_empty() {
        return None;
    }
    abbrevs.sort_by_key(|a| std::cmp::Reverse(a.len()));
    let alternation = abbrevs.iter().map(|a| regex::escape(a)).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\.")).ok()
}

/// Split text into sentences.
///
/// Periods belonging to known abbreviations do not end a sentence. Short
/// fragments (under 20 characters or under three words) are dropped.
pub fn split_sentences(text: &str, rules: &RuleSet) -> Vec<String> {
    let cleaned = clean(text, rules);
    let protected = match abbreviation_pattern(rules) {
        Some(re) => re
            .replace_all(&cleaned, |caps: &regex::Captures<'_>| {
                caps[0].replace('.', &PROTECTED_PERIOD.to_string())
            })
            .into_owned(),
        None => cleaned,
    };

    TERMINATORS
        .split(&protected)
        .map(|s| s.replace(PROTECTED_PERIOD, ".").trim().to_string())
        .filter(|s| {
            s.chars().count() >= MIN_SENTENCE_CHARS && s.split_whitespace().count() >= MIN_SENTENCE_WORDS
        })
        .collect()
}

/// Classify a document by marker phrases. Clinical markers win over
/// newsletter markers.
pub fn detect_format(text: &str, rules: &RuleSet) -> FormatKind {
    let lower = text.to_lowercase();
    let has_any = |markers: &[String]| {
        markers
            .iter()
            .any(|m| !m.is_empty() && lower.contains(&m.to_lowercase()))
    };
    if has_any(&rules.clinical_markers) {
        FormatKind::ClinicalGuide
    } else if has_any(&rules.newsletter_markers) {
        FormatKind::Newsletter
    } else {
        FormatKind::ProductSheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_and_strips_disclaimer() {
        let rules = RuleSet::default();
        let text = "  Supports   healthy\n\nvision.  the u.s. food and drug\nadministration has not evaluated this.";
        assert_eq!(clean(text, &rules), "Supports healthy vision.");
    }

    #[test]
    fn test_clean_without_marker_keeps_text() {
        let rules = RuleSet::empty();
        let text = "Line one.\nThe U.S. Food and Drug Administration says so.";
        assert_eq!(
            clean(text, &rules),
            "Line one. The U.S. Food and Drug Administration says so."
        );
    }

    #[test]
    fn test_split_respects_abbreviations() {
        let rules = RuleSet::default();
        let text = "Dr. Smith recommends lutein for most adult patients. \
                    Use with antioxidants, e.g. vitamin C and zinc, for best results! Short one.";
        let sentences = split_sentences(text, &rules);
        assert_eq!(
            sentences,
            vec![
                "Dr. Smith recommends lutein for most adult patients".to_string(),
                "Use with antioxidants, e.g. vitamin C and zinc, for best results".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_drops_short_fragments() {
        let rules = RuleSet::default();
        let sentences = split_sentences("Tiny. Also tiny! Averyveryverylongsinglewordhere?", &rules);
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_split_filters_by_length_and_words() {
        let rules = RuleSet::default();
        let text = "One two three four five six seven. Ok? This sentence is long enough to stay.";
        for s in split_sentences(text, &rules) {
            assert!(s.chars().count() >= 20);
            assert!(s.split_whitespace().count() >= 3);
        }
    }

    #[test]
    fn test_split_keeps_twenty_char_sentence() {
        let rules = RuleSet::default();
        // 20 characters is long enough; 19 is not.
        let text = "Zinc aids our immune. Zinc aids the heart. Another sentence that is long enough.";
        assert_eq!(
            split_sentences(text, &rules),
            vec![
                "Zinc aids our immune".to_string(),
                "Another sentence that is long enough".to_string(),
            ]
        );
    }

    #[test]
    fn test_detect_format() {
        let rules = RuleSet::default();
        assert_eq!(
            detect_format("Eye Defense: Clinical Guide", &rules),
            FormatKind::ClinicalGuide
        );
        assert_eq!(
            detect_format("Better Health News, newsletter issue", &rules),
            FormatKind::Newsletter
        );
        assert_eq!(
            detect_format("Newsletter with Clinical Applications: below", &rules),
            FormatKind::ClinicalGuide
        );
        assert_eq!(detect_format("Just a sheet", &rules), FormatKind::ProductSheet);
    }

    #[test]
    fn test_document_from_chunks() {
        let rules = RuleSet::default();
        let doc = NormalizedDocument::from_chunks(&["Clinical Guide\nline", "two"], &rules);
        assert_eq!(doc.source, "Clinical Guide\nline two");
        assert_eq!(doc.cleaned, "Clinical Guide line two");
        assert_eq!(doc.format, FormatKind::ClinicalGuide);
    }
}
