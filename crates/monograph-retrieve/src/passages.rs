//! Excerpts from a matched page: a short snippet of the best sentences and a
//! wider word window around the first keyword.

use once_cell::sync::Lazy;
use regex::Regex;

static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

pub const DEFAULT_SNIPPET_WORDS: usize = 80;
pub const DEFAULT_CONTEXT_WINDOW: usize = 100;
/// The best sentence plus up to this many runners-up.
const MAX_SNIPPET_SENTENCES: usize = 3;

const ELLIPSIS: &str = "...";

/// Total case-insensitive occurrences of all keywords.
pub(crate) fn keyword_hits<S: AsRef<str>>(lower: &str, keywords: &[S]) -> u32 {
    keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .map(|k| lower.matches(k).count() as u32)
        .sum()
}

fn leading_words(text: &str, n: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().take(n).collect();
    format!("{}{ELLIPSIS}", words.join(" "))
}

/// Best keyword-bearing sentence, topped up with the next best ones while
/// they fit in `max_words`.
///
/// Sentences are ranked by keyword occurrences; equal counts keep page
/// order. With no keyword in any sentence, the page's opening words are
/// used instead.
pub fn best_snippet<S: AsRef<str>>(text: &str, keywords: &[S], max_words: usize) -> String {
    let mut scored: Vec<(u32, &str)> = TERMINATORS
        .split(text)
        .filter_map(|sent| {
            let hits = keyword_hits(&sent.to_lowercase(), keywords);
            (hits > 0).then(|| (hits, sent.trim()))
        })
        .collect();

    if scored.is_empty() {
        return leading_words(text, max_words);
    }
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let best = scored[0].1;
    let words: Vec<&str> = best.split_whitespace().collect();
    if words.len() > max_words {
        return format!("{}{ELLIPSIS}", words[..max_words].join(" "));
    }

    let mut snippet = best.to_string();
    let mut word_count = words.len();
    for &(_, next) in scored.iter().take(MAX_SNIPPET_SENTENCES).skip(1) {
        let next_words = next.split_whitespace().count();
        if word_count + next_words > max_words {
            break;
        }
        snippet.push(' ');
        snippet.push_str(next);
        word_count += next_words;
    }
    snippet
}

/// Byte offsets where each whitespace-separated word starts.
fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(i);
            in_word = true;
        }
    }
    starts
}

/// Up to `window` words either side of the word holding the earliest
/// keyword occurrence, with ellipses where the page continues.
///
/// Falls back to the first `2 * window` words when no keyword occurs.
pub fn context_window<S: AsRef<str>>(text: &str, keywords: &[S], window: usize) -> String {
    let lower = text.to_lowercase();
    let first_hit = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .filter_map(|k| lower.find(k))
        .min();

    let Some(offset) = first_hit else {
        return leading_words(text, 2 * window);
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }
    let starts = word_starts(&lower);
    let at = starts
        .partition_point(|&s| s <= offset)
        .saturating_sub(1)
        .min(words.len() - 1);

    let start = at.saturating_sub(window);
    let end = (at + window + 1).min(words.len());

    let mut context = words[start..end].join(" ");
    if start > 0 {
        context.insert_str(0, ELLIPSIS);
    }
    if end < words.len() {
        context.push_str(ELLIPSIS);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_best_sentence_first() {
        let text = "Zinc is a mineral. Zinc dosage depends on zinc status. Take with food.";
        assert_eq!(
            best_snippet(text, &["zinc"], 80),
            "Zinc dosage depends on zinc status Zinc is a mineral"
        );
    }

    #[test]
    fn test_snippet_stops_before_exceeding_limit() {
        let text = "Dosage is two capsules. Some further words about dosage here. More dosage.";
        // Best is the first (tie, earliest); second would push past 6 words.
        assert_eq!(best_snippet(text, &["dosage"], 6), "Dosage is two capsules");
    }

    #[test]
    fn test_snippet_truncates_long_sentence() {
        let text = "dosage one two three four five six";
        assert_eq!(best_snippet(text, &["dosage"], 3), "dosage one two...");
    }

    #[test]
    fn test_snippet_fallback_without_keywords() {
        let text = "Alpha beta gamma. Delta epsilon.";
        assert_eq!(best_snippet(text, &["zinc"], 3), "Alpha beta gamma....");
    }

    #[test]
    fn test_context_window_centers_on_first_keyword() {
        let text = "w0 w1 w2 w3 target w5 w6 w7 w8";
        assert_eq!(context_window(text, &["target"], 2), "...w2 w3 target w5 w6...");
    }

    #[test]
    fn test_context_window_reaches_boundaries() {
        let text = "target w1 w2";
        assert_eq!(context_window(text, &["target"], 5), "target w1 w2");
    }

    #[test]
    fn test_context_window_uses_earliest_keyword() {
        let text = "a b c Zinc d e f Copper g";
        assert_eq!(context_window(text, &["copper", "zinc"], 1), "...c Zinc d...");
    }

    #[test]
    fn test_context_window_keyword_inside_word() {
        let text = "one two multivitamins three four";
        assert_eq!(context_window(text, &["vitamin"], 1), "...two multivitamins three...");
    }

    #[test]
    fn test_context_window_fallback() {
        let text = "a b c d e";
        assert_eq!(context_window(text, &["zinc"], 1), "a b...");
    }
}
