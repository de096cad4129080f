//! Keyword emphasis for display.

use regex::Regex;

/// Markdown bold.
pub const MARKER: &str = "**";

/// Wrap every case-insensitive occurrence of each keyword in [`MARKER`]s.
///
/// Keywords are applied in the given order, each pass over the output of
/// the previous one, so overlapping keywords ("vitamin", "vitamin d") are
/// order-dependent. Occurrences already wrapped are left as they are.
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let mut out = text.to_string();
    for kw in keywords {
        let kw = kw.as_ref();
        if kw.is_empty() {
            continue;
        }
        let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(kw))) else {
            continue;
        };

        let mut marked = String::with_capacity(out.len() + 8);
        let mut last = 0;
        for m in re.find_iter(&out) {
            marked.push_str(&out[last..m.start()]);
            let wrapped = out[..m.start()].ends_with(MARKER) && out[m.end()..].starts_with(MARKER);
            if wrapped {
                marked.push_str(m.as_str());
            } else {
                marked.push_str(MARKER);
                marked.push_str(m.as_str());
                marked.push_str(MARKER);
            }
            last = m.end();
        }
        marked.push_str(&out[last..]);
        out = marked;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_case_insensitive() {
        assert_eq!(
            highlight("Dosage varies. Ask about dosage.", &["dosage"]),
            "**Dosage** varies. Ask about **dosage**."
        );
    }

    #[test]
    fn test_highlight_idempotent() {
        let keywords = ["zinc", "copper"];
        let once = highlight("Zinc and copper balance; zinc first.", &keywords);
        assert_eq!(once, "**Zinc** and **copper** balance; **zinc** first.");
        assert_eq!(highlight(&once, &keywords), once);
    }

    #[test]
    fn test_overlapping_keywords_follow_order() {
        assert_eq!(
            highlight("Take vitamin D daily", &["vitamin", "vitamin d"]),
            "Take **vitamin** D daily"
        );
        // The second pass sees the first pass's markers.
        assert_eq!(
            highlight("Take vitamin D daily", &["vitamin d", "vitamin"]),
            "Take ****vitamin** D** daily"
        );
    }

    #[test]
    fn test_no_keywords() {
        let none: [&str; 0] = [];
        assert_eq!(highlight("unchanged", &none), "unchanged");
    }
}
