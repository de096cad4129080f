//! Primary purpose: what the product is for.

use monograph_core::{ExtractedField, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::applications::application_bullets;

static DELIVERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)delivers\s+([\w\s]+?)\s+(?:through|via)").expect("valid regex"));
static PROVIDES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)provides?\s+([\w\s]+?)\s+(?:for|through|via)").expect("valid regex"));

fn delivers_through(text: &str) -> Option<String> {
    DELIVERS.captures(text).map(|cap| cap[1].trim().to_string())
}

fn provides_for(text: &str) -> Option<String> {
    PROVIDES.captures(text).map(|cap| cap[1].trim().to_string())
}

fn listed_applications(text: &str) -> Option<String> {
    let items = application_bullets(text);
    match items.as_slice() {
        [] => None,
        [only] => Some(only.clone()),
        [first, second, ..] => Some(format!("{first} and {second}")),
    }
}

/// Pattern families in priority order. The first family that matches wins.
const FAMILIES: &[fn(&str) -> Option<String>] = &[delivers_through, provides_for, listed_applications];

/// Extract the primary purpose. The score is higher for earlier families.
pub fn extract_primary_purpose(text: &str) -> ExtractedField {
    let found = FAMILIES
        .iter()
        .enumerate()
        .find_map(|(rank, family)| family(text).map(|value| (rank, value)));

    match found {
        Some((rank, value)) => {
            debug!("Purpose matched family {}: {:?}", rank, value);
            ExtractedField::found(FieldKind::Purpose, value, (FAMILIES.len() - rank) as u32)
        }
        None => ExtractedField::none(FieldKind::Purpose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivers_beats_provides() {
        let text = "It provides calm focus for students. It delivers deep restful sleep through GABA.";
        let field = extract_primary_purpose(text);
        assert_eq!(field.as_deref(), Some("deep restful sleep"));
        assert_eq!(field.score, 3);
    }

    #[test]
    fn test_provides() {
        let text = "Eye Defense provides comprehensive ocular support through an advanced formulation.";
        assert_eq!(
            extract_primary_purpose(text).as_deref(),
            Some("comprehensive ocular support")
        );
    }

    #[test]
    fn test_applications_fallback() {
        let text = "Clinical Applications:\n• Joint comfort\n• Mobility\n• Recovery";
        let field = extract_primary_purpose(text);
        assert_eq!(field.as_deref(), Some("Joint comfort and Mobility"));
        assert_eq!(field.score, 1);

        let single = "Clinical Applications:\n- Joint comfort\n";
        assert_eq!(extract_primary_purpose(single).as_deref(), Some("Joint comfort"));
    }

    #[test]
    fn test_nothing_matches() {
        let field = extract_primary_purpose("A plain sentence with no cues.");
        assert_eq!(field.value, None);
        assert_eq!(field.kind, FieldKind::Purpose);
    }
}
