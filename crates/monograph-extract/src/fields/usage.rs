//! Usage guidance: dosing lines and the clinical context a product suits.

use monograph_core::UsageGuidance;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[:\-]\s*").expect("valid regex"));

#[derive(Debug, Clone, Copy)]
enum DoseSlot {
    Maintenance,
    Acute,
    General,
}

static DOSE_PATTERNS: Lazy<Vec<(Regex, DoseSlot)>> = Lazy::new(|| {
    [
        (
            r"(?:maintenance|long-term|prevention).*?(\d+[^.]{10,60}(?:daily|day|b\.?i\.?d))",
            DoseSlot::Maintenance,
        ),
        (
            r"(?:acute|infection|therapeutic).*?(\d+[^.]{10,60}(?:daily|day|b\.?i\.?d))",
            DoseSlot::Acute,
        ),
        (r"recommendations?:?\s*(\d+[^.]{10,60})", DoseSlot::General),
    ]
    .into_iter()
    .map(|(p, slot)| (Regex::new(p).expect("valid regex"), slot))
    .collect()
});

/// Context phrasings, first match wins.
static CONTEXT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"should be considered for ([\w\s,]{15,80})",
        r"particularly (?:useful|effective) for ([\w\s,]{15,80})",
        r"best (?:used|suited) for ([\w\s,]{15,80})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

fn dose(lower: &str, re: &Regex, slot: DoseSlot) -> UsageGuidance {
    let Some(cap) = re.captures(lower) else {
        return UsageGuidance::default();
    };
    let value = Some(LEADING_PUNCT.replace(cap[1].trim(), "").into_owned());
    match slot {
        DoseSlot::Maintenance => UsageGuidance {
            maintenance: value,
            ..Default::default()
        },
        DoseSlot::Acute => UsageGuidance {
            acute: value,
            ..Default::default()
        },
        DoseSlot::General => UsageGuidance {
            general: value,
            ..Default::default()
        },
    }
}

fn context(lower: &str) -> UsageGuidance {
    UsageGuidance {
        context: CONTEXT_PATTERNS
            .iter()
            .find_map(|re| re.captures(lower).map(|cap| cap[1].trim().to_string())),
        ..Default::default()
    }
}

/// Extract dosing and context guidance. Every key is optional; the result
/// is lowercase because matching runs on lowercased text.
pub fn extract_usage_guidance(text: &str) -> UsageGuidance {
    let lower = text.to_lowercase();
    DOSE_PATTERNS
        .iter()
        .map(|(re, slot)| dose(&lower, re, *slot))
        .chain(std::iter::once(context(&lower)))
        .fold(UsageGuidance::default(), UsageGuidance::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_recommendation() {
        let text = "Recommendations: 2 capsules daily for maintenance.";
        let usage = extract_usage_guidance(text);
        assert_eq!(usage.general.as_deref(), Some("2 capsules daily for maintenance"));
        assert!(usage.maintenance.is_none());
        assert!(usage.acute.is_none());
    }

    #[test]
    fn test_maintenance_and_acute() {
        let text = "For long-term use take 1 capsule twice daily with food. \
                    During acute infection take 3 capsules three times per day until resolved.";
        let usage = extract_usage_guidance(text);
        assert_eq!(usage.maintenance.as_deref(), Some("1 capsule twice daily"));
        assert_eq!(usage.acute.as_deref(), Some("3 capsules three times per day"));
    }

    #[test]
    fn test_context_first_pattern_wins() {
        let text = "It is particularly useful for athletes in heavy training. \
                    Best suited for older adults with low appetite.";
        let usage = extract_usage_guidance(text);
        assert_eq!(usage.context.as_deref(), Some("athletes in heavy training"));
    }

    #[test]
    fn test_nothing() {
        assert!(extract_usage_guidance("No guidance here.").is_empty());
    }
}
