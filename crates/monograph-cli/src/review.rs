//! Summary quality review: spots missing clauses and mechanism text that
//! looks like a leaked header or a sentence fragment.

use std::fmt;

use monograph_extract::{BlockLabel, NarrativeSummary};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_LEAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+\s+[A-Z]").expect("valid regex"));

const MIN_MECHANISM_WORDS: usize = 8;
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanismIssue {
    TooShort,
    HeaderLeak,
    LowercaseStart,
}

impl fmt::Display for MechanismIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "TOO SHORT"),
            Self::HeaderLeak => write!(f, "HEADER LEAK"),
            Self::LowercaseStart => write!(f, "LOWERCASE START"),
        }
    }
}

pub fn mechanism_issues(mechanism: &str) -> Vec<MechanismIssue> {
    let mut issues = Vec::new();
    if mechanism.split_whitespace().count() < MIN_MECHANISM_WORDS {
        issues.push(MechanismIssue::TooShort);
    }
    if HEADER_LEAK.is_match(mechanism) {
        issues.push(MechanismIssue::HeaderLeak);
    }
    if !mechanism.starts_with(char::is_uppercase) {
        issues.push(MechanismIssue::LowercaseStart);
    }
    issues
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReview {
    pub product: String,
    pub indication: Option<String>,
    pub mechanism: Option<String>,
    pub mechanism_issues: Vec<MechanismIssue>,
    pub advantage: Option<String>,
}

fn clause(summary: &NarrativeSummary, leads: &[&str]) -> Option<String> {
    summary
        .blocks
        .iter()
        .filter(|b| b.label == BlockLabel::Summary)
        .flat_map(|b| b.segments.iter())
        .find(|s| s.lead.is_some_and(|l| leads.contains(&l)))
        .map(|s| s.text.clone())
}

impl ProductReview {
    pub fn of(product: &str, summary: &NarrativeSummary) -> Self {
        let mechanism = clause(summary, &["How does it work?"]);
        Self {
            product: product.to_string(),
            indication: clause(summary, &["What conditions:", "Primary indication:"]),
            mechanism_issues: mechanism.as_deref().map(mechanism_issues).unwrap_or_default(),
            mechanism,
            advantage: clause(summary, &["Why choose this?"]),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.indication.is_some() && self.mechanism.is_some() && self.mechanism_issues.is_empty()
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

impl fmt::Display for ProductReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.product)?;
        match &self.indication {
            Some(i) => writeln!(f, "  ok    Indications: {}", preview(i))?,
            None => writeln!(f, "  MISS  Indications")?,
        }
        match &self.mechanism {
            Some(m) if self.mechanism_issues.is_empty() => {
                writeln!(f, "  ok    Mechanism: {}", preview(m))?
            }
            Some(m) => {
                let flags: Vec<String> = self.mechanism_issues.iter().map(|i| i.to_string()).collect();
                writeln!(f, "  WARN  Mechanism: {} [{}]", preview(m), flags.join(", "))?
            }
            None => writeln!(f, "  MISS  Mechanism")?,
        }
        match &self.advantage {
            Some(a) => write!(f, "  ok    Advantage: {}", preview(a)),
            None => write!(f, "        (No advantage)"),
        }
    }
}
