//! Narrative assembly: extractor output → labeled summary blocks.
//!
//! The "Summary" block follows a fixed order (indication, mechanism,
//! advantage); a separate "Dosing" block carries usage guidance. Blocks
//! with nothing to say are left out.

use monograph_core::{FormatKind, RuleSet};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::fields::{extract_fields, Extraction};
use crate::normalize::NormalizedDocument;

static REDUNDANT_LEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:The combination of|The formula)\s+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockLabel {
    Summary,
    Dosing,
}

impl std::fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "Summary"),
            Self::Dosing => write!(f, "Dosing"),
        }
    }
}

/// One line or clause of a block, optionally introduced by an inline label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub lead: Option<&'static str>,
    pub text: String,
}

impl Segment {
    fn led(lead: &'static str, text: String) -> Self {
        Self {
            lead: Some(lead),
            text,
        }
    }

    fn plain(text: String) -> Self {
        Self { lead: None, text }
    }
}

/// A self-contained labeled section of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeBlock {
    pub label: BlockLabel,
    pub segments: Vec<Segment>,
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl NarrativeBlock {
    /// Block body as plain text.
    pub fn body(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|s| match s.lead {
                Some(lead) => format!("{lead} {}", s.text),
                None => s.text.clone(),
            })
            .collect();
        match self.label {
            BlockLabel::Summary => parts.join(" "),
            BlockLabel::Dosing => parts.join("\n"),
        }
    }

    /// HTML section as shown on the dashboard and stored by the cache.
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|s| match s.lead {
                Some(lead) => format!("<strong>{lead}</strong> {}", escape_html(&s.text)),
                None => escape_html(&s.text),
            })
            .collect();
        let body = match self.label {
            BlockLabel::Summary => parts.join(" "),
            BlockLabel::Dosing => parts.join("<br>"),
        };
        format!(
            "<div class='summary-section'><h3>{}</h3><p>{}</p></div>",
            self.label, body
        )
    }
}

impl std::fmt::Display for NarrativeBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.body())
    }
}

/// Digest of one product. A pure function of its input chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeSummary {
    pub product: Option<String>,
    pub format: FormatKind,
    pub extraction: Extraction,
    pub blocks: Vec<NarrativeBlock>,
}

impl NarrativeSummary {
    /// Rendered block strings in order.
    pub fn rendered(&self) -> Vec<String> {
        self.blocks.iter().map(NarrativeBlock::render).collect()
    }

    /// All rendered blocks as a single string.
    pub fn joined(&self) -> String {
        self.rendered().join(" ")
    }
}

fn with_period(mut s: String) -> String {
    if !s.ends_with('.') {
        s.push('.');
    }
    s
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn indication(extraction: &Extraction) -> Option<Segment> {
    match extraction.clinical_applications.as_slice() {
        [first, second, ..] => Some(Segment::led(
            "What conditions:",
            format!("{first} and {}.", second.to_lowercase()),
        )),
        [only] => Some(Segment::led("Primary indication:", with_period(only.clone()))),
        [] => extraction
            .purpose
            .as_deref()
            .map(|p| Segment::led("Primary indication:", with_period(p.to_string()))),
    }
}

fn mechanism(extraction: &Extraction) -> Option<Segment> {
    let raw = extraction.mechanism.as_deref()?.trim();
    let cleaned = REDUNDANT_LEAD.replace(raw, "");
    if !cleaned.starts_with(char::is_uppercase) {
        debug!("Dropping unusable mechanism clause: {:?}", cleaned);
        return None;
    }
    Some(Segment::led("How does it work?", with_period(cleaned.into_owned())))
}

fn advantage(extraction: &Extraction) -> Option<Segment> {
    let value = extraction.unique_value.as_deref()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(Segment::led("Why choose this?", with_period(capitalized(value))))
}

fn dosing(extraction: &Extraction) -> Vec<Segment> {
    let usage = &extraction.usage;
    let mut lines = Vec::new();
    if let Some(m) = &usage.maintenance {
        lines.push(Segment::led("Maintenance:", m.clone()));
    }
    if let Some(a) = &usage.acute {
        lines.push(Segment::led("Acute/Therapeutic:", a.clone()));
    }
    if usage.maintenance.is_none() {
        if let Some(g) = &usage.general {
            lines.push(Segment::plain(g.clone()));
        }
    }
    lines
}

/// Turn extractor output into the ordered, variable-length block list.
pub fn assemble(extraction: &Extraction) -> Vec<NarrativeBlock> {
    let mut blocks = Vec::new();

    let summary: Vec<Segment> = [indication(extraction), mechanism(extraction), advantage(extraction)]
        .into_iter()
        .flatten()
        .collect();
    if !summary.is_empty() {
        blocks.push(NarrativeBlock {
            label: BlockLabel::Summary,
            segments: summary,
        });
    }

    let dosing = dosing(extraction);
    if !dosing.is_empty() {
        blocks.push(NarrativeBlock {
            label: BlockLabel::Dosing,
            segments: dosing,
        });
    }

    blocks
}

/// Full summary path: join chunks, normalize, extract, assemble.
pub fn summarize<S: AsRef<str>>(chunks: &[S], product_hint: Option<&str>, rules: &RuleSet) -> NarrativeSummary {
    let doc = NormalizedDocument::from_chunks(chunks, rules);
    let extraction = extract_fields(&doc, rules);
    let blocks = assemble(&extraction);
    debug!(
        "Summarized {:?} ({}, {} chunks) into {} blocks",
        product_hint.unwrap_or(""),
        doc.format,
        chunks.len(),
        blocks.len()
    );
    NarrativeSummary {
        product: product_hint.map(str::to_string),
        format: doc.format,
        extraction,
        blocks,
    }
}
