//! Shared data model.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Source document style, inferred from marker phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    ClinicalGuide,
    Newsletter,
    ProductSheet,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClinicalGuide => write!(f, "clinical_guide"),
            Self::Newsletter => write!(f, "newsletter"),
            Self::ProductSheet => write!(f, "product_sheet"),
        }
    }
}

/// The five narrative fields pulled out of product literature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Purpose,
    Mechanism,
    UniqueValue,
    UsageGuidance,
    ClinicalApplications,
}

/// Outcome of a single-valued extractor.
///
/// `score` only ranks candidates inside one extractor; scores of different
/// kinds are not comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub kind: FieldKind,
    pub value: Option<String>,
    pub score: u32,
}

impl ExtractedField {
    pub fn found(kind: FieldKind, value: String, score: u32) -> Self {
        Self {
            kind,
            value: Some(value),
            score,
        }
    }

    pub fn none(kind: FieldKind) -> Self {
        Self {
            kind,
            value: None,
            score: 0,
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Dosing and context guidance. Each key is set at most once; any subset
/// may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageGuidance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl UsageGuidance {
    /// Combine two partial records. Keys already set on `self` win.
    pub fn merge(self, other: UsageGuidance) -> Self {
        Self {
            maintenance: self.maintenance.or(other.maintenance),
            acute: self.acute.or(other.acute),
            general: self.general.or(other.general),
            context: self.context.or(other.context),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.maintenance.is_none()
            && self.acute.is_none()
            && self.general.is_none()
            && self.context.is_none()
    }
}

/// One page of an indexed manual. Identified by `(file, page)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedPage {
    pub file: String,
    pub page: u32,
    pub text: String,
}

impl IndexedPage {
    /// Build a page from a loosely-typed index record.
    ///
    /// `position` is only used in the error message.
    pub fn from_value(value: &serde_json::Value, position: usize) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            Error::InvalidRecord(format!("record {position} is not an object"))
        })?;

        let file = obj
            .get("file")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidRecord(format!("record {position}: missing string field 'file'")))?;
        let page = obj
            .get("page")
            .and_then(|v| v.as_u64())
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| Error::InvalidRecord(format!("record {position}: missing integer field 'page'")))?;
        let text = obj
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidRecord(format!("record {position}: missing string field 'text'")))?;

        Ok(Self {
            file: file.to_string(),
            page,
            text: text.to_string(),
        })
    }
}

/// A ranked page for one question. Derived per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub file: String,
    pub page: u32,
    pub text: String,
    pub snippet: String,
    pub context: String,
    pub keywords: Vec<String>,
    pub score: u32,
}
