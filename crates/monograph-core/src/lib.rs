//! Monograph Core: shared data model, rule tables, error types.

pub mod config;
pub mod error;
pub mod types;

pub use config::RuleSet;
pub use error::{Error, Result};
pub use types::{
    ExtractedField, FieldKind, FormatKind, IndexedPage, SearchResult, UsageGuidance,
};
