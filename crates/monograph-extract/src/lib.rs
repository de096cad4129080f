//! Monograph Extract: turns free-form product literature into a short
//! labeled narrative.
//!
//! Raw chunks are joined and normalized, five heuristic extractors run over
//! the text, and the assembler renders their findings as summary blocks.
//! The fuzzy matcher is a supporting primitive for name lookup.

pub mod fields;
pub mod fuzzy;
pub mod narrative;
pub mod normalize;

pub use fields::{extract_fields, Extraction};
pub use fuzzy::{partial_similarity_ratio, rank_matches, similarity_ratio};
pub use narrative::{assemble, summarize, BlockLabel, NarrativeBlock, NarrativeSummary, Segment};
pub use normalize::{clean, detect_format, split_sentences, NormalizedDocument};
