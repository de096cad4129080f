//! Markdown answers with page citations.

use monograph_core::SearchResult;

use crate::highlight::highlight;

pub const NOTHING_FOUND: &str = "I couldn't find relevant information in the manuals for that question.";
pub const NO_EXCERPTS: &str = "No relevant information found. Try rephrasing your question.";

/// Display name of a manual file: `Thyroid_Manual.pdf` → `Thyroid Manual`.
pub fn manual_name(file: &str) -> String {
    file.replace(".pdf", "").replace('_', " ")
}

/// Numbered citation list, one entry per result, each with its snippet.
pub fn format_answer(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NOTHING_FOUND.to_string();
    }

    let mut answer = format!("**Answer based on {} relevant page(s):**\n\n", results.len());
    for (i, result) in results.iter().enumerate() {
        answer.push_str(&format!(
            "**{}. {} (Page {})**\n{}\n\n",
            i + 1,
            manual_name(&result.file),
            result.page,
            result.snippet
        ));
    }
    answer
}

/// Per-page excerpts for reading: the snippet and the wider context, both
/// with the question keywords highlighted.
pub fn format_excerpts(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_EXCERPTS.to_string();
    }

    let mut out = format!("**Found {} relevant page(s):**\n\n", results.len());
    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "**{}. {} - Page {} (Relevance: {} matches)**\n\
             Key excerpt: {}\n\
             Context: {}\n\n",
            i + 1,
            manual_name(&result.file),
            result.page,
            result.score,
            highlight(&result.snippet, &result.keywords),
            highlight(&result.context, &result.keywords),
        ));
    }
    out
}
