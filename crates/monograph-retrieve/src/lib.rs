//! Passage retrieval: question keywords, page ranking, excerpts and
//! highlighting over a pre-built manual index.

pub mod answer;
pub mod highlight;
pub mod index;
pub mod keywords;
pub mod passages;
pub mod search;

pub use answer::{format_answer, format_excerpts, manual_name};
pub use highlight::highlight;
pub use index::{manual_page_counts, parse_index, ManualIndex};
pub use keywords::extract_keywords;
pub use passages::{best_snippet, context_window};
pub use search::{search, PassageRetrievalEngine, SearchOptions};
