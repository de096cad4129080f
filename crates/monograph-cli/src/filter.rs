//! Which corpus names are real products worth summarizing.

/// Decides product-ness of a name given the full name list.
pub trait ProductFilter {
    fn is_product(&self, name: &str, all_names: &[&str]) -> bool;

    /// Sorted names that pass the filter.
    fn products(&self, all_names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = all_names
            .iter()
            .filter(|n| self.is_product(n, all_names))
            .map(|n| n.to_string())
            .collect();
        names.sort();
        names
    }
}

/// Newsletters, manuals, dated literature and duplicate spellings are not
/// products.
const EXCLUDED_FRAGMENTS: &[&str] = &[
    "newsletter", "news", "better health", "manual", "protocol manual", "blood chemistry",
    "cliniciansview", "quick reference",
    "april", "may", "june", "july", "august", "september", "sept", "october", "november",
    "december", "january", "february", "march",
    "jan ", "feb ", "mar ", "apr ", "may ", "jun ", "jul ", "aug ", "sep ", "oct ", "nov ", "dec ",
    "2022", "2023", "2024",
];

const LITERATURE_SUFFIXES: &[&str] = &[" lit", "lit", " literature", " tech lit"];

/// Name-based rules for a literature corpus.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicProductFilter;

fn is_all_caps(name: &str) -> bool {
    name.chars().any(char::is_alphabetic) && !name.chars().any(char::is_lowercase)
}

impl ProductFilter for HeuristicProductFilter {
    fn is_product(&self, name: &str, all_names: &[&str]) -> bool {
        let lower = name.to_lowercase();

        if EXCLUDED_FRAGMENTS.iter().any(|f| lower.contains(f)) {
            return false;
        }
        // Literature scans; the all-caps spelling is the canonical one.
        if LITERATURE_SUFFIXES.iter().any(|s| lower.ends_with(s)) && !is_all_caps(name) {
            return false;
        }
        if name.starts_with(char::is_lowercase) {
            return false;
        }
        if lower.contains("demo") {
            return false;
        }
        let numbered = format!("{name} (1)");
        !all_names.contains(&numbered.as_str())
    }
}
