//! Ranking and rendering over a small manual index.

use monograph_core::{Error, RuleSet};
use monograph_retrieve::{format_answer, highlight, ManualIndex};

const INDEX: &str = r#"[
    {"file": "Vitamin_D_Protocols.pdf", "page": 12,
     "text": "Vitamin D mentioned in passing. The usual dosage is 1000 IU daily."},
    {"file": "Vitamin_D_Protocols.pdf", "page": 14,
     "text": "Dosage guidance. Adjust the dosage by serum level. Dosage above 4000 IU needs monitoring. Dosage review every quarter. Split the dosage with meals."},
    {"file": "Blood_Chemistry.pdf", "page": 3,
     "text": "Interpreting ferritin and iron panels."}
]"#;

#[test]
fn test_page_with_more_occurrences_ranks_first() {
    let rules = RuleSet::default();
    let index = ManualIndex::from_json(INDEX).unwrap();

    let results = index.search("what is the dosage", 2, &rules).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!((results[0].page, results[0].score), (14, 5));
    assert_eq!((results[1].page, results[1].score), (12, 1));
    assert_eq!(results[1].snippet, "The usual dosage is 1000 IU daily");
}

#[test]
fn test_answer_cites_manual_and_page() {
    let rules = RuleSet::default();
    let index = ManualIndex::from_json(INDEX).unwrap();

    let results = index.search("ferritin", 5, &rules).unwrap();
    let answer = format_answer(&results);
    assert!(answer.starts_with("**Answer based on 1 relevant page(s):**"));
    assert!(answer.contains("**1. Blood Chemistry (Page 3)**"));
}

#[test]
fn test_unanswerable_question_differs_from_no_results() {
    let rules = RuleSet::default();
    let index = ManualIndex::from_json(INDEX).unwrap();

    assert!(matches!(index.search("how do I", 5, &rules), Err(Error::NoKeywords(_))));
    assert!(index.search("progesterone", 5, &rules).unwrap().is_empty());
}

#[test]
fn test_highlighting_search_context_is_idempotent() {
    let rules = RuleSet::default();
    let index = ManualIndex::from_json(INDEX).unwrap();

    let result = &index.search("ferritin iron", 1, &rules).unwrap()[0];
    let once = highlight(&result.context, &result.keywords);
    assert_eq!(once, "Interpreting **ferritin** and **iron** panels.");
    assert_eq!(highlight(&once, &result.keywords), once);
}

#[test]
fn test_invalid_record_is_reported() {
    let err = ManualIndex::from_json(r#"[{"file": "a.pdf", "page": 1}]"#).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord(ref m) if m.contains("text")));
}
