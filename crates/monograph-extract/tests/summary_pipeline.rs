//! End-to-end summary tests over realistic product-literature text.

use monograph_core::{FormatKind, RuleSet};
use monograph_extract::{summarize, BlockLabel};

const EYE_DEFENSE: &str = "
    Eye Defense: Clinical Guide

    Eye Defense provides comprehensive ocular support through an advanced formulation
    containing therapeutic concentrations of macular carotenoids. Each two-capsule serving
    delivers superior 99% pure mesozeaxanthin compared to the 66% pure form used in most
    competing ocular supplements. The combination with astaxanthin provides additional
    benefits for dynamic focus—the ability to refocus when shifting gaze between near and
    far objects—by supporting ocular muscle performance.

    Clinical Applications:
    • Age-related macular degeneration (dry and wet AMD)
    • Visual performance enhancement and protection
    • Blue light induced retinal damage

    Recommendations: 2 capsules daily for maintenance.
    ";

const FILTER_SENTENCE: &str =
    "Mesozeaxanthin accumulates in the fovea, serving as a blue light filter that protects photoreceptors.";

#[test]
fn test_worked_example() {
    let rules = RuleSet::default();
    let summary = summarize(&[EYE_DEFENSE], Some("Eye Defense"), &rules);

    assert_eq!(summary.product.as_deref(), Some("Eye Defense"));
    assert_eq!(summary.format, FormatKind::ClinicalGuide);
    assert_eq!(summary.blocks.len(), 2);

    let body = summary.blocks[0].body();
    assert_eq!(summary.blocks[0].label, BlockLabel::Summary);
    assert!(body.starts_with(
        "What conditions: Age-related macular degeneration (dry and wet AMD) and \
         visual performance enhancement and protection."
    ));
    // Without a "serving as"/"filter" sentence the bullet block outscores the prose.
    assert!(body.contains(
        "How does it work? Clinical Applications: • Age-related macular degeneration (dry and wet AMD) \
         • Visual performance enhancement and protection • Blue light induced retinal damage \
         Recommendations: 2 capsules daily for maintenance."
    ));
    assert!(body.contains(
        "Why choose this? Superior 99% pure mesozeaxanthin compared to the 66% pure form \
         used in most competing ocular supplements."
    ));

    assert_eq!(summary.blocks[1].label, BlockLabel::Dosing);
    assert_eq!(summary.blocks[1].body(), "2 capsules daily for maintenance");
}

#[test]
fn test_filter_sentence_becomes_mechanism() {
    let rules = RuleSet::default();
    let chunks = [EYE_DEFENSE, FILTER_SENTENCE];
    let summary = summarize(&chunks, None, &rules);

    assert_eq!(
        summary.extraction.mechanism.as_deref(),
        Some("Accumulates in the fovea, serving as a blue light filter that protects photoreceptors")
    );
    assert!(summary.blocks[0]
        .body()
        .contains("How does it work? Accumulates in the fovea, serving as a blue light filter"));
}

#[test]
fn test_summary_is_deterministic() {
    let rules = RuleSet::default();
    let first = summarize(&[EYE_DEFENSE, FILTER_SENTENCE], Some("Eye Defense"), &rules);
    let second = summarize(&[EYE_DEFENSE, FILTER_SENTENCE], Some("Eye Defense"), &rules);
    assert_eq!(first, second);
    assert_eq!(first.joined(), second.joined());
}

#[test]
fn test_rendered_blocks_are_html_sections() {
    let rules = RuleSet::default();
    let rendered = summarize(&[EYE_DEFENSE], None, &rules).rendered();
    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].starts_with("<div class='summary-section'><h3>Summary</h3><p><strong>What conditions:</strong>"));
    assert!(rendered[1].starts_with("<div class='summary-section'><h3>Dosing</h3>"));
}

#[test]
fn test_unremarkable_text_gives_empty_summary() {
    let rules = RuleSet::default();
    let summary = summarize(&["Thanks for reading.", "See you next month."], None, &rules);
    assert_eq!(summary.format, FormatKind::ProductSheet);
    assert!(summary.blocks.is_empty());
}
