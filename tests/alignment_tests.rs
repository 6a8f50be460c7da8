mod common;

use common::{spoken, words};
use readalign::align::{Analyzer, WordStatus};
use readalign::config::Config;

fn analyzer() -> Analyzer {
    Analyzer::new(Config::default())
}

#[test]
fn identical_sequences_align_all_correct() {
    let reference = words(&["the", "cat", "sat", "on", "the", "mat"]);
    let report = analyzer().analyze(&reference, &spoken(&["the", "cat", "sat", "on", "the", "mat"]));

    assert_eq!(report.aligned_items.len(), reference.len());
    assert!(report
        .aligned_items
        .iter()
        .all(|i| i.status == WordStatus::Correct));
    assert_eq!(report.correct_count, reference.len());
    assert_eq!(report.misread_count, 0);
    assert_eq!(report.skipped_count, 0);
    assert!((report.accuracy - 1.0).abs() < f32::EPSILON);
}

#[test]
fn omitted_word_is_skipped() {
    let reference = words(&["the", "quick", "brown", "fox"]);
    let report = analyzer().analyze(&reference, &spoken(&["the", "quick", "fox"]));

    let statuses: Vec<WordStatus> = report.aligned_items.iter().map(|i| i.status).collect();
    assert_eq!(
        statuses,
        vec![
            WordStatus::Correct,
            WordStatus::Correct,
            WordStatus::Skipped,
            WordStatus::Correct
        ]
    );
    assert_eq!(report.correct_count, 3);
    assert_eq!(report.errors.skipped_word_indices, vec![2]);
}

#[test]
fn empty_spoken_sequence_skips_everything() {
    let reference = words(&["a", "b", "c"]);
    let report = analyzer().analyze(&reference, &[]);

    assert_eq!(report.aligned_items.len(), 3);
    assert!(report
        .aligned_items
        .iter()
        .all(|i| i.status == WordStatus::Skipped));
    assert_eq!(report.correct_count, 0);
    assert_eq!(report.accuracy, 0.0);
}

#[test]
fn empty_reference_yields_empty_report() {
    let report = analyzer().analyze(&[], &spoken(&["hello", "world"]));
    assert!(report.aligned_items.is_empty());
    assert_eq!(report.correct_count, 0);
    assert_eq!(report.accuracy, 0.0);
    assert!(report.errors.skipped_line_runs.is_empty());
}

#[test]
fn near_miss_is_classified_misread() {
    let reference = words(&["cat"]);
    let report = analyzer().analyze(&reference, &spoken(&["kat"]));

    assert_eq!(report.aligned_items.len(), 1);
    let item = &report.aligned_items[0];
    assert_eq!(item.status, WordStatus::Misread);
    assert_eq!(item.spoken.as_deref(), Some("kat"));

    assert_eq!(report.errors.misread_pairs.len(), 1);
    assert_eq!(report.errors.misread_pairs[0].expected, "cat");
    assert_eq!(report.errors.misread_pairs[0].spoken, "kat");
}

#[test]
fn extra_spoken_words_never_surface() {
    let reference = words(&["good", "morning"]);
    let report = analyzer().analyze(
        &reference,
        &spoken(&["well", "good", "morning", "everyone"]),
    );

    assert_eq!(report.aligned_items.len(), 2);
    assert_eq!(report.correct_count, 2);
    for item in &report.aligned_items {
        assert_ne!(item.spoken.as_deref(), Some("well"));
        assert_ne!(item.spoken.as_deref(), Some("everyone"));
    }
}

#[test]
fn currency_reference_aligns_against_spoken_amounts() {
    let reference = words(&["$1.50", "please"]);
    let report = analyzer().analyze(
        &reference,
        &spoken(&["one", "dollar", "fifty", "cents", "please"]),
    );

    // Expanded reference: 1 dollar 50 cents please.
    assert_eq!(report.aligned_items.len(), 5);
    assert_eq!(report.correct_count, 5);
    assert_eq!(report.aligned_items[0].expected, "1");
    assert_eq!(report.aligned_items[4].expected, "please");
}

#[test]
fn number_word_and_digit_forms_cross_match() {
    let reference = words(&["chapter", "10"]);
    let report = analyzer().analyze(&reference, &spoken(&["chapter", "ten"]));
    assert_eq!(report.correct_count, 2);
}

#[test]
fn fillers_are_invisible_to_alignment() {
    let reference = words(&["the", "dog", "ran"]);
    let report = analyzer().analyze(&reference, &spoken(&["the", "um", "dog", "uh", "ran"]));

    assert_eq!(report.correct_count, 3);
    assert!(report
        .aligned_items
        .iter()
        .all(|i| i.status == WordStatus::Correct));
}

#[test]
fn stutters_are_invisible_to_alignment() {
    let reference = words(&["the", "dog"]);
    let report = analyzer().analyze(&reference, &spoken(&["the", "the", "dog"]));
    assert_eq!(report.correct_count, 2);
    assert_eq!(report.skipped_count, 0);
}

#[test]
fn confidence_is_carried_onto_matched_items() {
    use readalign::align::SpokenWord;
    let reference = words(&["hello"]);
    let mut word = SpokenWord::new("hello");
    word.confidence = 0.42;
    let report = analyzer().analyze(&reference, &[word]);

    assert_eq!(report.aligned_items[0].confidence, Some(0.42));
}

#[test]
fn skipped_items_have_no_spoken_word() {
    let reference = words(&["alpha", "beta"]);
    let report = analyzer().analyze(&reference, &spoken(&["alpha"]));
    let skipped = &report.aligned_items[1];
    assert_eq!(skipped.status, WordStatus::Skipped);
    assert_eq!(skipped.spoken, None);
    assert_eq!(skipped.confidence, None);
}
