//! Walks the alignment path and the raw spoken sequence to build the
//! final `AnalysisReport`.

use std::collections::HashMap;

use super::clean::CleanedWord;
use super::normalize::normalize;
use super::tokens;
use super::types::{
    AlignedItem, AlignmentOp, AnalysisReport, ErrorSummary, Hesitation, HesitationKind,
    MisreadPair, RepeatedPhrase, RepeatedWord, SkippedRun, SpokenWord, TimingSummary, WordStatus,
};
use super::Analyzer;

pub fn build_report(
    analyzer: &Analyzer,
    reference: &[String],
    raw_spoken: &[SpokenWord],
    cleaned: &[CleanedWord],
    ops: &[AlignmentOp],
) -> AnalysisReport {
    let detection = &analyzer.config.detection;

    let mut aligned_items = Vec::with_capacity(reference.len());
    let mut errors = ErrorSummary::default();

    for op in ops {
        match *op {
            AlignmentOp::Match { ref_idx, spoken_idx } => {
                let expected = &reference[ref_idx];
                let word = cleaned[spoken_idx].word;
                let e = normalize(expected);
                let status = if !e.is_empty() && e == normalize(&word.text) {
                    WordStatus::Correct
                } else {
                    WordStatus::Misread
                };
                if status == WordStatus::Misread {
                    errors.misread_pairs.push(MisreadPair {
                        expected: expected.clone(),
                        spoken: word.text.clone(),
                        ref_index: ref_idx,
                    });
                }
                aligned_items.push(AlignedItem {
                    expected: expected.clone(),
                    spoken: Some(word.text.clone()),
                    status,
                    confidence: Some(word.confidence),
                    ref_index: ref_idx,
                });
            }
            AlignmentOp::Skip { ref_idx } => {
                errors.skipped_word_indices.push(ref_idx);
                aligned_items.push(AlignedItem {
                    expected: reference[ref_idx].clone(),
                    spoken: None,
                    status: WordStatus::Skipped,
                    confidence: None,
                    ref_index: ref_idx,
                });
            }
            // Extra spoken words never surface in the aligned items.
            AlignmentOp::Insert { .. } => {}
        }
    }

    errors.skipped_line_runs = scan_skipped_runs(&aligned_items, detection.min_skipped_run);
    errors.hesitations = scan_hesitations(raw_spoken, detection.pause_threshold_secs);
    errors.repeated_words = scan_repeated_words(raw_spoken);
    errors.repeated_phrases =
        scan_repeated_phrases(reference, raw_spoken, detection.min_phrase_count);

    let correct_count = aligned_items
        .iter()
        .filter(|i| i.status == WordStatus::Correct)
        .count();
    let misread_count = errors.misread_pairs.len();
    let skipped_count = errors.skipped_word_indices.len();
    let accuracy = if reference.is_empty() {
        0.0
    } else {
        correct_count as f32 / reference.len() as f32
    };

    AnalysisReport {
        aligned_items,
        correct_count,
        misread_count,
        skipped_count,
        accuracy,
        timing: summarize_timing(raw_spoken),
        errors,
    }
}

/// Maximal runs of `min_run`+ consecutive skips, reported as skipped lines.
fn scan_skipped_runs(items: &[AlignedItem], min_run: usize) -> Vec<SkippedRun> {
    let mut runs = Vec::new();
    let mut run_start: Option<usize> = None;

    for (pos, item) in items.iter().enumerate() {
        match (item.status, run_start) {
            (WordStatus::Skipped, None) => run_start = Some(pos),
            (WordStatus::Skipped, Some(_)) => {}
            (_, Some(start)) => {
                push_run(&mut runs, items, start, pos - 1, min_run);
                run_start = None;
            }
            (_, None) => {}
        }
    }
    if let Some(start) = run_start {
        push_run(&mut runs, items, start, items.len() - 1, min_run);
    }
    runs
}

fn push_run(runs: &mut Vec<SkippedRun>, items: &[AlignedItem], start: usize, end: usize, min_run: usize) {
    let count = end - start + 1;
    if count >= min_run {
        runs.push(SkippedRun {
            start: items[start].ref_index,
            end: items[end].ref_index,
            count,
        });
    }
}

/// One pass over the raw sequence. A filler entry takes precedence over a
/// pause entry at the same index; each token contributes at most one.
fn scan_hesitations(raw: &[SpokenWord], pause_threshold_secs: f64) -> Vec<Hesitation> {
    let mut out = Vec::new();
    for (i, word) in raw.iter().enumerate() {
        if tokens::is_filler(&word.text) {
            out.push(Hesitation {
                index: i,
                kind: HesitationKind::Filler,
                word: word.text.clone(),
            });
        } else if tokens::detect_hesitation(raw, i, pause_threshold_secs) {
            out.push(Hesitation {
                index: i,
                kind: HesitationKind::Pause,
                word: word.text.clone(),
            });
        }
    }
    out
}

fn scan_repeated_words(raw: &[SpokenWord]) -> Vec<RepeatedWord> {
    (0..raw.len())
        .filter(|&i| tokens::is_immediate_repeat(raw, i))
        .map(|i| RepeatedWord {
            index: i,
            word: raw[i].text.clone(),
        })
        .collect()
}

/// Adjacent two-word phrases said more often than the text contains them.
/// Phrases echoing a naturally repeated phrase in the source are not
/// flagged; only genuine over-repetition is.
fn scan_repeated_phrases(
    reference: &[String],
    raw: &[SpokenWord],
    min_count: usize,
) -> Vec<RepeatedPhrase> {
    let mut ref_counts: HashMap<String, usize> = HashMap::new();
    for pair in reference.windows(2) {
        if let Some(phrase) = phrase_key(&pair[0], &pair[1]) {
            *ref_counts.entry(phrase).or_insert(0) += 1;
        }
    }

    let mut spoken_starts: HashMap<String, Vec<usize>> = HashMap::new();
    for i in 0..raw.len().saturating_sub(1) {
        if let Some(phrase) = phrase_key(&raw[i].text, &raw[i + 1].text) {
            spoken_starts.entry(phrase).or_default().push(i);
        }
    }

    let mut flagged: Vec<RepeatedPhrase> = spoken_starts
        .into_iter()
        .filter(|(phrase, starts)| {
            starts.len() >= min_count
                && starts.len() > ref_counts.get(phrase).copied().unwrap_or(0)
        })
        .map(|(phrase, starts)| RepeatedPhrase {
            phrase,
            indices: [starts[0], starts[1]],
        })
        .collect();

    // HashMap order is arbitrary; reports must be deterministic.
    flagged.sort_by_key(|p| p.indices[0]);
    flagged
}

fn phrase_key(a: &str, b: &str) -> Option<String> {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some(format!("{} {}", a, b))
}

/// First start to last end over whatever timestamps the transcript has.
fn summarize_timing(raw: &[SpokenWord]) -> Option<TimingSummary> {
    let first_start = raw.iter().find_map(|w| w.start_time)?;
    let last_end = raw.iter().rev().find_map(|w| w.end_time)?;
    let duration = last_end - first_start;
    if duration <= 0.0 {
        return None;
    }
    Some(TimingSummary {
        duration_secs: duration,
        words_per_minute: raw.len() as f32 * 60.0 / duration as f32,
    })
}
