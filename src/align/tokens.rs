//! Predicates over spoken tokens: fillers, stutters, long pauses.

use super::normalize::normalize;
use super::types::SpokenWord;

/// True iff the normalized token is a disfluency filler. The set is fixed;
/// entries are stored in normalized form ("you know" collapses to
/// "youknow" when it arrives as a single token).
pub fn is_filler(token: &str) -> bool {
    matches!(
        normalize(token).as_str(),
        "um" | "uh" | "er" | "ah" | "hmm" | "like" | "youknow"
    )
}

/// True iff the token at `index` repeats the previous token verbatim
/// after normalization (a stutter).
pub fn is_immediate_repeat(sequence: &[SpokenWord], index: usize) -> bool {
    if index == 0 || index >= sequence.len() {
        return false;
    }
    normalize(&sequence[index].text) == normalize(&sequence[index - 1].text)
}

/// True iff the silence between the previous word's end and this word's
/// start exceeds `pause_threshold_secs`. Missing timing on either side
/// means no signal, never an error.
pub fn detect_hesitation(sequence: &[SpokenWord], index: usize, pause_threshold_secs: f64) -> bool {
    if index == 0 || index >= sequence.len() {
        return false;
    }
    match (sequence[index - 1].end_time, sequence[index].start_time) {
        (Some(prev_end), Some(start)) => start - prev_end > pause_threshold_secs,
        _ => false,
    }
}
