//! Pre-alignment filtering of the spoken sequence. The raw sequence is
//! kept side by side: the aligner consumes the cleaned view, while the
//! aggregator still scans the raw one for hesitations and repeats.

use super::normalize::normalize;
use super::tokens;
use super::types::SpokenWord;

/// A retained spoken word plus its position in the raw transcript.
#[derive(Debug, Clone, Copy)]
pub struct CleanedWord<'a> {
    pub raw_index: usize,
    pub word: &'a SpokenWord,
}

/// Drops filler tokens and immediate repeats of the previous *retained*
/// entry, preserving order and original indices.
pub fn clean_spoken(spoken: &[SpokenWord]) -> Vec<CleanedWord<'_>> {
    let mut kept: Vec<CleanedWord> = Vec::with_capacity(spoken.len());
    for (i, word) in spoken.iter().enumerate() {
        if tokens::is_filler(&word.text) {
            continue;
        }
        if let Some(prev) = kept.last() {
            if normalize(&prev.word.text) == normalize(&word.text) {
                continue;
            }
        }
        kept.push(CleanedWord {
            raw_index: i,
            word,
        });
    }
    kept
}
