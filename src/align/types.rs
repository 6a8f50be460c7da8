use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// One transcribed token from the audio reading. Timestamps are seconds
/// since recording start and may be absent; all downstream logic treats
/// missing timing as "no hesitation signal".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokenWord {
    pub text: String,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl SpokenWord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: 1.0,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_timing(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            confidence: 1.0,
            start_time: Some(start),
            end_time: Some(end),
        }
    }
}

/// One step of the backtracked path through the DP table.
/// `spoken_idx` indexes the *cleaned* spoken sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentOp {
    Match { ref_idx: usize, spoken_idx: usize },
    Skip { ref_idx: usize },
    Insert { spoken_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Correct,
    Misread,
    Skipped,
}

/// Per-reference-word outcome, in reference order. The primary output unit:
/// every reference word appears exactly once, matched or skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedItem {
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoken: Option<String>,
    pub status: WordStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    pub ref_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HesitationKind {
    Filler,
    Pause,
}

/// A disfluency in the raw spoken sequence: either a filler token or a
/// long silence before the word at `index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hesitation {
    pub index: usize,
    pub kind: HesitationKind,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatedWord {
    pub index: usize,
    pub word: String,
}

/// A maximal run of consecutive skipped reference words. `start` and `end`
/// are inclusive reference indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRun {
    pub start: usize,
    pub end: usize,
    pub count: usize,
}

/// A two-word phrase said more often than the text contains it. `indices`
/// are the first two raw spoken positions where the phrase starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatedPhrase {
    pub phrase: String,
    pub indices: [usize; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MisreadPair {
    pub expected: String,
    pub spoken: String,
    pub ref_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSummary {
    pub skipped_word_indices: Vec<usize>,
    pub misread_pairs: Vec<MisreadPair>,
    pub hesitations: Vec<Hesitation>,
    pub repeated_words: Vec<RepeatedWord>,
    pub skipped_line_runs: Vec<SkippedRun>,
    pub repeated_phrases: Vec<RepeatedPhrase>,
}

/// Wall-clock facts about the reading, available only when the transcript
/// carries timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSummary {
    pub duration_secs: f64,
    pub words_per_minute: f32,
}

/// The full analysis result: a pure value computed once per
/// (reference, transcript) pair. Re-running produces a fresh report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub aligned_items: Vec<AlignedItem>,
    pub correct_count: usize,
    pub misread_count: usize,
    pub skipped_count: usize,
    /// Fraction of reference words read correctly, in [0, 1].
    pub accuracy: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingSummary>,
    pub errors: ErrorSummary,
}
