//! Input boundary: reads the reference passage and the transcript from
//! disk. Malformed transcript records are dropped here so the engine
//! never sees them.

use crate::align::SpokenWord;
use crate::error::RaResult;
use serde::Deserialize;
use std::fs;
use tracing::warn;

/// A transcript record as it arrives from the recognizer. Everything is
/// optional so one bad record cannot fail the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSpokenRecord {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    confidence: Option<f32>,
    #[serde(default)]
    start_time: Option<f64>,
    #[serde(default)]
    end_time: Option<f64>,
}

pub fn load_reference(path: &str) -> RaResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(reference_words(&content))
}

/// Splits raw passage text into reference words, dropping tokens with no
/// alphanumeric content (stray punctuation from OCR).
pub fn reference_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|t| t.chars().any(|c| c.is_alphanumeric()))
        .map(|t| t.to_string())
        .collect()
}

pub fn load_transcript(path: &str) -> RaResult<Vec<SpokenWord>> {
    let content = fs::read_to_string(path)?;
    parse_transcript(&content)
}

/// Parses a JSON array of spoken-word records. Records without a text
/// field are dropped (treated as absent, not as empty words); missing
/// confidence defaults to 1.0.
pub fn parse_transcript(json: &str) -> RaResult<Vec<SpokenWord>> {
    let records: Vec<RawSpokenRecord> = serde_json::from_str(json)?;

    let mut words = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        match record.text {
            Some(text) => words.push(SpokenWord {
                text,
                confidence: record.confidence.unwrap_or(1.0),
                start_time: record.start_time,
                end_time: record.end_time,
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("⚠️  Dropped {} transcript records without a text field.", dropped);
    }
    Ok(words)
}
