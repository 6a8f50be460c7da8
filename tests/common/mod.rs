#![allow(dead_code)]
use readalign::align::SpokenWord;

pub fn words(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

pub fn spoken(tokens: &[&str]) -> Vec<SpokenWord> {
    tokens.iter().map(|t| SpokenWord::new(*t)).collect()
}

/// Spoken words with synthetic back-to-back timing, 0.4s per word.
pub fn spoken_timed(tokens: &[&str]) -> Vec<SpokenWord> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| SpokenWord::with_timing(*t, i as f64 * 0.4, i as f64 * 0.4 + 0.35))
        .collect()
}
