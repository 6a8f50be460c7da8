// ===== readalign/src/api.rs =====
use crate::align::{AnalysisReport, Analyzer, SpokenWord};
use crate::config::Config;
use rayon::prelude::*;
use tracing::debug;

/// Service: Analyze one reading of a reference passage.
///
/// Deterministic given identical inputs; total time bounded by O(m*n)
/// over the reference and cleaned spoken lengths.
pub fn analyze(reference: &[String], spoken: &[SpokenWord], config: &Config) -> AnalysisReport {
    debug!(
        "Analyzing {} reference words against {} spoken words",
        reference.len(),
        spoken.len()
    );
    Analyzer::new(config.clone()).analyze(reference, spoken)
}

/// Service: Analyze many independent readings of the same passage in
/// parallel. Output order matches input order.
pub fn analyze_batch(
    reference: &[String],
    transcripts: &[Vec<SpokenWord>],
    config: &Config,
) -> Vec<AnalysisReport> {
    let analyzer = Analyzer::new(config.clone());
    transcripts
        .par_iter()
        .map(|spoken| analyzer.analyze(reference, spoken))
        .collect()
}
