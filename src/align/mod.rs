pub mod aggregate;
pub mod clean;
pub mod engine;
pub mod normalize;
pub mod similarity;
pub mod tokens;
pub mod types;

pub use self::types::{AlignedItem, AnalysisReport, SpokenWord, WordStatus};

use crate::config::Config;

/// Stateless analysis engine: a function of its two input sequences plus
/// the configured thresholds. Safe to share across threads and to invoke
/// concurrently on independent inputs.
pub struct Analyzer {
    pub config: Config,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Full pipeline: currency-expand the reference, clean the spoken
    /// sequence, align, then aggregate into a report. Degenerate inputs
    /// (empty reference or transcript) produce a well-formed report.
    pub fn analyze(&self, reference: &[String], spoken: &[SpokenWord]) -> AnalysisReport {
        let expanded = normalize::expand_reference(reference);
        let cleaned = clean::clean_spoken(spoken);
        let ops = engine::align(self, &expanded, &cleaned);
        aggregate::build_report(self, &expanded, spoken, &cleaned, &ops)
    }
}
