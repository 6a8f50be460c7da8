use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub detection: DetectionParams,
}

/// Alignment scoring constants. The defaults are the empirically tuned
/// values the whole report pipeline was calibrated against; changing them
/// shifts how aggressively the aligner pairs words versus skipping them.
#[derive(Args, Debug, Clone)]
pub struct ScoringWeights {
    // === MATCH SCORES ===
    // Exact match after normalization.
    #[arg(long, default_value_t = 1.0)]
    pub bonus_match: f32,

    // Near-miss match (misread). Partial credit keeps a misread pairing
    // preferable to a skip+insert pair.
    #[arg(long, default_value_t = 0.3)]
    pub bonus_similar: f32,

    // Pairing two unrelated words.
    #[arg(long, default_value_t = 1.0)]
    pub penalty_mismatch: f32,

    // === GAP COSTS ===
    // Omitting a reference word. Omissions hurt more than extra speech.
    #[arg(long, default_value_t = 1.0)]
    pub penalty_skip: f32,

    // An extra spoken word. Recognizers over-produce routinely, so this
    // is cheaper than a skip.
    #[arg(long, default_value_t = 0.5)]
    pub penalty_insert: f32,
}

#[derive(Args, Debug, Clone)]
pub struct DetectionParams {
    // Minimum similarity ratio (1 - dist/max_len) for a misread pairing.
    #[arg(long, default_value_t = 0.60)]
    pub similarity_threshold: f32,

    // Inter-word silence above this many seconds counts as a hesitation.
    #[arg(long, default_value_t = 1.0)]
    pub pause_threshold_secs: f64,

    // Consecutive skipped words needed before a run is reported as a
    // skipped line. Runs of 1-2 are noise.
    #[arg(long, default_value_t = 3)]
    pub min_skipped_run: usize,

    // A two-word phrase must appear this many times in speech (and more
    // often than in the reference) to be flagged as a repeat.
    #[arg(long, default_value_t = 2)]
    pub min_phrase_count: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            bonus_match: 1.0,
            bonus_similar: 0.3,
            penalty_mismatch: 1.0,
            penalty_skip: 1.0,
            penalty_insert: 0.5,
        }
    }
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.60,
            pause_threshold_secs: 1.0,
            min_skipped_run: 3,
            min_phrase_count: 2,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            detection: DetectionParams::default(),
        }
    }
}
