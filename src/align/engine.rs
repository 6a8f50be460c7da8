//! Global alignment of reference words against the cleaned spoken
//! sequence. Needleman-Wunsch shape with an asymmetric gap model:
//! omitting a reference word costs more than an extra spoken word.

use super::clean::CleanedWord;
use super::normalize::normalize;
use super::similarity::are_similar;
use super::types::AlignmentOp;
use super::Analyzer;

/// Backtrack decision per DP cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    Match,
    Skip,
    Insert,
}

/// Computes the optimal alignment path. O(m*n) time and space; the two
/// arenas are flat row-major arrays scoped to this call. Empty inputs
/// terminate through the base row/column without error.
pub fn align(analyzer: &Analyzer, reference: &[String], spoken: &[CleanedWord]) -> Vec<AlignmentOp> {
    let w = &analyzer.config.weights;
    let threshold = analyzer.config.detection.similarity_threshold;

    let m = reference.len();
    let n = spoken.len();
    let width = n + 1;

    let mut dp = vec![0.0f32; (m + 1) * width];
    let mut back = vec![Step::Start; (m + 1) * width];

    for i in 1..=m {
        dp[i * width] = -(i as f32) * w.penalty_skip;
        back[i * width] = Step::Skip;
    }
    for j in 1..=n {
        dp[j] = -(j as f32) * w.penalty_insert;
        back[j] = Step::Insert;
    }

    let ref_norm: Vec<String> = reference.iter().map(|t| normalize(t)).collect();
    let spk_norm: Vec<String> = spoken.iter().map(|c| normalize(&c.word.text)).collect();

    for i in 1..=m {
        for j in 1..=n {
            let e = &ref_norm[i - 1];
            let s = &spk_norm[j - 1];

            let match_score = if !e.is_empty() && e == s {
                w.bonus_match
            } else if are_similar(e, s, threshold) {
                w.bonus_similar
            } else {
                -w.penalty_mismatch
            };

            let match_opt = dp[(i - 1) * width + (j - 1)] + match_score;
            let skip_opt = dp[(i - 1) * width + j] - w.penalty_skip;
            let insert_opt = dp[i * width + (j - 1)] - w.penalty_insert;

            // Ties resolve match > skip > insert: consuming both sequences
            // together keeps the path deterministic.
            let (best, step) = if match_opt >= skip_opt && match_opt >= insert_opt {
                (match_opt, Step::Match)
            } else if skip_opt >= insert_opt {
                (skip_opt, Step::Skip)
            } else {
                (insert_opt, Step::Insert)
            };

            dp[i * width + j] = best;
            back[i * width + j] = step;
        }
    }

    let mut ops = Vec::with_capacity(m + n);
    let mut i = m;
    let mut j = n;
    while i > 0 || j > 0 {
        match back[i * width + j] {
            Step::Match => {
                i -= 1;
                j -= 1;
                ops.push(AlignmentOp::Match {
                    ref_idx: i,
                    spoken_idx: j,
                });
            }
            Step::Skip => {
                i -= 1;
                ops.push(AlignmentOp::Skip { ref_idx: i });
            }
            Step::Insert => {
                j -= 1;
                ops.push(AlignmentOp::Insert { spoken_idx: j });
            }
            Step::Start => break,
        }
    }
    ops.reverse();
    ops
}
