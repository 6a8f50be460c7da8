use super::normalize::normalize;

/// Classic Levenshtein distance over chars. Insertion, deletion and
/// substitution each cost 1; computed in a flat (m+1)x(n+1) arena.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();
    let width = n + 1;

    let mut dp = vec![0usize; (m + 1) * width];
    for (i, cell) in dp.iter_mut().step_by(width).enumerate() {
        *cell = i;
    }
    for (j, cell) in dp[..width].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let sub = dp[(i - 1) * width + (j - 1)] + usize::from(a[i - 1] != b[j - 1]);
            let del = dp[(i - 1) * width + j] + 1;
            let ins = dp[i * width + (j - 1)] + 1;
            dp[i * width + j] = sub.min(del).min(ins);
        }
    }
    dp[m * width + n]
}

/// Whether a spoken word is close enough to the expected word to count
/// as the reader attempting it. Normalized-equal always passes; otherwise
/// the similarity ratio must clear `threshold`. Empty normalized forms
/// never match anything.
pub fn are_similar(expected: &str, spoken: &str, threshold: f32) -> bool {
    let e = normalize(expected);
    let s = normalize(spoken);

    if e.is_empty() || s.is_empty() {
        return false;
    }
    if e == s {
        return true;
    }

    let dist = edit_distance(&e, &s);
    let max_len = e.chars().count().max(s.chars().count());
    1.0 - (dist as f32 / max_len as f32) >= threshold
}
