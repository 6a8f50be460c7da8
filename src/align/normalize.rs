//! Token canonicalization. Everything the aligner compares goes through
//! `normalize` first, so "Ten," and "10" land on the same form.

/// Canonical form of a token: lower-cased, alphanumerics only, with
/// digit strings and number words unified onto the word form.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(token: &str) -> String {
    let stripped: String = token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    if stripped.is_empty() {
        return stripped;
    }

    if stripped.chars().all(|c| c.is_ascii_digit()) {
        return match digit_to_word(&stripped) {
            Some(w) => w.to_string(),
            // Unmapped digit strings (e.g. "1987") pass through unchanged.
            None => stripped,
        };
    }

    // Number words round-trip through digit form so "ten" and "10"
    // normalize identically.
    if let Some(digits) = word_to_digit(&stripped) {
        if let Some(w) = digit_to_word(digits) {
            return w.to_string();
        }
    }

    stripped
}

fn digit_to_word(digits: &str) -> Option<&'static str> {
    let w = match digits {
        "0" => "zero",
        "1" => "one",
        "2" => "two",
        "3" => "three",
        "4" => "four",
        "5" => "five",
        "6" => "six",
        "7" => "seven",
        "8" => "eight",
        "9" => "nine",
        "10" => "ten",
        "11" => "eleven",
        "12" => "twelve",
        "13" => "thirteen",
        "14" => "fourteen",
        "15" => "fifteen",
        "16" => "sixteen",
        "17" => "seventeen",
        "18" => "eighteen",
        "19" => "nineteen",
        "20" => "twenty",
        "30" => "thirty",
        "40" => "forty",
        "50" => "fifty",
        "60" => "sixty",
        "70" => "seventy",
        "80" => "eighty",
        "90" => "ninety",
        "100" => "hundred",
        "1000" => "thousand",
        _ => return None,
    };
    Some(w)
}

fn word_to_digit(word: &str) -> Option<&'static str> {
    let d = match word {
        "zero" => "0",
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        "eleven" => "11",
        "twelve" => "12",
        "thirteen" => "13",
        "fourteen" => "14",
        "fifteen" => "15",
        "sixteen" => "16",
        "seventeen" => "17",
        "eighteen" => "18",
        "nineteen" => "19",
        "twenty" => "20",
        "thirty" => "30",
        "forty" => "40",
        "fifty" => "50",
        "sixty" => "60",
        "seventy" => "70",
        "eighty" => "80",
        "ninety" => "90",
        "hundred" => "100",
        "thousand" => "1000",
        _ => return None,
    };
    Some(d)
}

/// Expands currency tokens in the reference into their spoken-word
/// equivalents before alignment, so a reader saying "one dollar fifty"
/// lines up against a printed "$1.50". Non-currency tokens pass through.
pub fn expand_reference(reference: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(reference.len());
    for token in reference {
        match expand_currency(token) {
            Some(parts) => out.extend(parts),
            None => out.push(token.clone()),
        }
    }
    out
}

/// `$<digits>` or `$<digits>.<digits>` -> ["<dollars>", "dollar"] plus
/// ["<cents>", "cents"] when the cents part is non-zero.
fn expand_currency(token: &str) -> Option<Vec<String>> {
    let body = token.strip_prefix('$')?;
    let (dollars, cents) = match body.split_once('.') {
        Some((d, c)) => (d, Some(c)),
        None => (body, None),
    };

    if dollars.is_empty() || !dollars.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if let Some(c) = cents {
        if c.is_empty() || !c.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
    }

    let mut parts = vec![dollars.to_string(), "dollar".to_string()];
    if let Some(c) = cents {
        let trimmed = c.trim_start_matches('0');
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
            parts.push("cents".to_string());
        }
    }
    Some(parts)
}
