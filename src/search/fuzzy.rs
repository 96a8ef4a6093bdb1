//! Edit-distance similarity scoring on a 0-100 integer scale.
//!
//! `ratio` is the classic Levenshtein ratio with substitutions costing 2
//! (equivalently: indel distance over the summed lengths). `partial_ratio`
//! aligns the shorter string against every equal-length window of the longer
//! one and keeps the best window ratio.

/// Length of the longest common subsequence, single-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> u32 {
    let total = a.len() + b.len();
    if total == 0 {
        // Two empty strings are identical
        return 100;
    }
    let matches = lcs_len(a, b);
    ((200 * matches) as f64 / total as f64).round() as u32
}

/// Whole-string similarity ratio, 0-100. Identical strings score 100.
pub fn ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best similarity of the shorter string against any equal-length
/// substring of the longer one, 0-100.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if shorter.is_empty() {
        return 100;
    }

    let mut best = 0;
    for window in longer.windows(shorter.len()) {
        best = best.max(ratio_chars(shorter, window));
        if best == 100 {
            break;
        }
    }
    best
}

/// Match score of a query against a title: the maximum of the whole-string
/// and best-substring ratios over the lower-cased inputs.
pub fn score(query: &str, title: &str) -> u32 {
    let query = query.to_lowercase();
    let title = title.to_lowercase();
    ratio(&query, &title).max(partial_ratio(&query, &title))
}
