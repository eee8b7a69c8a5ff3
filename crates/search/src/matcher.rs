//! Approximate string matching.
//!
//! Everything here is case-insensitive and works on Unicode scalar values,
//! so a multi-byte character counts as one edit.

/// Default maximum edit distance for a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

/// Tokens shorter than this are never compared by edit distance.
pub const MIN_TOKEN_LEN: usize = 3;

/// Calculate the Levenshtein edit distance between two strings, ignoring case.
///
/// Insertions, deletions and substitutions each cost 1.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars = lowercase_chars(a);
    let b_chars = lowercase_chars(b);
    levenshtein(&a_chars, &b_chars)
}

/// Check whether `query` approximately occurs in `text`.
///
/// A match is, in order of checking:
/// 1. `query` is a case-insensitive substring of `text`
/// 2. some whitespace token of `text` (at least [`MIN_TOKEN_LEN`] chars) is
///    within `threshold` edits of `query`
/// 3. some `query`-length window inside such a token is within `threshold`
///    edits of `query`, which catches typos inside compound words
///
/// An empty query is contained in every text and always matches.
pub fn fuzzy_match(query: &str, text: &str, threshold: usize) -> bool {
    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();

    if text_lower.contains(&query_lower) {
        return true;
    }

    let query_chars: Vec<char> = query_lower.chars().collect();

    text_lower
        .split_whitespace()
        .map(|token| token.chars().collect::<Vec<char>>())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .any(|token| token_matches(&query_chars, &token, threshold))
}

fn token_matches(query: &[char], token: &[char], threshold: usize) -> bool {
    if levenshtein(query, token) <= threshold {
        return true;
    }

    token.len() >= query.len()
        && !query.is_empty()
        && token
            .windows(query.len())
            .any(|window| levenshtein(query, window) <= threshold)
}

fn lowercase_chars(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Two-row dynamic programming over the `(m+1) x (n+1)` edit table.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
