//! Fuzzy matching and similarity scoring.
//!
//! All public ratios are integers in `[0, 100]`. The composite
//! [`similarity`] score is the one used for ranking; the individual ratios
//! are exposed for callers that want a specific measure.

use crate::tokens::{normalize, tokenize};
use std::collections::BTreeSet;

/// Weight applied to the best-window partial score, so a short substring
/// hit cannot outrank an equally good whole-string match.
const PARTIAL_WEIGHT: f64 = 0.9;

/// Weight applied to the token-based scores.
const TOKEN_WEIGHT: f64 = 0.95;

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein_chars(&a_chars, &b_chars)
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows for space optimization
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit similarity in `[0.0, 1.0]`; two empty strings are identical.
fn edit_similarity(a: &[char], b: &[char]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_chars(a, b) as f64 / longest as f64
}

/// Normalized edit similarity of two case-folded strings.
///
/// 100 means identical after case folding.
pub fn ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    to_score(edit_similarity(&a, &b))
}

/// Best edit similarity of the shorter string against every same-length
/// window of the longer, so an exact substring scores 100.
///
/// Symmetric: the shorter operand always slides over the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    to_score(partial_similarity(&a, &b))
}

fn partial_similarity(a: &[char], b: &[char]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return if long.is_empty() { 1.0 } else { 0.0 };
    }

    long.windows(short.len())
        .map(|window| edit_similarity(short, window))
        .fold(0.0, f64::max)
}

/// Edit similarity of the two token lists after sorting, which makes the
/// score insensitive to word order.
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    to_score(token_sort_similarity(a, b))
}

fn token_sort_similarity(a: &str, b: &str) -> f64 {
    let mut a_tokens = tokenize(a);
    let mut b_tokens = tokenize(b);
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }
    a_tokens.sort();
    b_tokens.sort();

    let a_joined: Vec<char> = a_tokens.join(" ").chars().collect();
    let b_joined: Vec<char> = b_tokens.join(" ").chars().collect();
    edit_similarity(&a_joined, &b_joined)
}

/// Token-set similarity: compares the shared words against each side's
/// full word set, so `"chicken breast"` scores highly against
/// `"breast, chicken, raw"` despite the extra word.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    to_score(token_set_similarity(a, b))
}

fn token_set_similarity(a: &str, b: &str) -> f64 {
    let a_tokens: BTreeSet<String> = tokenize(a).into_iter().collect();
    let b_tokens: BTreeSet<String> = tokenize(b).into_iter().collect();
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let shared = join_tokens(a_tokens.intersection(&b_tokens));
    let a_full = join_tokens(a_tokens.iter());
    let b_full = join_tokens(b_tokens.iter());

    let shared: Vec<char> = shared.chars().collect();
    let a_full: Vec<char> = a_full.chars().collect();
    let b_full: Vec<char> = b_full.chars().collect();

    edit_similarity(&shared, &a_full)
        .max(edit_similarity(&shared, &b_full))
        .max(edit_similarity(&a_full, &b_full))
}

fn join_tokens<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    tokens.map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// Composite similarity score in `[0, 100]`.
///
/// Takes the maximum of the full edit ratio, the weighted best-window
/// partial ratio, and the weighted token-sort and token-set ratios.
/// Identical strings (after case folding) always score exactly 100, the
/// score is symmetric in its arguments, and a string that is empty after
/// trimming scores 0 against everything.
pub fn similarity(a: &str, b: &str) -> u32 {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let full = edit_similarity(&a_chars, &b_chars);
    let partial = PARTIAL_WEIGHT * partial_similarity(&a_chars, &b_chars);
    let sorted = TOKEN_WEIGHT * token_sort_similarity(&a, &b);
    let set = TOKEN_WEIGHT * token_set_similarity(&a, &b);

    to_score(full.max(partial).max(sorted).max(set))
}

fn to_score(value: f64) -> u32 {
    (value * 100.0).round() as u32
}
