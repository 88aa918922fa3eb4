//! Case folding and word tokenization.

use unicode_segmentation::UnicodeSegmentation;

/// Case-folds a string for comparison.
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Splits a string into case-folded words, dropping punctuation.
///
/// Uses Unicode word boundaries, so `"Breast, chicken, raw"` tokenizes to
/// `["breast", "chicken", "raw"]`.
pub(crate) fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .unicode_words()
        .map(str::to_owned)
        .collect()
}
