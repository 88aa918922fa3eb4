//! Fuzzy food-name search for Nutrifind.
//!
//! This crate provides:
//! - Levenshtein edit distance and normalized similarity ratios
//! - Word-order-insensitive token scoring
//! - Ranked top-K extraction over a candidate universe
//!
//! Scores are integers in `[0, 100]` where 100 means the strings are
//! identical after case folding. The composite [`similarity`] score
//! tolerates case, word order, and partial substring containment, so
//! `"chicken breast"` ranks highly against `"Breast, chicken, raw"`.
//!
//! # Example
//!
//! ```
//! use nutrifind_search::rank;
//!
//! let foods = ["Apple, raw", "Beef, ground, raw", "Chicken breast, raw"];
//! let results = rank("chicken breast", foods, 2);
//!
//! assert_eq!(results[0].item, "Chicken breast, raw");
//! assert!(results[0].score >= 60);
//! ```

mod fuzzy;
mod rank;
mod tokens;

pub use fuzzy::{
    levenshtein_distance, partial_ratio, ratio, similarity, token_set_ratio, token_sort_ratio,
};
pub use rank::rank;

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Similarity score in `[0, 100]` (higher is better)
    pub score: u32,
}
