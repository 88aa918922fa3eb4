//! Ranked top-K extraction over a candidate universe.

use crate::fuzzy::similarity;
use crate::SearchResult;

/// Scores every candidate against `query` and returns the `limit` best,
/// ordered by descending score.
///
/// Ties keep the candidate iteration order, so repeated calls on the same
/// input are deterministic. A `limit` larger than the universe returns the
/// whole universe ranked; an empty universe returns an empty vector.
///
/// # Example
/// ```
/// use nutrifind_search::rank;
///
/// let results = rank("apple", ["Apple, raw", "Pineapple, canned"], 10);
/// assert_eq!(results[0].item, "Apple, raw");
/// ```
pub fn rank<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<SearchResult<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&'a str> = candidates.into_iter().collect();

    #[cfg(feature = "parallel")]
    let mut results: Vec<SearchResult<&'a str>> = {
        use rayon::prelude::*;
        names
            .par_iter()
            .map(|name| SearchResult {
                item: *name,
                score: similarity(query, name),
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<SearchResult<&'a str>> = names
        .iter()
        .map(|name| SearchResult {
            item: *name,
            score: similarity(query, name),
        })
        .collect();

    // Stable sort keeps input order between equal scores
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}
