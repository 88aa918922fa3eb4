//! Lookup facade over the lazily-loaded record store.

use crate::cache;
use crate::error::Result;
use crate::store::FoodDb;
use nutrifind_nutrients::Nutrients;
use nutrifind_search::{rank, SearchResult};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Handle to an installed food database.
///
/// Opening is cheap; the database file is parsed lazily on first use and
/// memoized for the lifetime of the value. Concurrent first loads are
/// serialized by the init-once cell, and the loaded store is immutable, so
/// a `Database` can be shared freely across threads. There is no reload:
/// drop the value and open a new one to pick up a reinstalled file.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    store: OnceCell<FoodDb>,
}

impl Database {
    /// Opens the database at the default install location.
    pub fn open_default() -> Self {
        Self::open(cache::default_db_path())
    }

    /// Opens a database file at `path`. The file is not touched until the
    /// first query.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: OnceCell::new(),
        }
    }

    /// Location of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Searches food names matching `query` most closely, ordered by
    /// descending similarity score.
    ///
    /// Any name in the results can be passed to [`Database::get`].
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult<String>>> {
        let store = self.store()?;

        let results = rank(query, store.names(), limit)
            .into_iter()
            .map(|r| SearchResult {
                item: r.item.to_owned(),
                score: r.score,
            })
            .collect();

        Ok(results)
    }

    /// Returns the per-gram [`Nutrients`] for the food with exactly this
    /// name. Never resolves fuzzy matches; use [`Database::search`] to find
    /// candidate names first.
    pub fn get(&self, name: &str) -> Result<Nutrients> {
        Ok(*self.store()?.get_exact(name)?)
    }

    /// A defensive copy of the full database, keyed by food name, safe for
    /// the caller to keep.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Nutrients>> {
        Ok(self.store()?.to_map())
    }

    /// Number of foods in the database, loading it if necessary.
    pub fn len(&self) -> Result<usize> {
        Ok(self.store()?.len())
    }

    fn store(&self) -> Result<&FoodDb> {
        self.store.get_or_try_init(|| {
            let entries = cache::read_cache(&self.path)?;
            let store = FoodDb::from_per_100g(entries)?;
            tracing::debug!(
                foods = store.len(),
                path = %self.path.display(),
                "loaded food database"
            );
            Ok(store)
        })
    }
}
