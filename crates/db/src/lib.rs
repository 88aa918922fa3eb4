//! Food nutrient database for Nutrifind.
//!
//! This crate provides:
//! - [`FoodDb`]: an immutable in-memory map from food name to per-gram [`Nutrients`]
//! - [`Database`]: a lazily-loading lookup facade with fuzzy search and exact get
//! - Conversion from the upstream FoodData Central JSON shape
//! - The on-disk JSON cache the converted data persists to
//!
//! # Example
//!
//! ```no_run
//! use nutrifind_db::Database;
//!
//! let db = Database::open_default();
//!
//! for result in db.search("chicken breast", 5)? {
//!     println!("{:>3}  {}", result.score, result.item);
//! }
//!
//! let per_gram = db.get("Chicken breast, raw")?;
//! println!("{} kcal per 100 g", per_gram.multiply(100.0).calories());
//! # Ok::<(), nutrifind_db::DbError>(())
//! ```

mod cache;
mod convert;
mod error;
mod lookup;
mod store;

pub use cache::{default_db_path, read_cache, write_cache};
pub use convert::convert_dataset;
pub use error::{DbError, Result};
pub use lookup::{Database, DEFAULT_SEARCH_LIMIT};
pub use store::FoodDb;

pub use nutrifind_nutrients::{MacroAmounts, Nutrients};
pub use nutrifind_search::SearchResult;
