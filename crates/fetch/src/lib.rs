//! Remote dataset retrieval for Nutrifind.
//!
//! This crate provides:
//! - Environment-based [`FetchConfig`] pointing at the upstream dataset
//! - Download and unpacking of the single-entry zip the dataset ships as
//! - The install flow: download, convert, and persist the local database
//!
//! # Example
//!
//! ```no_run
//! use nutrifind_db::default_db_path;
//! use nutrifind_fetch::{install, FetchConfig};
//!
//! # async fn run() -> Result<(), nutrifind_fetch::FetchError> {
//! let config = FetchConfig::from_env();
//! install(&default_db_path(), &config, false).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod download;
mod error;

pub use config::FetchConfig;
pub use download::{download_dataset, install};
pub use error::{FetchError, Result};
