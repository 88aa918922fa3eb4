//! Dataset download and install flow.

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use nutrifind_db::{convert_dataset, write_cache};
use std::io::{BufReader, Cursor};
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Downloads the zipped dataset snapshot and parses the JSON it holds.
///
/// The upstream snapshots ship as zip archives with exactly one JSON entry;
/// anything else fails with [`FetchError::UnexpectedArchive`].
pub async fn download_dataset(config: &FetchConfig) -> Result<serde_json::Value> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()?;

    debug!(url = %config.dataset_url, "downloading dataset archive");

    let mut request = client.get(&config.dataset_url);
    if let Some(ref key) = config.api_key {
        request = request.query(&[("api_key", key)]);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status().as_u16(),
            url: config.dataset_url.clone(),
        });
    }

    let body = response.bytes().await?;
    info!(bytes = body.len(), "downloaded dataset archive");

    unpack_json(&body)
}

/// Reads the single JSON entry out of a zipped dataset snapshot.
fn unpack_json(archive_bytes: &[u8]) -> Result<serde_json::Value> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))?;

    if archive.len() != 1 {
        return Err(FetchError::UnexpectedArchive {
            entries: archive.len(),
        });
    }

    let entry = archive.by_index(0)?;
    let value = serde_json::from_reader(BufReader::new(entry))?;
    Ok(value)
}

/// Downloads the dataset, converts it, and persists the local database file
/// at `path`.
///
/// # Errors
/// Refuses to clobber an existing install with
/// [`FetchError::AlreadyInstalled`] unless `overwrite` is set. Conversion
/// and persistence errors pass through as [`FetchError::Db`].
pub async fn install(path: &Path, config: &FetchConfig, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(FetchError::AlreadyInstalled {
            path: path.to_path_buf(),
        });
    }

    let raw = download_dataset(config).await?;
    let entries = convert_dataset(&raw)?;
    write_cache(path, &entries)?;

    info!(foods = entries.len(), path = %path.display(), "installed food database");
    Ok(())
}
