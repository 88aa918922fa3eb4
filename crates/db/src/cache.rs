//! On-disk JSON cache of the converted database.
//!
//! The file is a plain JSON object mapping food names to per-100-gram macro
//! amounts: `{"<food name>": {"fat": f, "carbs": f, "protein": f, "fiber": f}}`.
//! `carbs` is mandatory per entry; the other fields default to zero.

use crate::error::{DbError, Result};
use nutrifind_nutrients::MacroAmounts;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Directory name under the platform data dir holding the database file.
const DATA_DIR_NAME: &str = "nutrifind";

/// File name of the converted database.
const DB_FILE_NAME: &str = "food_db.json";

/// Default location of the installed database file, e.g.
/// `~/.local/share/nutrifind/food_db.json` on Linux.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
        .join(DB_FILE_NAME)
}

/// Reads the converted per-100-gram entries from `path`.
///
/// # Errors
/// Fails with [`DbError::NotInstalled`] when the file does not exist and
/// with [`DbError::Json`] when an entry does not match the expected shape.
pub fn read_cache(path: &Path) -> Result<BTreeMap<String, MacroAmounts>> {
    if !path.exists() {
        return Err(DbError::NotInstalled {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let entries = serde_json::from_reader(reader)?;
    Ok(entries)
}

/// Writes converted per-100-gram entries to `path`, creating parent
/// directories as needed.
///
/// # Errors
/// Fails with [`DbError::DuplicateFood`] when two entries share a name.
pub fn write_cache(path: &Path, entries: &[(String, MacroAmounts)]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut map = BTreeMap::new();
    for (name, amounts) in entries {
        if map.insert(name.as_str(), amounts).is_some() {
            return Err(DbError::DuplicateFood(name.clone()));
        }
    }

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, &map)?;
    Ok(())
}
