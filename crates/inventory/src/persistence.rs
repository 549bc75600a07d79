//! JSON persistence for the inventory.
//!
//! The document is a bare JSON object mapping item names to quantities:
//!
//! ```text
//! {
//!     "apple": 7,
//!     "banana": 5
//! }
//! ```
//!
//! Loading is replace-or-nothing: the new mapping is decoded and checked in
//! full before the in-memory inventory is swapped. Saving goes through a
//! sibling `.tmp` file that is renamed over the target.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use stockroom_core::ItemName;

use crate::stock::Inventory;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("error accessing file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading JSON file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid inventory data in {}: {reason}", .path.display())]
    InvalidEntry { path: PathBuf, reason: String },
}

impl PersistenceError {
    pub fn path(&self) -> &Path {
        match self {
            PersistenceError::Io { path, .. }
            | PersistenceError::Malformed { path, .. }
            | PersistenceError::InvalidEntry { path, .. } => path,
        }
    }
}

/// What a successful [`load`] found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document was read; `items` entries are now held.
    Loaded { items: usize },
    /// No document exists at the path; the inventory was reset to empty.
    Missing,
}

/// Replace `inventory` with the document at `path`.
///
/// A missing file is not an error: the inventory starts empty. Any other
/// failure leaves `inventory` unchanged.
pub fn load(inventory: &mut Inventory, path: impl AsRef<Path>) -> Result<LoadOutcome, PersistenceError> {
    let path = path.as_ref();
    match read(path) {
        Ok(Some(loaded)) => {
            let items = loaded.len();
            *inventory = loaded;
            tracing::info!(path = %path.display(), items, "data successfully loaded from {}", path.display());
            Ok(LoadOutcome::Loaded { items })
        }
        Ok(None) => {
            inventory.clear();
            tracing::warn!(path = %path.display(), "file {} not found, starting with empty inventory", path.display());
            Ok(LoadOutcome::Missing)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), "{err}");
            Err(err)
        }
    }
}

/// Decode the document at `path` without touching any live inventory.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read(path: &Path) -> Result<Option<Inventory>, PersistenceError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let raw: BTreeMap<ItemName, i64> = serde_json::from_str(&content).map_err(|source| {
        if source.is_data() {
            PersistenceError::InvalidEntry {
                path: path.to_path_buf(),
                reason: source.to_string(),
            }
        } else {
            PersistenceError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if let Some((name, qty)) = raw.iter().find(|(_, qty)| **qty < 0) {
        return Err(PersistenceError::InvalidEntry {
            path: path.to_path_buf(),
            reason: format!("quantity for '{name}' is negative ({qty})"),
        });
    }
    for name in raw.iter().filter(|(_, qty)| **qty == 0).map(|(name, _)| name) {
        tracing::debug!(item = %name, "skipping zero-quantity entry");
    }

    Ok(Some(Inventory::from_checked(raw)))
}

/// Write `inventory` to `path` as sorted, 4-space indented JSON.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let tmp = tmp_path(path);

    let result = write_document(inventory, &tmp).and_then(|()| fs::rename(&tmp, path));
    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), items = inventory.len(), "data successfully saved to {}", path.display());
            Ok(())
        }
        Err(source) => {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::debug!(tmp = %tmp.display(), "could not remove temporary file: {cleanup}");
            }
            let err = PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!(path = %path.display(), "{err}");
            Err(err)
        }
    }
}

fn write_document(inventory: &Inventory, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    inventory.serialize(&mut serde_json::Serializer::with_formatter(
        &mut writer,
        PrettyFormatter::with_indent(b"    "),
    ))?;
    writer.write_all(b"\n")?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
