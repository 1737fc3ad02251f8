//! JSON files on disk
//!
//! Reads tolerate a missing file; writes go through a sibling temp file and
//! a rename so a crash never leaves half a document behind.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BankError;

fn storage_error(action: &str, path: &Path, err: impl Display) -> BankError {
    BankError::Storage(format!("{} {}: {}", action, path.display(), err))
}

/// Load a JSON document, or `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, BankError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("Can't open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("Can't parse", path, e))
}

/// Replace a JSON document in one step
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BankError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("Can't create", dir, e))?;
    }

    // Same directory as the target, or the rename is not atomic
    let staging = path.with_extension("json.tmp");
    let written = File::create(&staging)
        .map_err(|e| storage_error("Can't create", &staging, e))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, data)
                .map_err(|e| storage_error("Can't serialize", path, e))?;
            writer
                .flush()
                .and_then(|()| writer.get_ref().sync_all())
                .map_err(|e| storage_error("Can't flush", &staging, e))
        })
        .and_then(|()| fs::rename(&staging, path).map_err(|e| storage_error("Can't replace", path, e)));

    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written
}
