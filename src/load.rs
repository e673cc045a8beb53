//! Loading sayings from JSON dataset files.
//!
//! A dataset is a JSON array of [`ProverbRecord`] objects. Records are
//! inserted in file order, so for a repeated saying the first record wins.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::db::ProverbIndex;
use crate::proverb::ProverbRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Adds every record from `reader` to `db`. Returns how many were new.
pub fn load_into<R: Read>(db: &mut ProverbIndex, reader: R) -> Result<usize, LoadError> {
    let records: Vec<ProverbRecord> = serde_json::from_reader(reader)?;
    let total = records.len();
    let before = db.len();
    db.extend(records);
    let added = db.len() - before;
    debug!(records = total, added, "loaded proverb dataset");
    Ok(added)
}

pub fn load_json<R: Read>(reader: R) -> Result<ProverbIndex, LoadError> {
    let mut db = ProverbIndex::new();
    load_into(&mut db, reader)?;
    Ok(db)
}

pub fn load_path(path: impl AsRef<Path>) -> Result<ProverbIndex, LoadError> {
    let file = File::open(path)?;
    load_json(BufReader::new(file))
}
