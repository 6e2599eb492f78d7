use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::db::error::StoreError;
use crate::db::init::ensure_partition_dir;
use crate::db::models::{DedupKey, PairSnapshotRow};
use crate::db::schema::{
    KEY_COLUMN_PAIR_ADDRESS, KEY_COLUMN_SNAPSHOT_TS, PAIR_SNAPSHOT_COLUMNS,
    PARTITION_FILE_EXTENSION, PARTITION_FILE_PREFIX,
};

/// Daily partition file for `date` under `base_dir`.
pub fn partition_path(base_dir: &Path, date: NaiveDate) -> PathBuf {
    base_dir.join(format!(
        "{}{}.{}",
        PARTITION_FILE_PREFIX,
        date.format("%Y-%m-%d"),
        PARTITION_FILE_EXTENSION
    ))
}

/// Keys already present in a partition file.
///
/// Columns are located by header name. A file whose header lacks either key column
/// contributes no keys, and rows that cannot be parsed are skipped, so malformed
/// content never blocks new writes.
pub fn read_existing_keys(partition_path: &Path) -> Result<HashSet<DedupKey>, StoreError> {
    let mut keys = HashSet::new();
    if !partition_path.is_file() {
        return Ok(keys);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(partition_path)?;

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            warn!("Unreadable header in {}: {}", partition_path.display(), e);
            return Ok(keys);
        }
    };
    if headers.is_empty() {
        return Ok(keys);
    }

    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(address_idx), Some(ts_idx)) = (
        column(KEY_COLUMN_PAIR_ADDRESS),
        column(KEY_COLUMN_SNAPSHOT_TS),
    ) else {
        warn!(
            "Header of {} has no {}/{} columns; treating it as holding no keys",
            partition_path.display(),
            KEY_COLUMN_PAIR_ADDRESS,
            KEY_COLUMN_SNAPSHOT_TS
        );
        return Ok(keys);
    };

    let mut skipped = 0usize;
    for record in reader.records() {
        let Ok(record) = record else {
            skipped += 1;
            continue;
        };
        match (record.get(address_idx), record.get(ts_idx)) {
            (Some(address), Some(ts)) => {
                keys.insert(DedupKey::new(address, ts));
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("Skipped {} unparseable rows in {}", skipped, partition_path.display());
    }

    Ok(keys)
}

/// Appends the rows whose key is not yet on disk, nor earlier in `rows`.
/// Returns how many rows were written.
pub fn append_rows(partition_path: &Path, rows: &[PairSnapshotRow]) -> Result<usize, StoreError> {
    ensure_partition_dir(partition_path)?;

    let mut seen = read_existing_keys(partition_path)?;
    let fresh: Vec<&PairSnapshotRow> = rows
        .iter()
        .filter(|row| seen.insert(row.dedup_key()))
        .collect();

    debug!(
        "{} of {} candidate rows are new for {}",
        fresh.len(),
        rows.len(),
        partition_path.display()
    );
    if fresh.is_empty() {
        return Ok(0);
    }

    let existing_len = match partition_path.metadata() {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
        Err(e) => return Err(e.into()),
    };
    // Blank lines are not records, so a file holding only them still lacks a header.
    let needs_header = !holds_records(partition_path)?;
    let needs_newline = existing_len > 0 && !ends_with_newline(partition_path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(partition_path)?;
    if needs_newline {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    if needs_header {
        writer.write_record(PAIR_SNAPSHOT_COLUMNS)?;
    }
    for row in &fresh {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    Ok(fresh.len())
}

fn holds_records(path: &Path) -> Result<bool, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    for byte in BufReader::new(file).bytes() {
        if !matches!(byte?, b'\r' | b'\n') {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ends_with_newline(path: &Path) -> Result<bool, StoreError> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
