use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

use crate::api::client::PairSource;
use crate::api::error::FetchError;
use crate::db::error::StoreError;
use crate::db::operations::{append_rows, partition_path};
use crate::db::queries::count_rows;
use crate::services::normalize::normalize_records;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Storage failed for {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

impl SnapshotError {
    pub fn category(&self) -> &'static str {
        match self {
            SnapshotError::Fetch(e) => e.category(),
            SnapshotError::Store { .. } => "storage",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotReport {
    pub snapshot_ts: String,
    pub written: usize,
    pub path: PathBuf,
}

/// ISO-8601 UTC with second precision, e.g. `2024-01-01T00:00:00+00:00`.
pub fn snapshot_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub async fn collect_snapshot<S: PairSource>(
    source: &S,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> Result<SnapshotReport, SnapshotError> {
    let snapshot_ts = snapshot_timestamp(now);
    let pairs = source.fetch_pairs().await?;
    let rows = normalize_records(&pairs, &snapshot_ts);

    let path = partition_path(out_dir, now.date_naive());
    let written = append_rows(&path, &rows).map_err(|err| SnapshotError::Store {
        path: path.clone(),
        source: err,
    })?;

    Ok(SnapshotReport { snapshot_ts, written, path })
}

/// Runs one snapshot and logs exactly one outcome line. Failures are reported
/// as zero rows written; nothing propagates to the caller.
pub async fn take_snapshot<S: PairSource>(source: &S, out_dir: &Path, now: DateTime<Utc>) -> usize {
    match collect_snapshot(source, out_dir, now).await {
        Ok(report) => {
            let total = count_rows(&report.path).unwrap_or(report.written);
            info!(
                "[OK] {} UTC wrote {} rows to {} (total {})",
                report.snapshot_ts,
                report.written,
                report.path.display(),
                total
            );
            report.written
        }
        Err(e) => {
            error!(category = e.category(), "[ERROR] {}: {}", e.category(), e);
            0
        }
    }
}
