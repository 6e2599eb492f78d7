use chrono::Utc;
use std::path::Path;
use tokio::time::{sleep, Duration};

use crate::api::client::PairSource;
use crate::services::snapshot::take_snapshot;

/// Takes a snapshot, waits `interval`, repeats. Never returns on its own.
pub async fn start_collecting<S: PairSource>(source: &S, out_dir: &Path, interval: Duration) {
    tracing::info!(
        "[START] Looping every {}s, writing to {}",
        interval.as_secs(),
        out_dir.display()
    );

    loop {
        take_snapshot(source, out_dir, Utc::now()).await;
        sleep(interval).await;
    }
}
