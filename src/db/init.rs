use std::fs;
use std::path::Path;
use crate::db::error::StoreError;

pub fn ensure_partition_dir(partition_path: &Path) -> Result<(), StoreError> {
    let Some(parent) = partition_path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent)?;
    tracing::info!("Created output directory {}", parent.display());
    Ok(())
}
